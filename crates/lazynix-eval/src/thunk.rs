//! Deferred, memoized computations.

use crate::{EvalError, EvalResult, Value};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

enum ThunkState {
    /// Not yet forced.
    Deferred(Box<dyn FnOnce() -> EvalResult<Value>>),
    /// Being forced right now; re-entering means the value depends on itself.
    Forcing,
    Forced(EvalResult<Value>),
}

/// A zero-argument deferred computation producing a [`Value`].
///
/// The computation runs at most once. Its outcome, error or value, is
/// cached and returned by every later [`Thunk::force`].
pub struct Thunk {
    state: RefCell<ThunkState>,
}

impl Thunk {
    pub fn deferred(compute: impl FnOnce() -> EvalResult<Value> + 'static) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(ThunkState::Deferred(Box::new(compute))),
        })
    }

    /// An already evaluated thunk.
    pub fn ready(value: Value) -> Rc<Self> {
        Rc::new(Self {
            state: RefCell::new(ThunkState::Forced(Ok(value))),
        })
    }

    pub fn force(&self) -> EvalResult<Value> {
        let state = std::mem::replace(&mut *self.state.borrow_mut(), ThunkState::Forcing);
        match state {
            ThunkState::Forced(result) => {
                *self.state.borrow_mut() = ThunkState::Forced(result.clone());
                result
            }
            ThunkState::Forcing => Err(EvalError::InfiniteRecursion),
            ThunkState::Deferred(compute) => {
                let result = compute();
                *self.state.borrow_mut() = ThunkState::Forced(result.clone());
                result
            }
        }
    }

    /// The cached value, if the thunk has been forced successfully.
    /// Never runs the computation.
    pub fn peek(&self) -> Option<Value> {
        match &*self.state.borrow() {
            ThunkState::Forced(Ok(value)) => Some(value.clone()),
            _ => None,
        }
    }

    pub fn is_forced(&self) -> bool {
        matches!(&*self.state.borrow(), ThunkState::Forced(_))
    }
}

impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            ThunkState::Deferred(_) => write!(f, "<thunk>"),
            ThunkState::Forcing => write!(f, "<forcing>"),
            ThunkState::Forced(Ok(value)) => write!(f, "{:?}", value),
            ThunkState::Forced(Err(err)) => write!(f, "<error: {}>", err),
        }
    }
}
