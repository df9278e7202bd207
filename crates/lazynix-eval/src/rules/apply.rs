//! Function application.

use super::children;
use crate::{EvalResult, Node, NodeKind, Thunk, ops};
use std::rc::Rc;

/// `f x` applies `f` to the unforced `x`.
///
/// Subtraction reaches here too: `a - b` parses as `a` applied to the
/// negative expression `-b`, and evaluates as `a + (-b)`.
pub(super) fn apply_expr(node: &Node) -> EvalResult<Rc<Thunk>> {
    let [func, arg] = children(node)?;
    if arg.kind() == &NodeKind::NegativeExpr {
        return Ok(Thunk::deferred(move || {
            ops::add(&func.force()?, &arg.force()?)
        }));
    }
    Ok(Thunk::deferred(move || func.force()?.apply(arg.thunk()?)))
}

/// Primop application. Never subtraction.
pub(super) fn call(node: &Node) -> EvalResult<Rc<Thunk>> {
    let [func, arg] = children(node)?;
    Ok(Thunk::deferred(move || func.force()?.apply(arg.thunk()?)))
}
