//! Arithmetic node rules. The operator itself lives in `ops`; these rules
//! only pick the operands.

use super::children;
use crate::{EvalResult, Node, Thunk, ops};
use std::rc::Rc;

/// `a + b`: numeric addition or string concatenation, decided by the
/// forced operands.
pub(super) fn concat(node: &Node) -> EvalResult<Rc<Thunk>> {
    let [lhs, rhs] = children(node)?;
    Ok(Thunk::deferred(move || ops::add(&lhs.force()?, &rhs.force()?)))
}

/// `-e`; the first child is the `Negative` token.
pub(super) fn negative_expr(node: &Node) -> EvalResult<Rc<Thunk>> {
    let [_minus, operand] = children(node)?;
    Ok(Thunk::deferred(move || ops::negate(&operand.force()?)))
}

pub(super) fn call_neg(node: &Node) -> EvalResult<Rc<Thunk>> {
    let [operand] = children(node)?;
    Ok(Thunk::deferred(move || ops::negate(&operand.force()?)))
}

pub(super) fn call_sub(node: &Node) -> EvalResult<Rc<Thunk>> {
    let [lhs, rhs] = children(node)?;
    Ok(Thunk::deferred(move || ops::sub(&lhs.force()?, &rhs.force()?)))
}
