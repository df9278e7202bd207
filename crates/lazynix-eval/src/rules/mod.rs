//! The evaluation rule table: one reduction rule per node kind.
//!
//! A rule turns a node into its thunk. Rules capture child *nodes*, never
//! child values, and look up the children's thunks only when forced, so
//! the order in which nodes get wired does not matter as long as every
//! node is wired before the first force.
//!
//! A thunk never holds its own node. Leaf rules copy the text they need.

mod apply;
mod arith;
mod literal;
mod structural;

use crate::{EvalError, EvalResult, Node, NodeKind, PrimopTable, Value};
use std::rc::Rc;

/// Kind-indexed rule dispatch, built once per evaluator.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    primops: PrimopTable,
}

impl RuleTable {
    pub fn new(primops: PrimopTable) -> Self {
        Self { primops }
    }

    pub fn primops(&self) -> &PrimopTable {
        &self.primops
    }

    /// Attach a thunk to `node` unless it already has one.
    ///
    /// Token kinds (`Add`, `Negative`) and `Attr` stay without a thunk;
    /// their parents read them structurally. An empty document stays
    /// without one as well. Kinds with no rule fail with `NotImplemented`.
    pub fn wire(&self, node: &Rc<Node>) -> EvalResult<()> {
        if node.is_wired() {
            return Ok(());
        }

        let thunk = match node.kind() {
            NodeKind::Nix if node.children().is_empty() => return Ok(()),
            NodeKind::Nix | NodeKind::Parens => structural::passthrough(node)?,

            NodeKind::True => literal::constant(Value::Bool(true)),
            NodeKind::False => literal::constant(Value::Bool(false)),
            NodeKind::Null => literal::constant(Value::Null),
            NodeKind::Int => literal::int(node)?,
            NodeKind::Float => literal::float(node)?,
            NodeKind::String => literal::string(node)?,
            NodeKind::Identifier => literal::identifier(node)?,

            NodeKind::If => structural::if_then_else(node)?,
            NodeKind::AttrSet => structural::attr_set(node)?,
            NodeKind::Select => structural::select(node)?,
            NodeKind::List => structural::list(node),

            NodeKind::ConcatStrings => arith::concat(node)?,
            NodeKind::NegativeExpr => arith::negative_expr(node)?,
            NodeKind::CallNeg => arith::call_neg(node)?,
            NodeKind::CallSub => arith::call_sub(node)?,

            NodeKind::ApplyExpr => apply::apply_expr(node)?,
            NodeKind::Call => apply::call(node)?,
            NodeKind::Primop => self.primops.wire(node)?,

            NodeKind::Add | NodeKind::Negative | NodeKind::Attr => return Ok(()),

            NodeKind::RecAttrSet | NodeKind::Let | NodeKind::Var | NodeKind::Unknown(_) => {
                return Err(EvalError::NotImplemented {
                    kind: node.kind().to_string(),
                    span: node.span(),
                });
            }
        };

        tracing::trace!(kind = %node.kind(), span = %node.span(), "wired");
        node.set_thunk(thunk);
        Ok(())
    }
}

/// The node's children as a fixed-size array, or `MalformedNode`.
pub(crate) fn children<const N: usize>(node: &Node) -> EvalResult<[Rc<Node>; N]> {
    <[Rc<Node>; N]>::try_from(node.children().to_vec()).map_err(|found| {
        EvalError::MalformedNode {
            kind: node.kind().to_string(),
            expected: N,
            found: found.len(),
            span: node.span(),
        }
    })
}
