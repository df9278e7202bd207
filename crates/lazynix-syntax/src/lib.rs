//! Concrete syntax trees for lazynix.
//!
//! This crate is the boundary between the parser and the evaluator. The
//! parser builds an owned [`SyntaxNode`] tree, flattens it into a
//! [`SyntaxTree`], and hands the evaluator a [`TreeCursor`]. The evaluator
//! only ever sees kind names, spans and cursor movement.

mod cursor;
mod kind;
mod tree;

pub use cursor::{SyntaxCursor, TreeCursor};
pub use kind::SyntaxKind;
pub use tree::{SyntaxNode, SyntaxTree};
