//! Lazy evaluation of a subset of the Nix expression language.
//!
//! This facade re-exports the pieces most callers need: the parser boundary
//! and the evaluation core.
//!
//! ```ignore
//! let value = lazynix::evaluate("if true then 1 else 2")?;
//! assert_eq!(value, Some(lazynix::Value::Int(1)));
//! ```

pub use lazynix_common::{BytePos, Span};
pub use lazynix_diagnostic::{Diagnostic, emit, render};
pub use lazynix_eval::{
    DumpConfig, EvalConfig, EvalError, EvalResult, Evaluator, Node, NodeKind, PrimopTable, Thunk,
    Value, evaluate,
};
pub use lazynix_parser::parse;
pub use lazynix_syntax::{SyntaxKind, SyntaxTree, TreeCursor};
