//! Lazy evaluation core for lazynix.
//!
//! Evaluation runs in three steps:
//! 1. the syntax adapter copies a parser cursor into an owned [`Node`] graph,
//! 2. the driver walks that graph and lets the rule table attach a
//!    [`Thunk`] to every node, bottom-up,
//! 3. the root thunk is forced.
//!
//! Thunks are memoized, so a shared sub-expression is computed at most once
//! and unused branches, fields and list elements are never computed at all.

mod config;
mod driver;
mod dump;
mod error;
mod kind;
mod node;
mod ops;
mod primop;
mod rules;
mod thunk;
pub mod value;

pub use config::EvalConfig;
pub use driver::{Evaluator, NodeCursor, evaluate};
pub use dump::{DumpConfig, dump, dump_labeled};
pub use error::{EvalError, EvalResult};
pub use kind::NodeKind;
pub use node::{Node, adapt};
pub use primop::{PrimopTable, Rule};
pub use rules::RuleTable;
pub use thunk::Thunk;
pub use value::{AttrSet, Function, List, Primop, PrimopFn, Value};
