//! Common data structures for lazynix.
//!
//! This crate provides the source location types every other crate speaks:
//! - `BytePos`: a byte offset into the evaluated source
//! - `Span`: a half-open byte range covered by a token or syntax node

mod span;

pub use span::{BytePos, Span};
