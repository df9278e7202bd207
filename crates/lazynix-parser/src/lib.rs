//! Parser for lazynix.
//!
//! This crate provides a recursive descent parser that converts tokens
//! into a [`SyntaxTree`] shaped the way the evaluator expects: infix `+`
//! becomes `ConcatStrings`, juxtaposition becomes `Call`/`ApplyExpr`, and
//! `a - b` is read as `a` applied to `NegativeExpr(b)`.
//!
//! The parser stops at the first error; there is no recovery.

mod parser;

pub use parser::Parser;

use lazynix_diagnostic::Diagnostic;
use lazynix_lexer::Lexer;
use lazynix_syntax::SyntaxTree;

/// Parse source code into a syntax tree.
pub fn parse(source: &str) -> Result<SyntaxTree, Vec<Diagnostic>> {
    let (tokens, diagnostics) = Lexer::new(source).tokenize();
    if !diagnostics.is_empty() {
        return Err(diagnostics);
    }

    let mut parser = Parser::new(tokens, source.len());
    parser
        .parse_document()
        .map(SyntaxTree::new)
        .map_err(|diagnostic| vec![diagnostic])
}
