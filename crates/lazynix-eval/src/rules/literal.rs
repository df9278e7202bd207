//! Literal rules. Literal text is parsed when the thunk is forced, so a
//! malformed literal in an unused branch never fails.

use crate::{EvalError, EvalResult, Node, Thunk, Value};
use lazynix_common::Span;
use std::rc::Rc;

pub(super) fn constant(value: Value) -> Rc<Thunk> {
    Thunk::ready(value)
}

pub(super) fn int(node: &Node) -> EvalResult<Rc<Thunk>> {
    let (text, span) = source_of(node)?;
    Ok(Thunk::deferred(move || {
        text.parse::<i64>()
            .map(Value::Int)
            .map_err(|_| parse_failure("integer", text, span))
    }))
}

pub(super) fn float(node: &Node) -> EvalResult<Rc<Thunk>> {
    let (text, span) = source_of(node)?;
    Ok(Thunk::deferred(move || {
        text.parse::<f64>()
            .map(Value::Float)
            .map_err(|_| parse_failure("float", text, span))
    }))
}

pub(super) fn string(node: &Node) -> EvalResult<Rc<Thunk>> {
    let (text, span) = source_of(node)?;
    Ok(Thunk::deferred(move || {
        unescape(&text)
            .map(Value::string)
            .ok_or_else(|| parse_failure("string", text, span))
    }))
}

/// An attribute name evaluates to its own spelling.
pub(super) fn identifier(node: &Node) -> EvalResult<Rc<Thunk>> {
    let text = node.source_text()?.to_string();
    Ok(Thunk::deferred(move || Ok(Value::string(text))))
}

fn source_of(node: &Node) -> EvalResult<(String, Span)> {
    Ok((node.source_text()?.to_string(), node.span()))
}

fn parse_failure(literal: &'static str, text: String, span: Span) -> EvalError {
    EvalError::ParseFailure {
        literal,
        text,
        span,
    }
}

/// Strip the quotes of a string literal and resolve its escapes.
/// Unknown escapes keep the escaped character, as Nix does.
fn unescape(text: &str) -> Option<String> {
    let body = text.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            other => out.push(other),
        }
    }
    Some(out)
}
