//! Evaluation errors.

use lazynix_common::Span;
use lazynix_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use thiserror::Error;

pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluation errors.
///
/// Errors are `Clone` because a thunk memoizes its outcome, failures
/// included: forcing a failed thunk again replays the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("not implemented: no evaluation rule for `{kind}`")]
    NotImplemented { kind: String, span: Span },

    #[error("attribute '{name}' missing")]
    MissingAttribute { name: String, span: Span },

    #[error("type error: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("attempt to call something which is not a function but {found}")]
    NotCallable { found: &'static str },

    #[error("invalid {literal} literal '{text}'")]
    ParseFailure {
        literal: &'static str,
        text: String,
        span: Span,
    },

    #[error("unknown primop '{name}'")]
    UnknownPrimop { name: String, span: Span },

    #[error("malformed `{kind}` node: expected {expected} children, found {found}")]
    MalformedNode {
        kind: String,
        expected: usize,
        found: usize,
        span: Span,
    },

    #[error("`{kind}` node span {span} is outside the source text")]
    InvalidSpan { kind: String, span: Span },

    #[error("`{kind}` node was forced before it was wired")]
    Unwired { kind: String, span: Span },

    #[error("infinite recursion encountered")]
    InfiniteRecursion,

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {op}")]
    Overflow { op: &'static str },

    #[error("syntax error: {}", first_message(.0))]
    Syntax(Vec<Diagnostic>),
}

fn first_message(diagnostics: &[Diagnostic]) -> &str {
    diagnostics
        .first()
        .map(|d| d.message.as_str())
        .unwrap_or("invalid input")
}

impl EvalError {
    /// The source span of the failing construct, when one is known.
    pub fn span(&self) -> Option<Span> {
        match self {
            EvalError::NotImplemented { span, .. }
            | EvalError::MissingAttribute { span, .. }
            | EvalError::ParseFailure { span, .. }
            | EvalError::UnknownPrimop { span, .. }
            | EvalError::MalformedNode { span, .. }
            | EvalError::InvalidSpan { span, .. }
            | EvalError::Unwired { span, .. } => Some(*span),
            EvalError::Syntax(diagnostics) => diagnostics.first().map(|d| d.span),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        let code = match self {
            EvalError::NotImplemented { .. } => ErrorCode::NotImplemented,
            EvalError::MissingAttribute { .. } => ErrorCode::MissingAttribute,
            EvalError::TypeMismatch { .. } => ErrorCode::TypeMismatch,
            EvalError::NotCallable { .. } => ErrorCode::NotCallable,
            EvalError::ParseFailure { .. } => ErrorCode::InvalidLiteral,
            EvalError::UnknownPrimop { .. } => ErrorCode::UnknownPrimop,
            EvalError::MalformedNode { .. }
            | EvalError::InvalidSpan { .. }
            | EvalError::Unwired { .. } => ErrorCode::MalformedNode,
            EvalError::InfiniteRecursion => ErrorCode::InfiniteRecursion,
            EvalError::DivisionByZero => ErrorCode::DivisionByZero,
            EvalError::Overflow { .. } => ErrorCode::IntegerOverflow,
            EvalError::Syntax(diagnostics) => return diagnostics.first().and_then(|d| d.code),
        };
        Some(code)
    }

    /// Convert into diagnostics for rendering. A syntax error yields the
    /// parser's own diagnostics; every other error yields exactly one.
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        if let EvalError::Syntax(diagnostics) = self {
            return diagnostics.clone();
        }

        let span = self.span().unwrap_or(Span::DUMMY);
        let mut diagnostic = Diagnostic::error(DiagnosticKind::Eval, span, self.to_string());
        if let Some(code) = self.code() {
            diagnostic = diagnostic.with_code(code);
        }
        if self.span().is_some() {
            diagnostic = diagnostic.with_label(Label::new(span, self.label()));
        }
        vec![diagnostic]
    }

    fn label(&self) -> &'static str {
        match self {
            EvalError::NotImplemented { .. } => "this construct cannot be evaluated yet",
            EvalError::MissingAttribute { .. } => "selected here",
            EvalError::ParseFailure { .. } => "in this literal",
            EvalError::UnknownPrimop { .. } => "referenced here",
            _ => "here",
        }
    }
}
