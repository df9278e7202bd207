//! The diagnostic record shared by every stage.

use crate::ErrorCode;
use lazynix_common::Span;
use std::fmt;

/// Which stage produced the diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Lexer,
    Parser,
    Eval,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// An error at `span`. Labels point at related source; `help` comes from
/// the error code.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub code: Option<ErrorCode>,
    pub message: String,
    pub span: Span,
    pub labels: Vec<Label>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
            span,
            labels: Vec::new(),
            help: None,
        }
    }

    /// Attach an error code and take its suggestion as help text.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self.help = code.suggestion().map(str::to_string);
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{}] {} at {}", code.as_str(), self.message, self.span),
            None => write!(f, "{} at {}", self.message, self.span),
        }
    }
}
