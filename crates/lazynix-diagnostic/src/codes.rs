//! Error codes for lazynix diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexer errors (E0001 - E0099)
    UnexpectedCharacter,
    UnterminatedString,
    UnsupportedInterpolation,

    // Parser errors (E0100 - E0199)
    UnexpectedToken,
    ExpectedExpression,
    UnclosedDelimiter,
    MissingSemicolon,
    NestedAttrPath,

    // Eval errors (E0300 - E0399)
    NotImplemented,
    MissingAttribute,
    TypeMismatch,
    NotCallable,
    InvalidLiteral,
    UnknownPrimop,
    MalformedNode,
    InfiniteRecursion,
    DivisionByZero,
    IntegerOverflow,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::UnexpectedCharacter => "E0001",
            ErrorCode::UnterminatedString => "E0002",
            ErrorCode::UnsupportedInterpolation => "E0003",

            // Parser
            ErrorCode::UnexpectedToken => "E0100",
            ErrorCode::ExpectedExpression => "E0101",
            ErrorCode::UnclosedDelimiter => "E0102",
            ErrorCode::MissingSemicolon => "E0103",
            ErrorCode::NestedAttrPath => "E0104",

            // Eval
            ErrorCode::NotImplemented => "E0300",
            ErrorCode::MissingAttribute => "E0301",
            ErrorCode::TypeMismatch => "E0302",
            ErrorCode::NotCallable => "E0303",
            ErrorCode::InvalidLiteral => "E0304",
            ErrorCode::UnknownPrimop => "E0305",
            ErrorCode::MalformedNode => "E0306",
            ErrorCode::InfiniteRecursion => "E0307",
            ErrorCode::DivisionByZero => "E0308",
            ErrorCode::IntegerOverflow => "E0309",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "unexpected character in input",
            ErrorCode::UnterminatedString => "string literal is not terminated",
            ErrorCode::UnsupportedInterpolation => "string interpolation is not supported",

            ErrorCode::UnexpectedToken => "unexpected token",
            ErrorCode::ExpectedExpression => "expected an expression",
            ErrorCode::UnclosedDelimiter => "unclosed delimiter",
            ErrorCode::MissingSemicolon => "missing semicolon",
            ErrorCode::NestedAttrPath => "nested attribute paths are not supported",

            ErrorCode::NotImplemented => "construct has no evaluation rule",
            ErrorCode::MissingAttribute => "attribute missing from set",
            ErrorCode::TypeMismatch => "value has the wrong type",
            ErrorCode::NotCallable => "attempt to call something which is not a function",
            ErrorCode::InvalidLiteral => "literal cannot be converted to a number",
            ErrorCode::UnknownPrimop => "unknown primitive operation",
            ErrorCode::MalformedNode => "syntax node has an unexpected shape",
            ErrorCode::InfiniteRecursion => "infinite recursion encountered",
            ErrorCode::DivisionByZero => "division by zero",
            ErrorCode::IntegerOverflow => "integer overflow",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnterminatedString => Some("add a closing quote `\"` to terminate the string"),
            ErrorCode::MissingSemicolon => Some("add `;` after the attribute value"),
            ErrorCode::UnclosedDelimiter => Some("add the matching closing delimiter"),
            ErrorCode::NestedAttrPath => Some("write the nested set out explicitly: `a = { b = ...; };`"),
            ErrorCode::UnknownPrimop => Some("register the primitive in the evaluator's primop table"),
            _ => None,
        }
    }
}
