//! The lazynix lexer.
//! lazynix 词法分析器。

use crate::token::{Token, TokenKind};
use lazynix_common::Span;
use lazynix_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use logos::Logos;

/// The lazynix lexer.
/// lazynix 词法分析器。
///
/// Wraps the logos-generated scanner: drops comments, splits primop
/// references out of identifiers and reports malformed input.
/// 包装 logos 生成的扫描器：丢弃注释，从标识符中区分出 primop 引用，并报告错误输入。
pub struct Lexer<'src> {
    source: &'src str,
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source code.
    /// 为给定的源代码创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source and return tokens and diagnostics.
    /// The token list always ends with `Eof`.
    /// 对整个源代码进行词法分析，返回 token 列表和诊断信息。列表总以 `Eof` 结尾。
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();
        let mut scanner = TokenKind::lexer(self.source);

        while let Some(result) = scanner.next() {
            let range = scanner.span();
            let span = Span::from_usize(range.start, range.end);
            match result {
                Ok(kind) if kind.is_trivia() => {}
                Ok(TokenKind::Ident) if scanner.slice().starts_with("__") => {
                    tokens.push(Token::new(TokenKind::Primop, span));
                }
                Ok(TokenKind::String) => {
                    if has_interpolation(scanner.slice()) {
                        self.error(
                            span,
                            ErrorCode::UnsupportedInterpolation,
                            "string interpolation is not supported",
                        );
                    }
                    tokens.push(Token::new(TokenKind::String, span));
                }
                Ok(TokenKind::UnterminatedString) => {
                    self.error(span, ErrorCode::UnterminatedString, "unterminated string");
                    tokens.push(Token::new(TokenKind::UnterminatedString, span));
                }
                Ok(kind) => tokens.push(Token::new(kind, span)),
                Err(()) => {
                    let message = format!("unexpected character `{}`", scanner.slice());
                    self.error(span, ErrorCode::UnexpectedCharacter, message);
                }
            }
        }

        let end = self.source.len();
        tokens.push(Token::new(TokenKind::Eof, Span::from_usize(end, end)));
        (tokens, self.diagnostics)
    }

    fn error(&mut self, span: Span, code: ErrorCode, message: impl Into<String>) {
        let message = message.into();
        self.diagnostics.push(
            Diagnostic::error(DiagnosticKind::Lexer, span, message.clone())
                .with_code(code)
                .with_label(Label::new(span, message)),
        );
    }
}

/// Whether a string literal contains an unescaped `${`.
/// 字符串字面量中是否包含未转义的 `${`。
fn has_interpolation(literal: &str) -> bool {
    let mut chars = literal.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '$' if chars.clone().next() == Some('{') => return true,
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let (tokens, _) = Lexer::new(source).tokenize();
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_primop_is_split_from_ident() {
        assert_eq!(
            kinds("__add x"),
            vec![TokenKind::Primop, TokenKind::Ident, TokenKind::Eof]
        );
    }

    #[test]
    fn test_escaped_dollar_is_not_interpolation() {
        assert!(!has_interpolation(r#""\${x}""#));
        assert!(has_interpolation(r#""a${x}""#));
    }
}
