//! Integration tests for lazynix-lexer.

use lazynix::Span;
use lazynix_diagnostic::ErrorCode;
use lazynix_lexer::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    let (tokens, diagnostics) = Lexer::new(source).tokenize();
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    tokens.into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_lex_empty() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("  \n\t"), vec![TokenKind::Eof]);
}

#[test]
fn test_lex_comments_are_dropped() {
    assert_eq!(
        kinds("# line\n1 /* block */ 2"),
        vec![TokenKind::Int, TokenKind::Int, TokenKind::Eof]
    );
}

#[test]
fn test_lex_keywords() {
    assert_eq!(
        kinds("if then else let in rec true false null"),
        vec![
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::Let,
            TokenKind::In,
            TokenKind::Rec,
            TokenKind::True,
            TokenKind::False,
            TokenKind::Null,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_keyword_prefix_is_identifier() {
    assert_eq!(kinds("iffy"), vec![TokenKind::Ident, TokenKind::Eof]);
    assert_eq!(kinds("in'"), vec![TokenKind::Ident, TokenKind::Eof]);
}

#[test]
fn test_lex_numbers() {
    assert_eq!(
        kinds("1 1.5 2. 3.0e10"),
        vec![
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::Float,
            TokenKind::Float,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_primop_and_ident() {
    assert_eq!(
        kinds("__add foo-bar _x"),
        vec![
            TokenKind::Primop,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_minus_between_operands() {
    assert_eq!(
        kinds("3 - 1"),
        vec![TokenKind::Int, TokenKind::Minus, TokenKind::Int, TokenKind::Eof]
    );
}

#[test]
fn test_lex_spans() {
    let (tokens, _) = Lexer::new("{ a = \"x\"; }").tokenize();
    let spans: Vec<Span> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(spans[0], Span::from_usize(0, 1));
    assert_eq!(spans[3], Span::from_usize(6, 9));
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn test_lex_unterminated_string() {
    let (_, diagnostics) = Lexer::new("\"abc").tokenize();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, Some(ErrorCode::UnterminatedString));
}

#[test]
fn test_lex_unexpected_character() {
    let (tokens, diagnostics) = Lexer::new("1 @ 2").tokenize();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, Some(ErrorCode::UnexpectedCharacter));
    assert_eq!(diagnostics[0].span, Span::from_usize(2, 3));
    // Lexing continues past the bad character.
    assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Int).count(), 2);
}
