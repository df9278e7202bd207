//! The lazynix parser.

use lazynix_common::Span;
use lazynix_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use lazynix_lexer::{Token, TokenKind};
use lazynix_syntax::{SyntaxKind, SyntaxNode};

type ParseResult<T> = Result<T, Diagnostic>;

/// The lazynix parser.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    source_len: usize,
}

impl Parser {
    /// `tokens` must end with `Eof`, as [`lazynix_lexer::Lexer::tokenize`]
    /// guarantees.
    pub fn new(tokens: Vec<Token>, source_len: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            source_len,
        }
    }

    /// Parse a whole document into a `Nix` root with zero or one child.
    pub fn parse_document(&mut self) -> ParseResult<SyntaxNode> {
        let span = Span::from_usize(0, self.source_len);
        if self.at_end() {
            return Ok(SyntaxNode::leaf(SyntaxKind::Nix, span));
        }

        let expr = self.parse_expr()?;
        if !self.at_end() {
            return Err(self.unexpected("end of input"));
        }
        Ok(SyntaxNode::new(SyntaxKind::Nix, span, vec![expr]))
    }

    fn parse_expr(&mut self) -> ParseResult<SyntaxNode> {
        match self.current_kind() {
            TokenKind::If => self.parse_if(),
            TokenKind::Let => self.parse_let(),
            _ => self.parse_concat_expr(),
        }
    }

    fn parse_if(&mut self) -> ParseResult<SyntaxNode> {
        let start = self.current_span();
        self.expect(TokenKind::If)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::Then)?;
        let then_branch = self.parse_expr()?;
        self.expect(TokenKind::Else)?;
        let else_branch = self.parse_expr()?;

        let span = start.to(else_branch.span);
        Ok(SyntaxNode::new(
            SyntaxKind::If,
            span,
            vec![cond, then_branch, else_branch],
        ))
    }

    fn parse_let(&mut self) -> ParseResult<SyntaxNode> {
        let start = self.current_span();
        self.expect(TokenKind::Let)?;
        let mut children = Vec::new();
        while !self.check(TokenKind::In) {
            children.push(self.parse_binding()?);
        }
        self.expect(TokenKind::In)?;
        let body = self.parse_expr()?;

        let span = start.to(body.span);
        children.push(body);
        Ok(SyntaxNode::new(SyntaxKind::Let, span, children))
    }

    /// `a + b + c`, left associative.
    fn parse_concat_expr(&mut self) -> ParseResult<SyntaxNode> {
        let mut lhs = self.parse_app_expr()?;
        while self.eat(TokenKind::Plus) {
            let rhs = self.parse_app_expr()?;
            let span = lhs.span.to(rhs.span);
            lhs = SyntaxNode::new(SyntaxKind::ConcatStrings, span, vec![lhs, rhs]);
        }
        Ok(lhs)
    }

    /// Application by juxtaposition. A `-` in argument position starts a
    /// `NegativeExpr` argument, which is how `a - b` reaches the evaluator.
    ///
    /// Plain arguments under a primop head build `Call`. A subtraction is
    /// always `ApplyExpr`, and ends the primop chain.
    fn parse_app_expr(&mut self) -> ParseResult<SyntaxNode> {
        let head = self.parse_operand()?;
        let mut call = head.kind == SyntaxKind::Primop;

        let mut expr = head;
        loop {
            let subtract = self.check(TokenKind::Minus);
            if !subtract && !self.starts_operand() {
                break;
            }
            let arg = self.parse_operand()?;
            let span = expr.span.to(arg.span);
            call &= !subtract;
            let kind = if call {
                SyntaxKind::Call
            } else {
                SyntaxKind::ApplyExpr
            };
            expr = SyntaxNode::new(kind, span, vec![expr, arg]);
        }
        Ok(expr)
    }

    /// A select expression, optionally negated.
    fn parse_operand(&mut self) -> ParseResult<SyntaxNode> {
        if !self.check(TokenKind::Minus) {
            return self.parse_select_expr();
        }
        let minus = self.current_span();
        self.advance();
        let inner = self.parse_select_expr()?;
        let span = minus.to(inner.span);
        Ok(SyntaxNode::new(
            SyntaxKind::NegativeExpr,
            span,
            vec![SyntaxNode::leaf(SyntaxKind::Negative, minus), inner],
        ))
    }

    /// `expr.a.b`, left associative.
    fn parse_select_expr(&mut self) -> ParseResult<SyntaxNode> {
        let mut expr = self.parse_primary_expr()?;
        while self.eat(TokenKind::Dot) {
            let name = self.parse_attr_name()?;
            let span = expr.span.to(name.span);
            expr = SyntaxNode::new(SyntaxKind::Select, span, vec![expr, name]);
        }
        Ok(expr)
    }

    fn parse_primary_expr(&mut self) -> ParseResult<SyntaxNode> {
        let span = self.current_span();
        let leaf = match self.current_kind() {
            TokenKind::Int => SyntaxKind::Int,
            TokenKind::Float => SyntaxKind::Float,
            TokenKind::String => SyntaxKind::String,
            TokenKind::True => SyntaxKind::TRUE,
            TokenKind::False => SyntaxKind::FALSE,
            TokenKind::Null => SyntaxKind::NULL,
            TokenKind::Primop => SyntaxKind::Primop,
            TokenKind::Ident => SyntaxKind::Var,
            TokenKind::LParen => return self.parse_parens(),
            TokenKind::LBracket => return self.parse_list(),
            TokenKind::LBrace => return self.parse_attr_set(SyntaxKind::AttrSet),
            TokenKind::Rec => {
                self.advance();
                let set = self.parse_attr_set(SyntaxKind::RecAttrSet)?;
                let span = span.to(set.span);
                return Ok(SyntaxNode { span, ..set });
            }
            _ => {
                return Err(self.error(
                    ErrorCode::ExpectedExpression,
                    format!("expected expression, found {}", self.current_kind().describe()),
                ));
            }
        };
        self.advance();
        Ok(SyntaxNode::leaf(leaf, span))
    }

    fn parse_parens(&mut self) -> ParseResult<SyntaxNode> {
        let start = self.current_span();
        self.expect(TokenKind::LParen)?;
        let inner = self.parse_expr()?;
        let end = self.expect_closing(TokenKind::RParen, start)?;
        Ok(SyntaxNode::new(SyntaxKind::Parens, start.to(end), vec![inner]))
    }

    fn parse_list(&mut self) -> ParseResult<SyntaxNode> {
        let start = self.current_span();
        self.expect(TokenKind::LBracket)?;
        let mut items = Vec::new();
        while !self.check(TokenKind::RBracket) && !self.at_end() {
            items.push(self.parse_operand()?);
        }
        let end = self.expect_closing(TokenKind::RBracket, start)?;
        Ok(SyntaxNode::new(SyntaxKind::List, start.to(end), items))
    }

    fn parse_attr_set(&mut self, kind: SyntaxKind) -> ParseResult<SyntaxNode> {
        let start = self.current_span();
        self.expect(TokenKind::LBrace)?;
        let mut bindings = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.at_end() {
            bindings.push(self.parse_binding()?);
        }
        let end = self.expect_closing(TokenKind::RBrace, start)?;
        Ok(SyntaxNode::new(kind, start.to(end), bindings))
    }

    /// `name = value;`
    fn parse_binding(&mut self) -> ParseResult<SyntaxNode> {
        let name = self.parse_attr_name()?;
        if self.check(TokenKind::Dot) {
            return Err(self.error(
                ErrorCode::NestedAttrPath,
                "nested attribute paths are not supported",
            ));
        }
        self.expect(TokenKind::Eq)?;
        let value = self.parse_expr()?;
        if !self.eat(TokenKind::Semicolon) {
            return Err(self.error(ErrorCode::MissingSemicolon, "expected `;` after attribute"));
        }

        let span = name.span.to(self.previous_span());
        Ok(SyntaxNode::new(SyntaxKind::Attr, span, vec![name, value]))
    }

    fn parse_attr_name(&mut self) -> ParseResult<SyntaxNode> {
        let span = self.current_span();
        let kind = match self.current_kind() {
            TokenKind::Ident | TokenKind::Primop => SyntaxKind::Identifier,
            TokenKind::String => SyntaxKind::String,
            kind if kind.is_keyword() => SyntaxKind::Identifier,
            _ => return Err(self.unexpected("attribute name")),
        };
        self.advance();
        Ok(SyntaxNode::leaf(kind, span))
    }

    /// Whether the current token can begin an application argument.
    fn starts_operand(&self) -> bool {
        matches!(
            self.current_kind(),
            TokenKind::Int
                | TokenKind::Float
                | TokenKind::String
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
                | TokenKind::Primop
                | TokenKind::Ident
                | TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::LBrace
                | TokenKind::Rec
        )
    }

    // ========== Token helpers ==========

    fn current(&self) -> Token {
        let last = self.tokens.len().saturating_sub(1);
        self.tokens
            .get(self.pos.min(last))
            .copied()
            .unwrap_or(Token::new(
                TokenKind::Eof,
                Span::from_usize(self.source_len, self.source_len),
            ))
    }

    fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    fn current_span(&self) -> Span {
        self.current().span
    }

    fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    fn at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    /// Expect a closing delimiter, pointing back at the opener when it is
    /// missing. Returns the closer's span.
    fn expect_closing(&mut self, kind: TokenKind, opener: Span) -> ParseResult<Span> {
        let span = self.current_span();
        if self.eat(kind) {
            return Ok(span);
        }
        let message = format!(
            "expected {}, found {}",
            kind.describe(),
            self.current_kind().describe()
        );
        Err(self
            .error(ErrorCode::UnclosedDelimiter, message)
            .with_label(Label::new(opener, "unclosed delimiter opened here")))
    }

    fn unexpected(&self, expected: &str) -> Diagnostic {
        let message = format!(
            "expected {}, found {}",
            expected,
            self.current_kind().describe()
        );
        self.error(ErrorCode::UnexpectedToken, message)
    }

    fn error(&self, code: ErrorCode, message: impl Into<String>) -> Diagnostic {
        let span = self.current_span();
        Diagnostic::error(DiagnosticKind::Parser, span, message)
            .with_code(code)
            .with_label(Label::new(span, "here"))
    }
}
