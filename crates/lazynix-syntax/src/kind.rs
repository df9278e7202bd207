//! Syntax node kinds.
//! 语法节点类型。

use std::fmt;

/// The kind of node the parser emits.
/// 解析器产生的节点类型。
///
/// Names follow the Nix grammar's node naming, including the upper-case
/// literal keywords, because the evaluator dispatches on these names.
/// 名称沿用 Nix 语法的节点命名（包括大写的字面量关键字），求值器按这些名称分派。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    /// Document root / 文档根节点
    Nix,
    /// `if c then a else b`
    If,
    /// `let a = 1; in body`
    Let,
    /// `( expr )`
    Parens,
    /// `a + b`
    ConcatStrings,
    /// Application whose head is a primop / 以 primop 为首的调用
    Call,
    /// Any other application / 其他函数应用
    ApplyExpr,
    /// `- expr`
    NegativeExpr,
    /// The `-` token inside `NegativeExpr`
    Negative,
    /// `expr.name`
    Select,
    /// `[ a b ]`
    List,
    /// `{ a = 1; }`
    AttrSet,
    /// `rec { a = 1; }`
    RecAttrSet,
    /// `name = value;`
    Attr,
    /// Attribute name / 属性名
    Identifier,
    /// Variable reference / 变量引用
    Var,
    /// `__name`
    Primop,
    Int,
    Float,
    String,
    #[allow(clippy::upper_case_acronyms)]
    TRUE,
    #[allow(clippy::upper_case_acronyms)]
    FALSE,
    #[allow(clippy::upper_case_acronyms)]
    NULL,
}

impl SyntaxKind {
    /// The tag a cursor reports for this kind.
    pub fn name(self) -> &'static str {
        match self {
            SyntaxKind::Nix => "Nix",
            SyntaxKind::If => "If",
            SyntaxKind::Let => "Let",
            SyntaxKind::Parens => "Parens",
            SyntaxKind::ConcatStrings => "ConcatStrings",
            SyntaxKind::Call => "Call",
            SyntaxKind::ApplyExpr => "ApplyExpr",
            SyntaxKind::NegativeExpr => "NegativeExpr",
            SyntaxKind::Negative => "Negative",
            SyntaxKind::Select => "Select",
            SyntaxKind::List => "List",
            SyntaxKind::AttrSet => "AttrSet",
            SyntaxKind::RecAttrSet => "RecAttrSet",
            SyntaxKind::Attr => "Attr",
            SyntaxKind::Identifier => "Identifier",
            SyntaxKind::Var => "Var",
            SyntaxKind::Primop => "Primop",
            SyntaxKind::Int => "Int",
            SyntaxKind::Float => "Float",
            SyntaxKind::String => "String",
            SyntaxKind::TRUE => "TRUE",
            SyntaxKind::FALSE => "FALSE",
            SyntaxKind::NULL => "NULL",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
