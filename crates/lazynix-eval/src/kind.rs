//! Node kinds understood by the evaluator.

use std::fmt;

/// The syntactic category of a node.
///
/// Built from the tag a parser cursor reports. Tags the evaluator has never
/// heard of are kept as [`NodeKind::Unknown`] so that the failure surfaces
/// from the rule table, not from the adapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Nix,
    True,
    False,
    Null,
    If,
    Int,
    Float,
    String,
    ConcatStrings,
    Primop,
    Call,
    CallSub,
    NegativeExpr,
    CallNeg,
    ApplyExpr,
    AttrSet,
    RecAttrSet,
    Attr,
    Identifier,
    Select,
    List,
    Var,
    Let,
    Parens,
    /// `+` token; carries no rule.
    Add,
    /// `-` token inside `NegativeExpr`; carries no rule.
    Negative,
    Unknown(Box<str>),
}

impl NodeKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Nix" => NodeKind::Nix,
            "TRUE" => NodeKind::True,
            "FALSE" => NodeKind::False,
            "NULL" => NodeKind::Null,
            "If" => NodeKind::If,
            "Int" => NodeKind::Int,
            "Float" => NodeKind::Float,
            "String" => NodeKind::String,
            "ConcatStrings" => NodeKind::ConcatStrings,
            "Primop" => NodeKind::Primop,
            "Call" => NodeKind::Call,
            "CallSub" => NodeKind::CallSub,
            "NegativeExpr" => NodeKind::NegativeExpr,
            "CallNeg" => NodeKind::CallNeg,
            "ApplyExpr" => NodeKind::ApplyExpr,
            "AttrSet" => NodeKind::AttrSet,
            "RecAttrSet" => NodeKind::RecAttrSet,
            "Attr" => NodeKind::Attr,
            "Identifier" => NodeKind::Identifier,
            "Select" => NodeKind::Select,
            "List" => NodeKind::List,
            "Var" => NodeKind::Var,
            "Let" => NodeKind::Let,
            "Parens" => NodeKind::Parens,
            "Add" => NodeKind::Add,
            "Negative" => NodeKind::Negative,
            other => NodeKind::Unknown(other.into()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Nix => "Nix",
            NodeKind::True => "TRUE",
            NodeKind::False => "FALSE",
            NodeKind::Null => "NULL",
            NodeKind::If => "If",
            NodeKind::Int => "Int",
            NodeKind::Float => "Float",
            NodeKind::String => "String",
            NodeKind::ConcatStrings => "ConcatStrings",
            NodeKind::Primop => "Primop",
            NodeKind::Call => "Call",
            NodeKind::CallSub => "CallSub",
            NodeKind::NegativeExpr => "NegativeExpr",
            NodeKind::CallNeg => "CallNeg",
            NodeKind::ApplyExpr => "ApplyExpr",
            NodeKind::AttrSet => "AttrSet",
            NodeKind::RecAttrSet => "RecAttrSet",
            NodeKind::Attr => "Attr",
            NodeKind::Identifier => "Identifier",
            NodeKind::Select => "Select",
            NodeKind::List => "List",
            NodeKind::Var => "Var",
            NodeKind::Let => "Let",
            NodeKind::Parens => "Parens",
            NodeKind::Add => "Add",
            NodeKind::Negative => "Negative",
            NodeKind::Unknown(name) => name,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_for_known_kinds() {
        for name in ["Nix", "TRUE", "ApplyExpr", "CallNeg", "Negative", "RecAttrSet"] {
            assert_eq!(NodeKind::from_name(name).as_str(), name);
        }
    }

    #[test]
    fn test_unknown_kind_keeps_tag() {
        let kind = NodeKind::from_name("HasAttr");
        assert_eq!(kind, NodeKind::Unknown("HasAttr".into()));
        assert_eq!(kind.to_string(), "HasAttr");
    }
}
