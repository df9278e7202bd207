//! Integration tests for lazynix-syntax and lazynix-common.

use lazynix::{Span, SyntaxKind, SyntaxTree, TreeCursor};
use lazynix_syntax::SyntaxNode;

fn sample() -> SyntaxTree {
    // If(TRUE, Int, List(Int, Int))
    SyntaxTree::new(SyntaxNode::new(
        SyntaxKind::Nix,
        Span::from_usize(0, 30),
        vec![SyntaxNode::new(
            SyntaxKind::If,
            Span::from_usize(0, 30),
            vec![
                SyntaxNode::leaf(SyntaxKind::TRUE, Span::from_usize(3, 7)),
                SyntaxNode::leaf(SyntaxKind::Int, Span::from_usize(13, 14)),
                SyntaxNode::new(
                    SyntaxKind::List,
                    Span::from_usize(20, 30),
                    vec![
                        SyntaxNode::leaf(SyntaxKind::Int, Span::from_usize(22, 23)),
                        SyntaxNode::leaf(SyntaxKind::Int, Span::from_usize(24, 25)),
                    ],
                ),
            ],
        )],
    ))
}

#[test]
fn test_tree_len_counts_every_node() {
    assert_eq!(sample().len(), 7);
}

#[test]
fn test_cursor_preorder_walk() {
    let tree = sample();
    let mut cursor = tree.cursor();
    let mut seen = Vec::new();

    // The same descend/sibling/parent loop the evaluator uses.
    'walk: loop {
        seen.push(cursor.kind_name().to_string());
        if cursor.first_child() {
            continue;
        }
        loop {
            if cursor.next_sibling() {
                continue 'walk;
            }
            if !cursor.parent() {
                break 'walk;
            }
        }
    }

    assert_eq!(seen, vec!["Nix", "If", "TRUE", "Int", "List", "Int", "Int"]);
}

#[test]
fn test_failed_moves_keep_position() {
    let tree = sample();
    let mut cursor = tree.cursor();
    assert!(!cursor.parent());
    assert!(!cursor.next_sibling());
    assert_eq!(cursor.kind_name(), "Nix");

    assert!(cursor.first_child());
    assert!(cursor.first_child());
    assert_eq!(cursor.span(), Span::from_usize(3, 7));
    assert!(!cursor.first_child());
    assert_eq!(cursor.kind_name(), "TRUE");
}

#[test]
fn test_kind_names_match_evaluator_tags() {
    assert_eq!(SyntaxKind::TRUE.name(), "TRUE");
    assert_eq!(SyntaxKind::ApplyExpr.name(), "ApplyExpr");
    assert_eq!(SyntaxKind::NegativeExpr.to_string(), "NegativeExpr");
}

#[test]
fn test_span_helpers() {
    let a = Span::from_usize(2, 5);
    let b = Span::from_usize(8, 10);
    assert_eq!(a.to(b), Span::from_usize(2, 10));
    assert_eq!(a.len(), 3);
    assert_eq!(a.slice("0123456"), Some("234"));
    assert_eq!(b.slice("short"), None);
    assert_eq!(a.to_string(), "2..5");
}
