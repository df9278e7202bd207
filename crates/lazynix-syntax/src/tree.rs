//! Owned and flattened syntax trees.

use crate::{SyntaxCursor, SyntaxKind};
use lazynix_common::Span;

/// An owned syntax node, as built by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,
    pub span: Span,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: SyntaxKind, span: Span, children: Vec<SyntaxNode>) -> Self {
        Self {
            kind,
            span,
            children,
        }
    }

    pub fn leaf(kind: SyntaxKind, span: Span) -> Self {
        Self::new(kind, span, Vec::new())
    }
}

#[derive(Debug, Clone, Copy)]
struct NodeData {
    kind: SyntaxKind,
    span: Span,
    parent: Option<u32>,
    first_child: Option<u32>,
    next_sibling: Option<u32>,
}

/// A syntax tree flattened into preorder, navigable through a cursor.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<NodeData>,
}

impl SyntaxTree {
    /// Flatten an owned tree. Iterative, so deeply nested input does not
    /// grow the stack.
    pub fn new(root: SyntaxNode) -> Self {
        let mut nodes: Vec<NodeData> = Vec::new();
        let mut last_child: Vec<Option<u32>> = Vec::new();
        let mut stack = vec![(root, None::<u32>)];

        while let Some((node, parent)) = stack.pop() {
            let id = nodes.len() as u32;
            nodes.push(NodeData {
                kind: node.kind,
                span: node.span,
                parent,
                first_child: None,
                next_sibling: None,
            });
            last_child.push(None);

            if let Some(p) = parent {
                let p = p as usize;
                match last_child[p] {
                    Some(prev) => nodes[prev as usize].next_sibling = Some(id),
                    None => nodes[p].first_child = Some(id),
                }
                last_child[p] = Some(id);
            }

            for child in node.children.into_iter().rev() {
                stack.push((child, Some(id)));
            }
        }

        Self { nodes }
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// A cursor positioned on the root node.
    pub fn cursor(&self) -> SyntaxCursor<'_> {
        SyntaxCursor::new(self)
    }

    pub(crate) fn kind(&self, id: u32) -> SyntaxKind {
        self.nodes[id as usize].kind
    }

    pub(crate) fn span(&self, id: u32) -> Span {
        self.nodes[id as usize].span
    }

    pub(crate) fn parent(&self, id: u32) -> Option<u32> {
        self.nodes[id as usize].parent
    }

    pub(crate) fn first_child(&self, id: u32) -> Option<u32> {
        self.nodes[id as usize].first_child
    }

    pub(crate) fn next_sibling(&self, id: u32) -> Option<u32> {
        self.nodes[id as usize].next_sibling
    }
}
