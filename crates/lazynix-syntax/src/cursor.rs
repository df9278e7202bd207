//! The cursor boundary between a parse tree and its consumers.

use crate::SyntaxTree;
use lazynix_common::Span;

/// Cursor-style navigation over a parse tree.
///
/// Movement methods return whether the cursor moved; on `false` the cursor
/// stays where it was.
pub trait TreeCursor {
    /// The node kind tag under the cursor.
    fn kind_name(&self) -> &str;

    /// The source span of the node under the cursor.
    fn span(&self) -> Span;

    fn first_child(&mut self) -> bool;

    fn next_sibling(&mut self) -> bool;

    fn parent(&mut self) -> bool;
}

/// A cursor over a [`SyntaxTree`].
#[derive(Debug, Clone)]
pub struct SyntaxCursor<'t> {
    tree: &'t SyntaxTree,
    current: u32,
}

impl<'t> SyntaxCursor<'t> {
    pub(crate) fn new(tree: &'t SyntaxTree) -> Self {
        Self { tree, current: 0 }
    }

    fn move_to(&mut self, target: Option<u32>) -> bool {
        match target {
            Some(id) => {
                self.current = id;
                true
            }
            None => false,
        }
    }
}

impl TreeCursor for SyntaxCursor<'_> {
    fn kind_name(&self) -> &str {
        self.tree.kind(self.current).name()
    }

    fn span(&self) -> Span {
        self.tree.span(self.current)
    }

    fn first_child(&mut self) -> bool {
        self.move_to(self.tree.first_child(self.current))
    }

    fn next_sibling(&mut self) -> bool {
        self.move_to(self.tree.next_sibling(self.current))
    }

    fn parent(&mut self) -> bool {
        self.move_to(self.tree.parent(self.current))
    }
}
