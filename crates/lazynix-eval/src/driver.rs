//! The wiring and forcing driver.
//!
//! Wiring walks the node graph with the same three cursor moves the
//! adapter uses. Every time the walk bottoms out at a leaf, each ancestor
//! of that leaf gets all of its still-unwired children wired. Once the walk
//! is done every node has its thunk, and only then is anything forced.

use crate::{
    DumpConfig, EvalConfig, EvalError, EvalResult, Node, RuleTable, Value, adapt, dump,
};
use lazynix_common::Span;
use lazynix_syntax::TreeCursor;
use std::rc::Rc;
use tracing::Level;

/// A [`TreeCursor`] over an adapted node graph.
#[derive(Debug, Clone)]
pub struct NodeCursor {
    node: Rc<Node>,
}

impl NodeCursor {
    pub fn new(node: Rc<Node>) -> Self {
        Self { node }
    }

    /// The node under the cursor.
    pub fn node(&self) -> &Rc<Node> {
        &self.node
    }

    fn move_to(&mut self, target: Option<Rc<Node>>) -> bool {
        match target {
            Some(node) => {
                self.node = node;
                true
            }
            None => false,
        }
    }
}

impl TreeCursor for NodeCursor {
    fn kind_name(&self) -> &str {
        self.node.kind().as_str()
    }

    fn span(&self) -> Span {
        self.node.span()
    }

    fn first_child(&mut self) -> bool {
        let child = self.node.children().first().cloned();
        self.move_to(child)
    }

    fn next_sibling(&mut self) -> bool {
        let sibling = self
            .node
            .parent()
            .and_then(|parent| parent.children().get(self.node.index() + 1).cloned());
        self.move_to(sibling)
    }

    fn parent(&mut self) -> bool {
        let parent = self.node.parent();
        self.move_to(parent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    /// Looking for a first child.
    Descending,
    /// At a leaf or a finished subtree, looking for a sibling.
    Ascending,
    Done,
}

/// Attach a thunk to every node under `root` that has a rule.
fn wire_tree(rules: &RuleTable, root: &Rc<Node>) -> EvalResult<()> {
    let mut cursor = NodeCursor::new(root.clone());
    let mut state = Walk::Descending;
    let mut leaves = 0usize;

    while state != Walk::Done {
        state = match state {
            Walk::Descending if cursor.first_child() => Walk::Descending,
            Walk::Descending => {
                leaves += 1;
                wire_ancestors(rules, cursor.node())?;
                Walk::Ascending
            }
            Walk::Ascending if cursor.next_sibling() => Walk::Descending,
            Walk::Ascending if cursor.parent() => Walk::Ascending,
            Walk::Ascending | Walk::Done => Walk::Done,
        };
    }

    tracing::debug!(leaves, "wiring complete");
    Ok(())
}

/// Wire the unwired children of every ancestor of `leaf`, innermost first.
fn wire_ancestors(rules: &RuleTable, leaf: &Rc<Node>) -> EvalResult<()> {
    let mut ancestor = leaf.parent();
    while let Some(node) = ancestor {
        for child in node.children() {
            rules.wire(child)?;
        }
        ancestor = node.parent();
    }
    Ok(())
}

/// Evaluates source text, or any parse tree behind a [`TreeCursor`].
#[derive(Debug, Clone)]
pub struct Evaluator {
    rules: RuleTable,
    dump: DumpConfig,
}

impl Evaluator {
    /// An evaluator with the builtin primops.
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    pub fn with_config(config: EvalConfig) -> Self {
        Self {
            rules: RuleTable::new(config.primops),
            dump: config.dump,
        }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Parse and evaluate `source`. An empty document yields `Ok(None)`.
    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn evaluate(&self, source: &str) -> EvalResult<Option<Value>> {
        let tree = lazynix_parser::parse(source).map_err(EvalError::Syntax)?;
        self.evaluate_cursor(tree.cursor(), source)
    }

    /// Evaluate the tree under `cursor`, whose spans index into `source`.
    pub fn evaluate_cursor<C: TreeCursor>(&self, cursor: C, source: &str) -> EvalResult<Option<Value>> {
        let root = adapt(cursor, source);
        self.wire(&root)?;
        self.force_root(&root)
    }

    /// Wire every node under `root`. Nothing is forced.
    pub fn wire(&self, root: &Rc<Node>) -> EvalResult<()> {
        wire_tree(&self.rules, root)?;
        if tracing::enabled!(Level::TRACE) {
            tracing::trace!("wired tree:\n{}", dump(root, &self.dump));
        }
        Ok(())
    }

    /// Force the top-level expression of a wired graph.
    pub fn force_root(&self, root: &Node) -> EvalResult<Option<Value>> {
        let Some(top) = root.children().first() else {
            return Ok(None);
        };
        if top.kind() == &crate::NodeKind::Nix && top.children().is_empty() {
            tracing::debug!("empty document");
            return Ok(None);
        }
        let value = top.force()?;
        tracing::debug!(ty = value.type_name(), "evaluated");
        Ok(Some(value))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate `source` with the builtin primops.
pub fn evaluate(source: &str) -> EvalResult<Option<Value>> {
    Evaluator::new().evaluate(source)
}
