//! The owned evaluation graph and the syntax adapter that builds it.

use crate::{AttrSet, EvalError, EvalResult, NodeKind, Thunk, Value};
use lazynix_common::Span;
use lazynix_syntax::TreeCursor;
use std::cell::OnceCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Per-kind data beyond kind, text and children.
enum Payload {
    None,
    /// The field map of an `AttrSet`, built on first force.
    AttrSet(AttrCache),
}

/// Write-once slot for an attribute set's field map, shared between the
/// node and the thunk that fills it.
#[derive(Clone, Default)]
pub(crate) struct AttrCache(Rc<OnceCell<Rc<AttrSet>>>);

impl AttrCache {
    /// The cached map, or the result of `build` published as one step.
    /// No reader ever sees a partially populated set.
    pub(crate) fn get_or_build(
        &self,
        build: impl FnOnce() -> EvalResult<AttrSet>,
    ) -> EvalResult<Rc<AttrSet>> {
        if let Some(set) = self.0.get() {
            return Ok(set.clone());
        }
        let set = build()?;
        Ok(self.0.get_or_init(|| Rc::new(set)).clone())
    }
}

/// A syntax node plus its thunk slot.
///
/// Parents own their children. The parent link is a weak back-reference
/// used only to walk upwards while wiring.
pub struct Node {
    kind: NodeKind,
    span: Span,
    source: Rc<str>,
    /// Position among the parent's children.
    index: usize,
    children: Vec<Rc<Node>>,
    parent: OnceCell<Weak<Node>>,
    thunk: OnceCell<Rc<Thunk>>,
    payload: Payload,
}

impl Node {
    fn new(kind: NodeKind, span: Span, source: Rc<str>, index: usize, children: Vec<Rc<Node>>) -> Self {
        let payload = match kind {
            NodeKind::AttrSet => Payload::AttrSet(AttrCache::default()),
            _ => Payload::None,
        };
        Self {
            kind,
            span,
            source,
            index,
            children,
            parent: OnceCell::new(),
            thunk: OnceCell::new(),
            payload,
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// The exact source text this node covers. Empty when the span does
    /// not fall on character boundaries inside the source; rules that read
    /// text use [`Node::source_text`] instead.
    pub fn text(&self) -> &str {
        self.span.slice(&self.source).unwrap_or("")
    }

    /// The source text this node covers, or `InvalidSpan`.
    pub fn source_text(&self) -> EvalResult<&str> {
        self.span
            .slice(&self.source)
            .ok_or_else(|| EvalError::InvalidSpan {
                kind: self.kind.to_string(),
                span: self.span,
            })
    }

    pub fn children(&self) -> &[Rc<Node>] {
        &self.children
    }

    pub fn parent(&self) -> Option<Rc<Node>> {
        self.parent.get().and_then(Weak::upgrade)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_wired(&self) -> bool {
        self.thunk.get().is_some()
    }

    /// This node's thunk. Fails if wiring never reached the node.
    pub fn thunk(&self) -> EvalResult<Rc<Thunk>> {
        self.thunk.get().cloned().ok_or_else(|| EvalError::Unwired {
            kind: self.kind.to_string(),
            span: self.span,
        })
    }

    pub fn force(&self) -> EvalResult<Value> {
        self.thunk()?.force()
    }

    /// Attach a thunk. A node is wired at most once; later calls are ignored.
    pub(crate) fn set_thunk(&self, thunk: Rc<Thunk>) {
        let _ = self.thunk.set(thunk);
    }

    /// The field map of a forced `AttrSet` node. Never forces anything.
    pub fn attrs(&self) -> Option<Rc<AttrSet>> {
        match &self.payload {
            Payload::AttrSet(cache) => cache.0.get().cloned(),
            Payload::None => None,
        }
    }

    /// The field cache of an `AttrSet` node.
    pub(crate) fn attr_cache(&self) -> Option<AttrCache> {
        match &self.payload {
            Payload::AttrSet(cache) => Some(cache.clone()),
            Payload::None => None,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind)
            .field("span", &self.span)
            .field("text", &self.text())
            .field("children", &self.children)
            .finish()
    }
}

struct Pending {
    kind: NodeKind,
    span: Span,
    index: usize,
    children: Vec<usize>,
}

/// Copy the tree under `cursor` into an owned node graph.
///
/// The result is a synthetic `Nix` root spanning all of `source` whose
/// children are the cursor's top node and its siblings. The walk is
/// iterative and uses only first-child, next-sibling and parent moves.
/// Unknown kind tags are kept as [`NodeKind::Unknown`].
pub fn adapt<C: TreeCursor>(mut cursor: C, source: &str) -> Rc<Node> {
    let source: Rc<str> = Rc::from(source);
    let mut pending = vec![Pending {
        kind: NodeKind::Nix,
        span: Span::from_usize(0, source.len()),
        index: 0,
        children: Vec::new(),
    }];
    // Ancestors of the cursor position, innermost last.
    let mut ancestors = vec![0usize];

    'walk: loop {
        let id = pending.len();
        let parent = ancestors.last().copied().unwrap_or(0);
        let index = pending[parent].children.len();
        pending[parent].children.push(id);
        pending.push(Pending {
            kind: NodeKind::from_name(cursor.kind_name()),
            span: cursor.span(),
            index,
            children: Vec::new(),
        });

        if cursor.first_child() {
            ancestors.push(id);
            continue;
        }

        loop {
            if cursor.next_sibling() {
                continue 'walk;
            }
            if !cursor.parent() {
                break 'walk;
            }
            ancestors.pop();
        }
    }

    tracing::trace!(nodes = pending.len(), "adapted syntax tree");
    assemble(pending, source)
}

/// Turn preorder records into linked nodes, children before parents.
fn assemble(pending: Vec<Pending>, source: Rc<str>) -> Rc<Node> {
    let mut built: Vec<Option<Rc<Node>>> = Vec::with_capacity(pending.len());
    built.resize_with(pending.len(), || None);

    for (id, record) in pending.into_iter().enumerate().rev() {
        let children: Vec<Rc<Node>> = record
            .children
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        let node = Rc::new(Node::new(
            record.kind,
            record.span,
            source.clone(),
            record.index,
            children,
        ));
        for child in &node.children {
            let _ = child.parent.set(Rc::downgrade(&node));
        }
        if id == 0 {
            return node;
        }
        built[id] = Some(node);
    }

    // Only reached with no records at all; `adapt` always creates the root.
    Rc::new(Node::new(
        NodeKind::Nix,
        Span::from_usize(0, source.len()),
        source,
        0,
        Vec::new(),
    ))
}
