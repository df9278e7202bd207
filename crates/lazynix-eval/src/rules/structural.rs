//! Rules for grouping, conditionals, attribute sets, selection and lists.

use super::children;
use crate::{AttrSet, EvalError, EvalResult, List, Node, NodeKind, Thunk, Value};
use std::collections::BTreeMap;
use std::rc::Rc;

/// `Nix` documents and `Parens` evaluate to their first child.
pub(super) fn passthrough(node: &Node) -> EvalResult<Rc<Thunk>> {
    let inner = match node.kind() {
        NodeKind::Nix => node.children().first().cloned().ok_or_else(|| malformed(node, 1))?,
        _ => {
            let [inner] = children(node)?;
            inner
        }
    };
    Ok(Thunk::deferred(move || inner.force()))
}

/// Only the taken branch is ever forced.
pub(super) fn if_then_else(node: &Node) -> EvalResult<Rc<Thunk>> {
    let [cond, then, otherwise] = children(node)?;
    Ok(Thunk::deferred(move || match cond.force()? {
        Value::Bool(true) => then.force(),
        Value::Bool(false) => otherwise.force(),
        other => Err(EvalError::TypeMismatch {
            expected: "a Boolean",
            found: other.type_name(),
        }),
    }))
}

pub(super) fn attr_set(node: &Node) -> EvalResult<Rc<Thunk>> {
    let cache = node.attr_cache().ok_or_else(|| malformed(node, 0))?;
    let attrs = node.children().to_vec();
    Ok(Thunk::deferred(move || {
        cache
            .get_or_build(|| collect_fields(&attrs))
            .map(Value::AttrSet)
    }))
}

/// Build the field map from the `Attr` children. Keys are forced here,
/// values are not. A repeated key keeps the last binding.
fn collect_fields(attrs: &[Rc<Node>]) -> EvalResult<AttrSet> {
    let mut fields = BTreeMap::new();
    for attr in attrs {
        let [key, value] = children(attr)?;
        let name = match key.force()? {
            Value::String(name) => name,
            other => {
                return Err(EvalError::TypeMismatch {
                    expected: "a string",
                    found: other.type_name(),
                });
            }
        };
        fields.insert(name, value.thunk()?);
    }
    Ok(AttrSet::new(fields))
}

/// `set.name`: force the set, then the selected field only.
pub(super) fn select(node: &Node) -> EvalResult<Rc<Thunk>> {
    let [set, name] = children(node)?;
    Ok(Thunk::deferred(move || {
        let set = match set.force()? {
            Value::AttrSet(set) => set,
            other => {
                return Err(EvalError::TypeMismatch {
                    expected: "a set",
                    found: other.type_name(),
                });
            }
        };
        let key = match name.force()? {
            Value::String(key) => key,
            other => {
                return Err(EvalError::TypeMismatch {
                    expected: "a string",
                    found: other.type_name(),
                });
            }
        };
        let field = set.field(&key).ok_or_else(|| EvalError::MissingAttribute {
            name: key.to_string(),
            span: name.span(),
        })?;
        field.force()
    }))
}

pub(super) fn list(node: &Node) -> Rc<Thunk> {
    let items = node.children().to_vec();
    Thunk::deferred(move || {
        let items = items
            .iter()
            .map(|item| item.thunk())
            .collect::<EvalResult<Vec<_>>>()?;
        Ok(Value::List(Rc::new(List::new(items))))
    })
}

fn malformed(node: &Node, expected: usize) -> EvalError {
    EvalError::MalformedNode {
        kind: node.kind().to_string(),
        expected,
        found: node.children().len(),
        span: node.span(),
    }
}
