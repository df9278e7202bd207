//! The primitive-operation table.
//!
//! A `Primop` node's text (`__add`, `__sub`, ...) is looked up here and the
//! matching rule produces the node's thunk. This table is the only place
//! primitive names are known; adding one needs no change to the rule table.

use crate::value::{List, Primop, PrimopFn};
use crate::{EvalError, EvalResult, Node, Thunk, Value, ops};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Produces the thunk of a `Primop` node.
pub type Rule = Rc<dyn Fn(&Node) -> EvalResult<Rc<Thunk>>>;

/// Primitive name to rule.
#[derive(Clone, Default)]
pub struct PrimopTable {
    rules: HashMap<String, Rule>,
}

impl PrimopTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table with every builtin registered.
    pub fn builtins() -> Self {
        let mut table = Self::new();

        // === Arithmetic ===
        table.register("__add", 2, binary(ops::add));
        table.register("__sub", 2, binary(ops::sub));
        table.register("__mul", 2, binary(ops::mul));
        table.register("__div", 2, binary(ops::div));
        table.register("__lessThan", 2, binary(ops::less_than));

        // === Inspection ===
        table.register("__typeOf", 1, |args| {
            let name = match args[0].force()? {
                Value::Function(_) | Value::Primop(_) => "lambda",
                other => other.type_name(),
            };
            Ok(Value::string(name))
        });
        table.register("__length", 1, |args| match args[0].force()? {
            Value::List(list) => Ok(Value::Int(list.len() as i64)),
            other => Err(EvalError::TypeMismatch {
                expected: "a list",
                found: other.type_name(),
            }),
        });
        table.register("__attrNames", 1, |args| match args[0].force()? {
            Value::AttrSet(set) => {
                let names = set
                    .names()
                    .map(|name| Thunk::ready(Value::String(name.clone())))
                    .collect();
                Ok(Value::List(Rc::new(List::new(names))))
            }
            other => Err(EvalError::TypeMismatch {
                expected: "a set",
                found: other.type_name(),
            }),
        });
        table.register("__isAttrs", 1, |args| {
            Ok(Value::Bool(matches!(args[0].force()?, Value::AttrSet(_))))
        });

        table
    }

    /// Register a raw rule under `name`, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, rule: Rule) {
        self.rules.insert(name.into(), rule);
    }

    /// Register a curried primitive taking `arity` lazy arguments.
    ///
    /// The node evaluates to a primop value that runs `op` once it has
    /// been applied `arity` times. With arity zero, `op` runs when the
    /// node itself is forced.
    pub fn register(
        &mut self,
        name: &str,
        arity: usize,
        op: impl Fn(&[Rc<Thunk>]) -> EvalResult<Value> + 'static,
    ) {
        let op: PrimopFn = Rc::new(op);
        let primop_name: Rc<str> = Rc::from(name);
        let rule: Rule = Rc::new(move |_node: &Node| {
            if arity == 0 {
                let op = op.clone();
                return Ok(Thunk::deferred(move || op(&[])));
            }
            let primop = Primop::new(&*primop_name, arity, op.clone());
            Ok(Thunk::ready(Value::Primop(Rc::new(primop))))
        });
        self.insert(name, rule);
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The thunk for a `Primop` node, from the rule registered under its text.
    pub(crate) fn wire(&self, node: &Node) -> EvalResult<Rc<Thunk>> {
        let name = node.source_text()?;
        let rule = self.get(name).ok_or_else(|| EvalError::UnknownPrimop {
            name: name.to_string(),
            span: node.span(),
        })?;
        tracing::trace!(primop = name, "dispatching primop");
        rule(node)
    }
}

impl fmt::Debug for PrimopTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// Lift a binary operator into a primop body forcing both arguments.
fn binary(
    op: fn(&Value, &Value) -> EvalResult<Value>,
) -> impl Fn(&[Rc<Thunk>]) -> EvalResult<Value> {
    move |args| op(&args[0].force()?, &args[1].force()?)
}
