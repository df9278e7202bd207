//! Runtime values.

use crate::{EvalError, EvalResult, Thunk};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A runtime value.
///
/// Values are immutable once produced. Containers hold thunks, not values,
/// so building a set or list never forces its members.
#[derive(Clone)]
pub enum Value {
    Bool(bool),
    Null,
    Int(i64),
    Float(f64),
    String(Rc<str>),
    /// Attribute set; fields are forced on selection.
    AttrSet(Rc<AttrSet>),
    /// List; elements are forced on iteration.
    List(Rc<List>),
    /// A function taking one lazy argument.
    Function(Rc<Function>),
    /// A primitive operation, possibly partially applied.
    Primop(Rc<Primop>),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Value::String(Rc::from(s.as_ref()))
    }

    /// The Nix name of this value's type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::AttrSet(_) => "set",
            Value::List(_) => "list",
            Value::Function(_) => "lambda",
            Value::Primop(_) => "primop",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_attrs(&self) -> Option<&Rc<AttrSet>> {
        match self {
            Value::AttrSet(set) => Some(set),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Rc<List>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Apply this value to one argument. The argument is passed unforced.
    pub fn apply(&self, arg: Rc<Thunk>) -> EvalResult<Value> {
        match self {
            Value::Function(func) => func.call(arg),
            Value::Primop(primop) => primop.apply(arg),
            other => Err(EvalError::NotCallable {
                found: other.type_name(),
            }),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            // Comparing contents would force them.
            (Value::AttrSet(a), Value::AttrSet(b)) => Rc::ptr_eq(a, b),
            (Value::List(a), Value::List(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Primop(a), Value::Primop(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Shows forced members only; printing never forces a thunk.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write_quoted(f, s),
            Value::AttrSet(set) => {
                write!(f, "{{ ")?;
                for (name, thunk) in set.iter() {
                    write!(f, "{} = ", name)?;
                    write_thunk(f, thunk)?;
                    write!(f, "; ")?;
                }
                write!(f, "}}")
            }
            Value::List(list) => {
                write!(f, "[ ")?;
                for thunk in list.thunks() {
                    write_thunk(f, thunk)?;
                    write!(f, " ")?;
                }
                write!(f, "]")
            }
            Value::Function(_) => write!(f, "«lambda»"),
            Value::Primop(primop) if primop.args.is_empty() => {
                write!(f, "«primop {}»", primop.name)
            }
            Value::Primop(primop) => write!(f, "«primop-app {}»", primop.name),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

fn write_thunk(f: &mut fmt::Formatter<'_>, thunk: &Thunk) -> fmt::Result {
    match thunk.peek() {
        Some(value) => write!(f, "{}", value),
        None => write!(f, "«thunk»"),
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            '$' if chars.peek() == Some(&'{') => write!(f, "\\$")?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "\"")
}

/// An attribute set: names mapped to field thunks, kept in name order.
#[derive(Debug, Default)]
pub struct AttrSet {
    fields: BTreeMap<Rc<str>, Rc<Thunk>>,
}

impl AttrSet {
    pub fn new(fields: BTreeMap<Rc<str>, Rc<Thunk>>) -> Self {
        Self { fields }
    }

    /// The thunk behind `name`, unforced.
    pub fn field(&self, name: &str) -> Option<&Rc<Thunk>> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &Rc<str>> {
        self.fields.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Rc<str>, &Rc<Thunk>)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A finite list of element thunks.
#[derive(Debug, Default)]
pub struct List {
    items: Vec<Rc<Thunk>>,
}

impl List {
    pub fn new(items: Vec<Rc<Thunk>>) -> Self {
        Self { items }
    }

    /// Iterate the elements, forcing each one only when it is reached.
    /// Every call starts a fresh pass over the same elements.
    pub fn iter(&self) -> impl Iterator<Item = EvalResult<Value>> + '_ {
        self.items.iter().map(|thunk| thunk.force())
    }

    pub fn thunks(&self) -> &[Rc<Thunk>] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Rc<Thunk>> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A one-argument function value.
pub struct Function {
    body: Box<dyn Fn(Rc<Thunk>) -> EvalResult<Value>>,
}

impl Function {
    pub fn new(body: impl Fn(Rc<Thunk>) -> EvalResult<Value> + 'static) -> Self {
        Self {
            body: Box::new(body),
        }
    }

    pub fn call(&self, arg: Rc<Thunk>) -> EvalResult<Value> {
        (self.body)(arg)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "«lambda»")
    }
}

/// The implementation behind a primop: receives exactly `arity` argument
/// thunks and decides itself which to force.
pub type PrimopFn = Rc<dyn Fn(&[Rc<Thunk>]) -> EvalResult<Value>>;

/// A curried primitive operation.
#[derive(Clone)]
pub struct Primop {
    pub name: Rc<str>,
    pub arity: usize,
    args: Vec<Rc<Thunk>>,
    op: PrimopFn,
}

impl Primop {
    pub fn new(name: impl AsRef<str>, arity: usize, op: PrimopFn) -> Self {
        Self {
            name: Rc::from(name.as_ref()),
            arity,
            args: Vec::new(),
            op,
        }
    }

    /// Arguments collected so far.
    pub fn applied(&self) -> usize {
        self.args.len()
    }

    /// Add one argument. Runs the operation once `arity` arguments are
    /// collected, otherwise returns the partial application.
    pub fn apply(&self, arg: Rc<Thunk>) -> EvalResult<Value> {
        let mut next = self.clone();
        next.args.push(arg);
        if next.args.len() >= next.arity {
            tracing::trace!(primop = %next.name, "saturated");
            (next.op)(&next.args)
        } else {
            Ok(Value::Primop(Rc::new(next)))
        }
    }
}

impl fmt::Debug for Primop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Primop({}, {}/{})", self.name, self.args.len(), self.arity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant_add() -> Primop {
        Primop::new(
            "__add",
            2,
            Rc::new(|args: &[Rc<Thunk>]| {
                let a = args[0].force()?.as_int().unwrap_or_default();
                let b = args[1].force()?.as_int().unwrap_or_default();
                Ok(Value::Int(a + b))
            }),
        )
    }

    #[test]
    fn test_primop_curries() {
        let add = Value::Primop(Rc::new(constant_add()));
        let partial = add.apply(Thunk::ready(Value::Int(1))).unwrap();
        match &partial {
            Value::Primop(p) => assert_eq!(p.applied(), 1),
            other => panic!("expected partial primop, got {:?}", other),
        }
        assert_eq!(partial.apply(Thunk::ready(Value::Int(2))), Ok(Value::Int(3)));
        // The partial application is reusable.
        assert_eq!(partial.apply(Thunk::ready(Value::Int(5))), Ok(Value::Int(6)));
    }

    #[test]
    fn test_apply_non_function() {
        let err = Value::Int(1).apply(Thunk::ready(Value::Null)).unwrap_err();
        assert_eq!(err, EvalError::NotCallable { found: "int" });
    }

    #[test]
    fn test_display_does_not_force() {
        let mut fields = BTreeMap::new();
        fields.insert(Rc::from("a"), Thunk::ready(Value::Int(1)));
        fields.insert(
            Rc::from("b"),
            Thunk::deferred(|| Err(EvalError::DivisionByZero)),
        );
        let set = Value::AttrSet(Rc::new(AttrSet::new(fields)));
        assert_eq!(set.to_string(), "{ a = 1; b = «thunk»; }");
    }

    #[test]
    fn test_string_display_escapes() {
        assert_eq!(Value::string("a\"b\n${").to_string(), r#""a\"b\n\${""#);
    }

    #[test]
    fn test_list_iter_restarts() {
        let list = List::new(vec![Thunk::ready(Value::Int(1)), Thunk::ready(Value::Int(2))]);
        let first: Vec<_> = list.iter().collect();
        let second: Vec<_> = list.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![Ok(Value::Int(1)), Ok(Value::Int(2))]);
    }
}
