//! Integration tests for lazynix-eval: end-to-end evaluation of source text.

use lazynix::{EvalError, Span, Value, evaluate};
use lazynix_eval::value::AttrSet;
use std::rc::Rc;

fn eval(source: &str) -> Value {
    match evaluate(source) {
        Ok(Some(value)) => value,
        Ok(None) => panic!("no value for {:?}", source),
        Err(err) => panic!("evaluating {:?} failed: {}", source, err),
    }
}

fn eval_err(source: &str) -> EvalError {
    match evaluate(source) {
        Ok(value) => panic!("expected {:?} to fail, got {:?}", source, value),
        Err(err) => err,
    }
}

fn attrs(value: &Value) -> Rc<AttrSet> {
    value.as_attrs().cloned().expect("attribute set")
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_eval_booleans_and_null() {
    assert_eq!(eval("true"), Value::Bool(true));
    assert_eq!(eval("false"), Value::Bool(false));
    assert_eq!(eval("null"), Value::Null);
}

#[test]
fn test_eval_numbers() {
    assert_eq!(eval("42"), Value::Int(42));
    assert_eq!(eval("1.5"), Value::Float(1.5));
    assert_eq!(eval("2.5e2"), Value::Float(250.0));
}

#[test]
fn test_eval_string_escapes() {
    assert_eq!(eval(r#""hello""#), Value::string("hello"));
    assert_eq!(eval(r#""a\tb\n""#), Value::string("a\tb\n"));
    assert_eq!(eval(r#""\$x""#), Value::string("$x"));
}

#[test]
fn test_eval_int_literal_overflow() {
    assert_eq!(
        eval_err("99999999999999999999"),
        EvalError::ParseFailure {
            literal: "integer",
            text: "99999999999999999999".to_string(),
            span: Span::from_usize(0, 20),
        }
    );
}

#[test]
fn test_eval_empty_input() {
    assert_eq!(evaluate(""), Ok(None));
    assert_eq!(evaluate("\n\t "), Ok(None));
}

#[test]
fn test_eval_parens() {
    assert_eq!(eval("((7))"), Value::Int(7));
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_eval_primop_add() {
    assert_eq!(eval("__add 1 2"), Value::Int(3));
}

#[test]
fn test_eval_infix_add() {
    assert_eq!(eval("1 + 2"), Value::Int(3));
    assert_eq!(eval("1 + 2 + 3"), Value::Int(6));
    assert_eq!(eval("1 + 0.5"), Value::Float(1.5));
}

#[test]
fn test_eval_subtraction() {
    assert_eq!(eval("3 - 1"), Value::Int(2));
    assert_eq!(eval("3.5 - 1.5"), Value::Float(2.0));
    assert_eq!(eval("10 - 1 - 2"), Value::Int(7));
}

#[test]
fn test_eval_negation() {
    assert_eq!(eval("-5"), Value::Int(-5));
    assert_eq!(eval("-3 - 1"), Value::Int(-4));
    assert_eq!(eval("-(2.5)"), Value::Float(-2.5));
}

#[test]
fn test_eval_string_concatenation() {
    assert_eq!(eval(r#""foo" + "bar""#), Value::string("foobar"));
}

#[test]
fn test_eval_mixed_concatenation_is_type_error() {
    assert_eq!(
        eval_err(r#""foo" + 1"#),
        EvalError::TypeMismatch {
            expected: "a string",
            found: "int",
        }
    );
}

#[test]
fn test_eval_overflowing_addition() {
    assert_eq!(
        eval_err("9223372036854775807 + 1"),
        EvalError::Overflow { op: "addition" }
    );
}

// ============================================================================
// Conditionals
// ============================================================================

#[test]
fn test_eval_if() {
    assert_eq!(eval("if true then 1 else 2"), Value::Int(1));
    assert_eq!(eval("if false then 1 else 2"), Value::Int(2));
}

#[test]
fn test_eval_if_is_lazy_in_untaken_branch() {
    assert_eq!(eval("if true then 1 else { }.missing"), Value::Int(1));
    assert_eq!(eval("if false then 1 + \"x\" else 2"), Value::Int(2));
}

#[test]
fn test_eval_if_requires_boolean() {
    assert_eq!(
        eval_err("if 1 then 2 else 3"),
        EvalError::TypeMismatch {
            expected: "a Boolean",
            found: "int",
        }
    );
}

// ============================================================================
// Attribute sets and selection
// ============================================================================

#[test]
fn test_eval_select() {
    assert_eq!(eval("{ a = 1; b = 2; }.b"), Value::Int(2));
    assert_eq!(eval("{ a = { b = \"deep\"; }; }.a.b"), Value::string("deep"));
}

#[test]
fn test_eval_select_quoted_name() {
    assert_eq!(eval(r#"{ "a b" = 1; }."a b""#), Value::Int(1));
}

#[test]
fn test_eval_missing_attribute() {
    assert_eq!(
        eval_err("{ a = 1; }.b"),
        EvalError::MissingAttribute {
            name: "b".to_string(),
            span: Span::from_usize(11, 12),
        }
    );
}

#[test]
fn test_eval_attr_fields_are_lazy() {
    assert_eq!(eval("{ a = 1; b = 1 + \"x\"; }.a"), Value::Int(1));

    let set = eval("{ a = 1; b = { }.nope; }");
    let set = attrs(&set);
    assert_eq!(set.names().map(|n| n.as_ref()).collect::<Vec<_>>(), vec!["a", "b"]);
    assert!(!set.field("b").unwrap().is_forced());
}

#[test]
fn test_eval_duplicate_key_keeps_last() {
    assert_eq!(eval("{ a = 1; a = 2; }.a"), Value::Int(2));
}

#[test]
fn test_eval_select_on_non_set() {
    assert_eq!(
        eval_err("1 .a"),
        EvalError::TypeMismatch {
            expected: "a set",
            found: "int",
        }
    );
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn test_eval_list() {
    let value = eval("[ 1 \"two\" 3.0 ]");
    let list = value.as_list().cloned().expect("list");
    let items: Vec<_> = list.iter().collect();
    assert_eq!(
        items,
        vec![
            Ok(Value::Int(1)),
            Ok(Value::string("two")),
            Ok(Value::Float(3.0)),
        ]
    );
}

#[test]
fn test_eval_list_elements_are_lazy() {
    let value = eval("[ 1 { }.nope ]");
    let list = value.as_list().cloned().expect("list");
    assert_eq!(list.len(), 2);
    let mut items = list.iter();
    assert_eq!(items.next(), Some(Ok(Value::Int(1))));
    assert!(matches!(items.next(), Some(Err(EvalError::MissingAttribute { .. }))));
}

#[test]
fn test_eval_list_negative_items() {
    let value = eval("[ 1 -2 ]");
    let list = value.as_list().cloned().expect("list");
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(1).unwrap().force(), Ok(Value::Int(-2)));
}

// ============================================================================
// Unimplemented constructs
// ============================================================================

fn not_implemented_kind(source: &str) -> String {
    match eval_err(source) {
        EvalError::NotImplemented { kind, .. } => kind,
        other => panic!("expected NotImplemented, got {:?}", other),
    }
}

#[test]
fn test_eval_let_not_implemented() {
    assert_eq!(not_implemented_kind("let a = 1; in 2"), "Let");
}

#[test]
fn test_eval_var_not_implemented() {
    assert_eq!(not_implemented_kind("x"), "Var");
}

#[test]
fn test_eval_rec_not_implemented() {
    assert_eq!(not_implemented_kind("rec { a = 1; }"), "RecAttrSet");
}

#[test]
fn test_eval_unimplemented_even_in_untaken_branch() {
    // Wiring happens before forcing, so laziness does not hide the gap.
    assert_eq!(not_implemented_kind("if true then 1 else x"), "Var");
}

// ============================================================================
// Application
// ============================================================================

#[test]
fn test_eval_apply_non_function() {
    assert_eq!(
        eval_err("1 2"),
        EvalError::NotCallable { found: "int" }
    );
}

#[test]
fn test_eval_unknown_primop() {
    assert_eq!(
        eval_err("__nope 1"),
        EvalError::UnknownPrimop {
            name: "__nope".to_string(),
            span: Span::from_usize(0, 6),
        }
    );
}

#[test]
fn test_eval_partial_primop_displays() {
    assert_eq!(eval("__add 1").to_string(), "«primop-app __add»");
    assert_eq!(eval("__add").to_string(), "«primop __add»");
}
