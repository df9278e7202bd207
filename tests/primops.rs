//! Integration tests for the builtin primop table.

use lazynix::{EvalConfig, EvalError, Evaluator, PrimopTable, Value, evaluate};

fn eval(source: &str) -> Value {
    match evaluate(source) {
        Ok(Some(value)) => value,
        other => panic!("evaluating {:?} gave {:?}", source, other),
    }
}

fn names(value: &Value) -> Vec<String> {
    let list = value.as_list().expect("list");
    list.iter()
        .map(|item| item.unwrap().as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_arithmetic_primops() {
    assert_eq!(eval("__add 1 2"), Value::Int(3));
    assert_eq!(eval("__sub 10 4"), Value::Int(6));
    assert_eq!(eval("__mul 6 7"), Value::Int(42));
    assert_eq!(eval("__div 7 2"), Value::Int(3));
    assert_eq!(eval("__div 7.0 2"), Value::Float(3.5));
}

#[test]
fn test_call_is_never_subtraction() {
    // A parenthesized negative is an ordinary argument.
    assert_eq!(eval("__sub 3 (-1)"), Value::Int(4));
}

#[test]
fn test_subtraction_after_primop_call() {
    assert_eq!(eval("__add 1 2 - 1"), Value::Int(2));
    assert_eq!(eval("__sub 10 4 - 1"), Value::Int(5));
    assert_eq!(eval("__add 1 2 - 1 - 1"), Value::Int(1));
    assert_eq!(eval("(__add 1 2) - 1"), Value::Int(2));
}

#[test]
fn test_subtracting_from_partial_primop_is_type_error() {
    // `__sub 3 -1` is `(__sub 3) - 1`.
    assert_eq!(
        evaluate("__sub 3 -1"),
        Err(EvalError::TypeMismatch {
            expected: "a number or string",
            found: "primop",
        })
    );
}

#[test]
fn test_division_by_zero() {
    assert_eq!(evaluate("__div 1 0"), Err(EvalError::DivisionByZero));
}

#[test]
fn test_less_than() {
    assert_eq!(eval("__lessThan 1 2"), Value::Bool(true));
    assert_eq!(eval("__lessThan 2.5 1"), Value::Bool(false));
    assert_eq!(eval(r#"__lessThan "a" "b""#), Value::Bool(true));
}

#[test]
fn test_primop_arguments_are_lazy() {
    // `__isAttrs` never looks inside the set, so the bad field is untouched.
    assert_eq!(eval("__isAttrs { a = { }.b; }"), Value::Bool(true));
    assert_eq!(eval("__length [ 1 { }.b ]"), Value::Int(2));
}

// ============================================================================
// Inspection
// ============================================================================

#[test]
fn test_type_of() {
    let cases = [
        ("1", "int"),
        ("1.0", "float"),
        ("true", "bool"),
        ("null", "null"),
        (r#""s""#, "string"),
        ("{ }", "set"),
        ("[ ]", "list"),
        ("__add", "lambda"),
        ("(__add 1)", "lambda"),
    ];
    for (arg, expected) in cases {
        let source = format!("__typeOf {}", arg);
        assert_eq!(eval(&source), Value::string(expected), "{}", source);
    }
}

#[test]
fn test_attr_names_sorted() {
    assert_eq!(names(&eval("__attrNames { b = 1; a = 2; c = 3; }")), vec!["a", "b", "c"]);
    assert!(names(&eval("__attrNames { }")).is_empty());
}

#[test]
fn test_length_requires_list() {
    assert_eq!(
        evaluate("__length 1"),
        Err(EvalError::TypeMismatch {
            expected: "a list",
            found: "int",
        })
    );
}

// ============================================================================
// Custom tables
// ============================================================================

#[test]
fn test_custom_primop() {
    let mut primops = PrimopTable::builtins();
    primops.register("__double", 1, |args| match args[0].force()? {
        Value::Int(n) => Ok(Value::Int(n * 2)),
        other => Err(EvalError::TypeMismatch {
            expected: "an integer",
            found: other.type_name(),
        }),
    });
    let evaluator = Evaluator::with_config(EvalConfig::new().primops(primops));

    assert_eq!(evaluator.evaluate("__double 21"), Ok(Some(Value::Int(42))));
    assert_eq!(evaluator.evaluate("__double (__add 1 2)"), Ok(Some(Value::Int(6))));
}

#[test]
fn test_empty_table_knows_nothing() {
    let evaluator = Evaluator::with_config(EvalConfig::new().primops(PrimopTable::new()));
    assert!(matches!(
        evaluator.evaluate("__add 1 2"),
        Err(EvalError::UnknownPrimop { name, .. }) if name == "__add"
    ));
}

#[test]
fn test_builtin_names() {
    let table = PrimopTable::builtins();
    assert_eq!(
        table.names(),
        vec![
            "__add",
            "__attrNames",
            "__div",
            "__isAttrs",
            "__length",
            "__lessThan",
            "__mul",
            "__sub",
            "__typeOf",
        ]
    );
}
