//! Arithmetic and string operators on forced values.
//!
//! The operator is chosen by the operand tags at force time: `+` on two
//! strings concatenates, `+` on numbers adds.

use crate::{EvalError, EvalResult, Value};

fn mismatch(expected: &'static str, found: &Value) -> EvalError {
    EvalError::TypeMismatch {
        expected,
        found: found.type_name(),
    }
}

/// Promote a numeric pair to floats if either side is a float.
fn floats(lhs: &Value, rhs: &Value) -> Option<(f64, f64)> {
    match (lhs, rhs) {
        (Value::Float(_), _) | (_, Value::Float(_)) => Some((lhs.as_float()?, rhs.as_float()?)),
        _ => None,
    }
}

fn numeric_operand<'v>(lhs: &'v Value, rhs: &'v Value) -> &'v Value {
    if matches!(lhs, Value::Int(_) | Value::Float(_)) {
        rhs
    } else {
        lhs
    }
}

pub(crate) fn add(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => a
            .checked_add(*b)
            .map(Value::Int)
            .ok_or(EvalError::Overflow { op: "addition" }),
        (Value::String(a), Value::String(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        (Value::String(_), other) => Err(mismatch("a string", other)),
        _ => match floats(lhs, rhs) {
            Some((a, b)) => Ok(Value::Float(a + b)),
            None => Err(mismatch("a number or string", numeric_operand(lhs, rhs))),
        },
    }
}

pub(crate) fn sub(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => a
            .checked_sub(*b)
            .map(Value::Int)
            .ok_or(EvalError::Overflow { op: "subtraction" }),
        _ => match floats(lhs, rhs) {
            Some((a, b)) => Ok(Value::Float(a - b)),
            None => Err(mismatch("a number", numeric_operand(lhs, rhs))),
        },
    }
}

pub(crate) fn mul(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => a
            .checked_mul(*b)
            .map(Value::Int)
            .ok_or(EvalError::Overflow { op: "multiplication" }),
        _ => match floats(lhs, rhs) {
            Some((a, b)) => Ok(Value::Float(a * b)),
            None => Err(mismatch("a number", numeric_operand(lhs, rhs))),
        },
    }
}

pub(crate) fn div(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Int(_), Value::Int(0)) => Err(EvalError::DivisionByZero),
        (Value::Int(a), Value::Int(b)) => a
            .checked_div(*b)
            .map(Value::Int)
            .ok_or(EvalError::Overflow { op: "division" }),
        _ => match floats(lhs, rhs) {
            Some((_, b)) if b == 0.0 => Err(EvalError::DivisionByZero),
            Some((a, b)) => Ok(Value::Float(a / b)),
            None => Err(mismatch("a number", numeric_operand(lhs, rhs))),
        },
    }
}

pub(crate) fn negate(value: &Value) -> EvalResult<Value> {
    match value {
        Value::Int(n) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or(EvalError::Overflow { op: "negation" }),
        Value::Float(x) => Ok(Value::Float(-x)),
        other => Err(mismatch("a number", other)),
    }
}

pub(crate) fn less_than(lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(a < b)),
        (Value::String(a), Value::String(b)) => Ok(Value::Bool(a < b)),
        _ => match floats(lhs, rhs) {
            Some((a, b)) => Ok(Value::Bool(a < b)),
            None => Err(mismatch("a number", numeric_operand(lhs, rhs))),
        },
    }
}
