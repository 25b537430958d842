//! Constructors for language-level error objects.
//!
//! Every `Object::Error` the evaluator produces is built here, so the
//! message texts live in one place.

use std::fmt;

use crate::object::{Object, ObjectType};

// Operators

/// Operand tags differ and no rule covers the pair.
pub fn type_mismatch(left: ObjectType, op: impl fmt::Display, right: ObjectType) -> Object {
    Object::error(format!("type mismatch: {left} {op} {right}"))
}

/// Operand tags match but the operator is undefined for them.
pub fn unknown_infix_operator(left: ObjectType, op: impl fmt::Display, right: ObjectType) -> Object {
    Object::error(format!("unknown operator: {left} {op} {right}"))
}

pub fn unknown_prefix_operator(op: impl fmt::Display, right: ObjectType) -> Object {
    Object::error(format!("unknown operator: {op}{right}"))
}

#[cold]
pub fn division_by_zero() -> Object {
    Object::error("division by zero")
}

#[cold]
pub fn repetition_too_long() -> Object {
    Object::error("string repetition too long")
}

// Names and calls

pub fn identifier_not_found(name: &str) -> Object {
    Object::error(format!("identifier not found: {name}"))
}

pub fn not_a_function(callee: ObjectType) -> Object {
    Object::error(format!("not a function: {callee}"))
}

pub fn wrong_arg_count(got: usize, want: usize) -> Object {
    Object::error(format!("wrong number of arguments. got={got}, want={want}"))
}

/// A variadic builtin called with nothing.
pub fn missing_args(got: usize) -> Object {
    Object::error(format!("wrong number of arguments. got={got}"))
}

pub fn unsupported_arg(builtin: &str, arg: ObjectType) -> Object {
    Object::error(format!(
        "argument to `{builtin}` is not supported. got {arg}"
    ))
}

// Collections

pub fn unusable_hash_key(key: ObjectType) -> Object {
    Object::error(format!("unusable as hash key: {key}"))
}

pub fn index_not_supported(target: ObjectType) -> Object {
    Object::error(format!("index operator not supported: {target}"))
}
