//! Binary operators.
//!
//! Dispatch is a single match on the operand pair. Integer arithmetic wraps
//! on overflow; only division by zero is an error.

use monkey_ir::InfixOperator;

use crate::errors::{division_by_zero, repetition_too_long, type_mismatch, unknown_infix_operator};
use crate::object::Object;

/// Apply `op` to two evaluated, non-error operands.
pub fn evaluate_binary(left: &Object, right: &Object, op: InfixOperator) -> Object {
    match (left, right) {
        (Object::Integer(a), Object::Integer(b)) => eval_int_binary(*a, *b, op),
        (Object::Boolean(a), Object::Boolean(b)) => eval_bool_binary(*a, *b, op, left, right),
        (Object::String(a), Object::String(b)) => eval_string_binary(a, b, op, left, right),
        (Object::String(s), Object::Integer(n)) if op == InfixOperator::Asterisk => {
            repeat_string(s, *n)
        }
        _ => invalid_binary(left, right, op),
    }
}

fn eval_int_binary(a: i64, b: i64, op: InfixOperator) -> Object {
    match op {
        InfixOperator::Plus => Object::Integer(a.wrapping_add(b)),
        InfixOperator::Minus => Object::Integer(a.wrapping_sub(b)),
        InfixOperator::Asterisk => Object::Integer(a.wrapping_mul(b)),
        InfixOperator::Slash => {
            if b == 0 {
                division_by_zero()
            } else {
                // Truncates toward zero; `i64::MIN / -1` wraps to `i64::MIN`.
                Object::Integer(a.wrapping_div(b))
            }
        }
        InfixOperator::Lt => Object::native_bool(a < b),
        InfixOperator::Gt => Object::native_bool(a > b),
        InfixOperator::Eq => Object::native_bool(a == b),
        InfixOperator::NotEq => Object::native_bool(a != b),
    }
}

/// `false < true`.
fn eval_bool_binary(a: bool, b: bool, op: InfixOperator, left: &Object, right: &Object) -> Object {
    match op {
        InfixOperator::Eq => Object::native_bool(a == b),
        InfixOperator::NotEq => Object::native_bool(a != b),
        InfixOperator::Lt => Object::native_bool(a < b),
        InfixOperator::Gt => Object::native_bool(a > b),
        _ => invalid_binary(left, right, op),
    }
}

fn eval_string_binary(
    a: &str,
    b: &str,
    op: InfixOperator,
    left: &Object,
    right: &Object,
) -> Object {
    match op {
        InfixOperator::Plus => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Object::string(joined)
        }
        InfixOperator::Eq => Object::native_bool(a == b),
        InfixOperator::NotEq => Object::native_bool(a != b),
        _ => invalid_binary(left, right, op),
    }
}

/// Longest string `*` will build, in bytes.
const MAX_REPEAT_LEN: usize = 1 << 30;

/// `s * n`; a negative count yields the empty string.
///
/// Results longer than [`MAX_REPEAT_LEN`], or that cannot be allocated, are
/// the error `string repetition too long`.
fn repeat_string(s: &str, count: i64) -> Object {
    let count = usize::try_from(count).unwrap_or(0);
    if s.is_empty() || count == 0 {
        return Object::string("");
    }
    let Some(len) = s.len().checked_mul(count).filter(|&len| len <= MAX_REPEAT_LEN) else {
        return repetition_too_long();
    };
    let mut repeated = String::new();
    if repeated.try_reserve_exact(len).is_err() {
        return repetition_too_long();
    }
    for _ in 0..count {
        repeated.push_str(s);
    }
    Object::string(repeated)
}

#[cold]
fn invalid_binary(left: &Object, right: &Object, op: InfixOperator) -> Object {
    let (l, r) = (left.object_type(), right.object_type());
    if l == r {
        unknown_infix_operator(l, op, r)
    } else {
        type_mismatch(l, op, r)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn int(n: i64) -> Object {
        Object::Integer(n)
    }

    #[test]
    fn integer_arithmetic() {
        assert_eq!(evaluate_binary(&int(2), &int(3), InfixOperator::Plus), int(5));
        assert_eq!(evaluate_binary(&int(2), &int(3), InfixOperator::Minus), int(-1));
        assert_eq!(evaluate_binary(&int(2), &int(3), InfixOperator::Asterisk), int(6));
        assert_eq!(evaluate_binary(&int(-7), &int(2), InfixOperator::Slash), int(-3));
    }

    #[test]
    fn integer_arithmetic_wraps() {
        assert_eq!(
            evaluate_binary(&int(i64::MAX), &int(1), InfixOperator::Plus),
            int(i64::MIN)
        );
        assert_eq!(
            evaluate_binary(&int(i64::MIN), &int(-1), InfixOperator::Slash),
            int(i64::MIN)
        );
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(
            evaluate_binary(&int(1), &int(0), InfixOperator::Slash),
            Object::error("division by zero")
        );
    }

    #[test]
    fn boolean_ordering() {
        let (t, f) = (Object::TRUE, Object::FALSE);
        assert_eq!(evaluate_binary(&f, &t, InfixOperator::Lt), Object::TRUE);
        assert_eq!(evaluate_binary(&t, &f, InfixOperator::Lt), Object::FALSE);
        assert_eq!(evaluate_binary(&t, &f, InfixOperator::Gt), Object::TRUE);
        assert_eq!(evaluate_binary(&t, &t, InfixOperator::Gt), Object::FALSE);
        assert_eq!(
            evaluate_binary(&t, &f, InfixOperator::Plus),
            Object::error("unknown operator: BOOLEAN + BOOLEAN")
        );
    }

    #[test]
    fn string_operators() {
        let (a, b) = (Object::string("Hello"), Object::string(" World"));
        assert_eq!(
            evaluate_binary(&a, &b, InfixOperator::Plus),
            Object::string("Hello World")
        );
        assert_eq!(evaluate_binary(&a, &a, InfixOperator::Eq), Object::TRUE);
        assert_eq!(evaluate_binary(&a, &b, InfixOperator::NotEq), Object::TRUE);
        assert_eq!(
            evaluate_binary(&a, &b, InfixOperator::Minus),
            Object::error("unknown operator: STRING - STRING")
        );
    }

    #[test]
    fn string_repetition() {
        let s = Object::string("ab");
        assert_eq!(
            evaluate_binary(&s, &int(3), InfixOperator::Asterisk),
            Object::string("ababab")
        );
        assert_eq!(
            evaluate_binary(&s, &int(-2), InfixOperator::Asterisk),
            Object::string("")
        );
        assert_eq!(
            evaluate_binary(&s, &int(2), InfixOperator::Plus),
            Object::error("type mismatch: STRING + INTEGER")
        );
    }

    #[test]
    fn string_repetition_is_bounded() {
        let s = Object::string("ab");
        let too_long = Object::error("string repetition too long");
        assert_eq!(evaluate_binary(&s, &int(i64::MAX), InfixOperator::Asterisk), too_long);
        assert_eq!(
            evaluate_binary(&s, &int(1 << 62), InfixOperator::Asterisk),
            too_long
        );
        assert_eq!(
            evaluate_binary(&Object::string("a"), &int((1 << 30) + 1), InfixOperator::Asterisk),
            too_long
        );
        // The empty string repeats any number of times.
        assert_eq!(
            evaluate_binary(&Object::string(""), &int(i64::MAX), InfixOperator::Asterisk),
            Object::string("")
        );
    }

    #[test]
    fn mismatched_operands() {
        assert_eq!(
            evaluate_binary(&int(5), &Object::TRUE, InfixOperator::Plus),
            Object::error("type mismatch: INTEGER + BOOLEAN")
        );
        assert_eq!(
            evaluate_binary(&Object::NULL, &Object::NULL, InfixOperator::Eq),
            Object::error("unknown operator: NULL == NULL")
        );
    }
}
