//! Prefix operators.

use monkey_ir::PrefixOperator;

use crate::errors::unknown_prefix_operator;
use crate::object::Object;

/// Apply `op` to an evaluated, non-error operand.
pub fn evaluate_unary(value: &Object, op: PrefixOperator) -> Object {
    match (value, op) {
        (_, PrefixOperator::Bang) => Object::native_bool(!value.is_truthy()),
        // Fresh value; `i64::MIN` negates to itself.
        (Object::Integer(n), PrefixOperator::Minus) => Object::Integer(n.wrapping_neg()),
        (_, PrefixOperator::Minus) => unknown_prefix_operator(op, value.object_type()),
    }
}
