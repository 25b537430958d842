//! Iterative teardown.
//!
//! The derived drop glue recurses once per nesting level, which overflows
//! the host stack on trees the parser builds without trouble. `Drop` for
//! [`Expression`] instead detaches every boxed child onto a work-list, so
//! each node is dropped with its children already gone.

use std::mem;
use std::rc::Rc;

use super::{BlockStatement, Expression, Statement};

impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_children(&mut expr, &mut pending);
        }
    }
}

/// Leaf left behind in a box whose contents were moved to the work-list.
const HOLLOW: Expression = Expression::BooleanLiteral(false);

fn detach_children(expr: &mut Expression, pending: &mut Vec<Expression>) {
    match expr {
        Expression::Identifier(_)
        | Expression::IntegerLiteral(_)
        | Expression::StringLiteral(_)
        | Expression::BooleanLiteral(_) => {}
        Expression::Prefix { right, .. } => pending.push(mem::replace(&mut **right, HOLLOW)),
        Expression::Infix { left, right, .. } => {
            pending.push(mem::replace(&mut **left, HOLLOW));
            pending.push(mem::replace(&mut **right, HOLLOW));
        }
        Expression::If {
            condition,
            consequence,
            alternative,
        } => {
            pending.push(mem::replace(&mut **condition, HOLLOW));
            detach_block(consequence, pending);
            if let Some(alt) = alternative {
                detach_block(alt, pending);
            }
        }
        // A body still shared with a runtime function is torn down by its
        // last owner.
        Expression::FunctionLiteral { body, .. } => {
            if let Some(body) = Rc::get_mut(body) {
                detach_block(body, pending);
            }
        }
        Expression::Call { callee, arguments } => {
            pending.push(mem::replace(&mut **callee, HOLLOW));
            pending.append(arguments);
        }
        Expression::ArrayLiteral(elements) => pending.append(elements),
        Expression::HashLiteral(pairs) => {
            for (key, value) in pairs.drain(..) {
                pending.push(key);
                pending.push(value);
            }
        }
        Expression::Index { target, index } => {
            pending.push(mem::replace(&mut **target, HOLLOW));
            pending.push(mem::replace(&mut **index, HOLLOW));
        }
    }
}

fn detach_block(block: &mut BlockStatement, pending: &mut Vec<Expression>) {
    let mut statements = mem::take(&mut block.statements);
    while let Some(stmt) = statements.pop() {
        match stmt {
            Statement::Let(stmt) => pending.push(stmt.value),
            Statement::Return(stmt) => pending.push(stmt.value),
            Statement::Expression(expr) => pending.push(expr),
            Statement::Block(mut inner) => statements.append(&mut inner.statements),
        }
    }
}
