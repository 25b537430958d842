//! Tree-walking evaluator.
//!
//! Language errors are ordinary [`Object::Error`] values and travel up
//! through `Ok`; every recursive evaluation is checked and an error stops
//! the enclosing sequence. The `Err` channel carries [`EvalFault`], which
//! aborts evaluation outright.

mod builder;
mod function_call;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use monkey_ir::{BlockStatement, Expression, Program, Statement};
use monkey_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::builtins;
use crate::environment::Environment;
use crate::errors::{identifier_not_found, index_not_supported, unusable_hash_key};
use crate::object::{HashPair, Object};
use crate::operators::evaluate_binary;
use crate::print_handler::SharedPrintHandler;
use crate::unary_operators::evaluate_unary;

/// Conditions that end evaluation instead of producing a value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalFault {
    #[error("maximum call depth of {max_depth} exceeded")]
    RecursionLimit { max_depth: usize },
}

pub type EvalResult = Result<Object, EvalFault>;

/// Return an error object to the caller; otherwise yield the value.
macro_rules! propagate {
    ($value:expr) => {{
        let value = $value;
        if value.is_error() {
            return Ok(value);
        }
        value
    }};
}

/// Evaluator state: where output goes and how deep calls may nest.
pub struct Interpreter {
    print_handler: SharedPrintHandler,
    max_call_depth: usize,
    call_depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl Interpreter {
    /// An interpreter printing to stdout with the default depth limit.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    /// Evaluate a program in `env`.
    ///
    /// A top-level `return` ends the program with its value. An empty
    /// program evaluates to `null`.
    pub fn eval_program(&mut self, program: &Program, env: &Environment) -> EvalResult {
        let mut result = Object::NULL;
        for stmt in &program.statements {
            result = self.eval_statement(stmt, env)?;
            if let Object::ReturnValue(value) = &result {
                return Ok(Object::clone(value));
            }
            if result.is_error() {
                return Ok(result);
            }
        }
        Ok(result)
    }

    /// Evaluate a block. A `return` inside is passed up still wrapped so
    /// that enclosing blocks stop too.
    pub fn eval_block(&mut self, block: &BlockStatement, env: &Environment) -> EvalResult {
        let mut result = Object::NULL;
        for stmt in &block.statements {
            result = self.eval_statement(stmt, env)?;
            if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
                return Ok(result);
            }
        }
        Ok(result)
    }

    pub fn eval_statement(&mut self, stmt: &Statement, env: &Environment) -> EvalResult {
        match stmt {
            Statement::Let(let_stmt) => {
                let value = propagate!(self.eval_expression(&let_stmt.value, env)?);
                env.set(let_stmt.name.name.clone(), value.clone());
                Ok(value)
            }
            Statement::Return(ret) => {
                let value = propagate!(self.eval_expression(&ret.value, env)?);
                Ok(Object::return_value(value))
            }
            Statement::Expression(expr) => self.eval_expression(expr, env),
            Statement::Block(block) => self.eval_block(block, env),
        }
    }

    /// Evaluate an expression, growing the native stack when needed.
    pub fn eval_expression(&mut self, expr: &Expression, env: &Environment) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expression_inner(expr, env))
    }

    fn eval_expression_inner(&mut self, expr: &Expression, env: &Environment) -> EvalResult {
        match expr {
            Expression::Identifier(ident) => Ok(eval_identifier(&ident.name, env)),
            Expression::IntegerLiteral(value) => Ok(Object::Integer(*value)),
            Expression::StringLiteral(value) => Ok(Object::string(value.as_str())),
            Expression::BooleanLiteral(value) => Ok(Object::native_bool(*value)),
            Expression::Prefix { operator, right } => {
                let right = propagate!(self.eval_expression(right, env)?);
                Ok(evaluate_unary(&right, *operator))
            }
            Expression::Infix {
                operator,
                left,
                right,
            } => {
                let left = propagate!(self.eval_expression(left, env)?);
                let right = propagate!(self.eval_expression(right, env)?);
                Ok(evaluate_binary(&left, &right, *operator))
            }
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = propagate!(self.eval_expression(condition, env)?);
                if condition.is_truthy() {
                    self.eval_block(consequence, env)
                } else if let Some(alternative) = alternative {
                    self.eval_block(alternative, env)
                } else {
                    Ok(Object::NULL)
                }
            }
            Expression::FunctionLiteral { parameters, body } => Ok(Object::function(
                parameters.clone(),
                body.clone(),
                env.clone(),
            )),
            Expression::Call { callee, arguments } => {
                let callee = propagate!(self.eval_expression(callee, env)?);
                let mut args = Vec::with_capacity(arguments.len());
                for arg in arguments {
                    args.push(propagate!(self.eval_expression(arg, env)?));
                }
                self.apply_function(&callee, args)
            }
            Expression::ArrayLiteral(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(propagate!(self.eval_expression(element, env)?));
                }
                Ok(Object::array(values))
            }
            Expression::HashLiteral(pairs) => {
                let mut map = FxHashMap::default();
                map.reserve(pairs.len());
                for (key_expr, value_expr) in pairs {
                    let key = propagate!(self.eval_expression(key_expr, env)?);
                    let Some(hash_key) = key.hash_key() else {
                        return Ok(unusable_hash_key(key.object_type()));
                    };
                    let value = propagate!(self.eval_expression(value_expr, env)?);
                    map.insert(hash_key, HashPair { key, value });
                }
                Ok(Object::hash(map))
            }
            Expression::Index { target, index } => {
                let target = propagate!(self.eval_expression(target, env)?);
                let index = propagate!(self.eval_expression(index, env)?);
                Ok(eval_index(&target, &index))
            }
        }
    }
}

/// Environment chain first, then builtins.
fn eval_identifier(name: &str, env: &Environment) -> Object {
    if let Some(value) = env.get(name) {
        return value;
    }
    match builtins::lookup(name) {
        Some(builtin) => Object::Builtin(builtin),
        None => identifier_not_found(name),
    }
}

/// `target[index]`. Misses and out-of-range positions are `null`.
fn eval_index(target: &Object, index: &Object) -> Object {
    match (target, index) {
        (Object::Array(elements), Object::Integer(i)) => usize::try_from(*i)
            .ok()
            .and_then(|i| elements.get(i))
            .cloned()
            .unwrap_or(Object::NULL),
        (Object::Hash(pairs), key) => match key.hash_key() {
            Some(hash_key) => pairs
                .get(&hash_key)
                .map_or(Object::NULL, |pair| pair.value.clone()),
            None => unusable_hash_key(key.object_type()),
        },
        _ => index_not_supported(target.object_type()),
    }
}
