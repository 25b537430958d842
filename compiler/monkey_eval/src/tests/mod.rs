//! Evaluator tests, driven from source text.
//!
//! - `expressions`: literals, operators and conditionals
//! - `statements`: `let`, `return` and sequencing
//! - `functions`: closures, calls and the call-depth limit
//! - `collections`: arrays, hashes and indexing
//! - `errors`: error objects and their propagation
//! - `console`: `println`/`printf` output
//! - `property`: integer arithmetic against host arithmetic

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod collections;
mod expressions;

use crate::{buffer_handler, Environment, EvalResult, InterpreterBuilder, Object};

/// Parse and evaluate `source` in a fresh environment, discarding output.
pub(super) fn try_eval(source: &str) -> EvalResult {
    let output = monkey_parse::parse(monkey_lexer::Lexer::new(source));
    assert!(
        !output.has_errors(),
        "{source}: {:?}",
        output.error_messages()
    );
    let mut interpreter = InterpreterBuilder::new()
        .print_handler(buffer_handler())
        .build();
    interpreter.eval_program(&output.program, &Environment::new())
}

pub(super) fn eval(source: &str) -> Object {
    try_eval(source).expect("evaluation fault")
}

pub(super) fn error(message: &str) -> Object {
    Object::error(message)
}
