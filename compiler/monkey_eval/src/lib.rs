//! Tree-walking evaluator for Monkey.
//!
//! Walks a parsed [`monkey_ir::Program`] against an [`Environment`] and
//! produces an [`Object`]. Evaluation errors are values
//! ([`Object::Error`]); only fatal conditions surface as [`EvalFault`].

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod object;
mod operators;
mod print_handler;
mod unary_operators;

pub use builtins::lookup as lookup_builtin;
pub use environment::{Environment, LocalScope, Scope};
pub use interpreter::{
    EvalFault, EvalResult, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH,
};
pub use object::{Builtin, BuiltinFn, Function, HashKey, HashPair, Heap, Object, ObjectType};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;

#[cfg(test)]
mod tests;
