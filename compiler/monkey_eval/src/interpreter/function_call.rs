//! Function application.

use super::{EvalFault, EvalResult, Interpreter};
use crate::environment::Environment;
use crate::errors::{not_a_function, wrong_arg_count};
use crate::object::{Function, Object};

impl Interpreter {
    /// Call `callee` with already-evaluated arguments.
    #[tracing::instrument(level = "debug", skip_all, fields(callee = %callee.object_type()))]
    pub fn apply_function(&mut self, callee: &Object, args: Vec<Object>) -> EvalResult {
        match callee {
            Object::Function(function) => self.call_function(function, args),
            Object::Builtin(builtin) => Ok(builtin.call(&args, &self.print_handler)),
            other => Ok(not_a_function(other.object_type())),
        }
    }

    fn call_function(&mut self, function: &Function, args: Vec<Object>) -> EvalResult {
        let want = function.parameters.len();
        if args.len() != want {
            return Ok(wrong_arg_count(args.len(), want));
        }
        self.check_recursion_limit()?;

        let call_env = Environment::enclosed(&function.env);
        for (param, arg) in function.parameters.iter().zip(args) {
            call_env.set(param.name.clone(), arg);
        }

        self.call_depth += 1;
        let result = self.eval_block(&function.body, &call_env);
        self.call_depth -= 1;

        Ok(unwrap_return_value(result?))
    }

    /// Fail once `max_call_depth` calls are already active.
    #[inline]
    pub(super) fn check_recursion_limit(&self) -> Result<(), EvalFault> {
        if self.call_depth >= self.max_call_depth {
            tracing::debug!(max_depth = self.max_call_depth, "call depth limit reached");
            return Err(EvalFault::RecursionLimit {
                max_depth: self.max_call_depth,
            });
        }
        Ok(())
    }
}

/// A `return` ends only the function it appears in.
fn unwrap_return_value(value: Object) -> Object {
    match value {
        Object::ReturnValue(inner) => Object::clone(&inner),
        other => other,
    }
}
