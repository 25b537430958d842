//! `InterpreterBuilder` for configuring an [`Interpreter`].

use super::Interpreter;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Calls allowed to be active at once unless configured otherwise.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// Builder for [`Interpreter`].
pub struct InterpreterBuilder {
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        InterpreterBuilder::new()
    }
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self {
            print_handler: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Where `println`/`printf` write. Default is stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Maximum number of nested user-function calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
        }
    }
}
