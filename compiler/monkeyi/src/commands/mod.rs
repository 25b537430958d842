//! Command handlers for the `monkey` binary.
//!
//! Handlers print their own diagnostics and exit the process with status 1
//! on failure. Shared helpers live here.

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::{repl, run_file};

use monkey_eval::{Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

/// Settings shared by `run` and `repl`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellOptions {
    pub max_call_depth: usize,
}

impl Default for ShellOptions {
    fn default() -> Self {
        ShellOptions {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

impl ShellOptions {
    /// Parse `--max-depth=<n>` style flags. Returns the offending flag on error.
    pub fn parse<'a>(flags: impl IntoIterator<Item = &'a str>) -> Result<Self, String> {
        let mut options = ShellOptions::default();
        for flag in flags {
            match flag.strip_prefix("--max-depth=") {
                Some(value) => {
                    options.max_call_depth = value
                        .parse()
                        .map_err(|_| format!("invalid value for --max-depth: '{value}'"))?;
                }
                None => return Err(format!("unknown option '{flag}'")),
            }
        }
        Ok(options)
    }

    /// An interpreter printing to stdout with these settings.
    pub fn interpreter(&self) -> Interpreter {
        InterpreterBuilder::new()
            .max_call_depth(self.max_call_depth)
            .build()
    }
}

/// Read a source file, or print a diagnostic and exit.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
