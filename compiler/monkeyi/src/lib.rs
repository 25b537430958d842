//! The Monkey shell.
//!
//! Drives the pipeline source → tokens → [`monkey_ir::Program`] → object for
//! the `monkey` binary: an interactive REPL, a file runner, and token/AST
//! dumps. The loop functions in [`shell`] are generic over their reader and
//! writer so they can run against in-memory buffers.

use std::sync::Once;

pub mod commands;
pub mod shell;

pub use shell::{eval_line, run_source, start_repl, ShellError, PROMPT};

static TRACING_INIT: Once = Once::new();

/// Install a log subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once. Logs go to stderr so they never mix with
/// program output, e.g. `RUST_LOG=monkey_parse=debug monkey run f.monkey`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
