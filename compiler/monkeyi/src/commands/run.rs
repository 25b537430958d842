//! `run` and `repl`.

use std::io;

use super::{read_file, ShellOptions};
use crate::shell::{run_source, start_repl, ShellError};

/// Run a program file. Exits with status 1 on parse errors, an error
/// result, or a fatal fault.
pub fn run_file(path: &str, options: &ShellOptions) {
    let source = read_file(path);
    let mut interpreter = options.interpreter();
    tracing::debug!(path, max_call_depth = interpreter.max_call_depth(), "running file");
    let mut stdout = io::stdout();

    match run_source(&source, &mut interpreter, &mut stdout) {
        Ok(outcome) if outcome.is_failure() => std::process::exit(1),
        Ok(_) => {}
        Err(err) => exit_with(&err),
    }
}

/// Interactive session on stdin/stdout.
pub fn repl(options: &ShellOptions) {
    let user = std::env::var("USER").unwrap_or_else(|_| "there".to_owned());
    println!("Hello {user}! This is the Monkey programming language!");
    println!("Feel free to type in commands");

    let mut interpreter = options.interpreter();
    tracing::debug!(max_call_depth = interpreter.max_call_depth(), "starting session");
    let stdin = io::stdin();
    if let Err(err) = start_repl(stdin.lock(), &mut io::stdout(), &mut interpreter) {
        exit_with(&err);
    }
}

fn exit_with(err: &ShellError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}
