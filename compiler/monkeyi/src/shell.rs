//! Read-eval-print plumbing shared by `repl` and `run`.

use std::io::{self, BufRead, Write};

use monkey_eval::{Environment, EvalFault, Interpreter, Object};

pub const PROMPT: &str = ">> ";

/// Failures that end a shell session.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Fault(#[from] EvalFault),
}

/// What evaluating one piece of source produced.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Parse errors were reported and nothing ran.
    Rejected,
    /// The source held no statements.
    Empty,
    /// The program ran; its result was printed.
    Value(Object),
}

impl Outcome {
    /// Parse errors, or a program that evaluated to an error object.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Rejected | Outcome::Value(Object::Error(_)))
    }
}

/// Parse and evaluate `source` in `env`, writing parse errors or the
/// result's inspection to `out`.
pub fn eval_line<W: Write>(
    source: &str,
    interpreter: &mut Interpreter,
    env: &Environment,
    out: &mut W,
) -> Result<Outcome, ShellError> {
    let output = monkey_parse::parse(monkey_lexer::Lexer::new(source));
    if output.has_errors() {
        tracing::debug!(count = output.errors.len(), "rejected input");
        write_parse_errors(out, &output.error_messages())?;
        return Ok(Outcome::Rejected);
    }
    if output.program.is_empty() {
        return Ok(Outcome::Empty);
    }

    let value = interpreter.eval_program(&output.program, env)?;
    writeln!(out, "{value}")?;
    Ok(Outcome::Value(value))
}

/// Evaluate a whole program in a fresh environment.
pub fn run_source<W: Write>(
    source: &str,
    interpreter: &mut Interpreter,
    out: &mut W,
) -> Result<Outcome, ShellError> {
    eval_line(source, interpreter, &Environment::new(), out)
}

/// Prompt, read a line, evaluate it, repeat until end of input.
///
/// All lines share one environment, so bindings carry over.
pub fn start_repl<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    interpreter: &mut Interpreter,
) -> Result<(), ShellError> {
    let env = Environment::new();
    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        eval_line(&line, interpreter, &env, out)?;
    }
}

/// One tab-indented line per message.
pub fn write_parse_errors<W: Write>(out: &mut W, messages: &[String]) -> io::Result<()> {
    for message in messages {
        writeln!(out, "\t{message}")?;
    }
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use monkey_eval::{buffer_handler, InterpreterBuilder};
    use pretty_assertions::assert_eq;

    use super::*;

    fn interpreter() -> Interpreter {
        InterpreterBuilder::new()
            .print_handler(buffer_handler())
            .build()
    }

    fn eval_to_string(source: &str) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = run_source(source, &mut interpreter(), &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_result_inspection() {
        let (outcome, out) = eval_to_string("let a = [1, 2]; a[1] * 10");
        assert_eq!(outcome, Outcome::Value(Object::Integer(20)));
        assert_eq!(out, "20\n");
        assert!(!outcome.is_failure());
    }

    #[test]
    fn parse_errors_are_tab_indented() {
        let (outcome, out) = eval_to_string("let = 1; let x 2;");
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(
            out,
            "\texpected next token to be IDENT, got = instead\n\
             \texpected next token to be =, got INT instead\n"
        );
        assert!(outcome.is_failure());
    }

    #[test]
    fn empty_source_prints_nothing() {
        let (outcome, out) = eval_to_string("   \n");
        assert_eq!(outcome, Outcome::Empty);
        assert_eq!(out, "");
    }

    #[test]
    fn error_results_count_as_failure() {
        let (outcome, out) = eval_to_string("1 + true");
        assert!(outcome.is_failure());
        assert_eq!(out, "ERROR: type mismatch: INTEGER + BOOLEAN\n");
    }

    #[test]
    fn faults_end_evaluation() {
        let mut interpreter = InterpreterBuilder::new()
            .print_handler(buffer_handler())
            .max_call_depth(5)
            .build();
        let mut out = Vec::new();
        let result = run_source("let f = fn() { f() }; f()", &mut interpreter, &mut out);
        assert!(matches!(
            result,
            Err(ShellError::Fault(EvalFault::RecursionLimit { max_depth: 5 }))
        ));
        assert!(out.is_empty());
    }
}
