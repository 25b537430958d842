//! Debug commands: `lex` and `parse` for inspecting the front end.

use monkey_ir::TokenKind;

use super::read_file;
use crate::shell::write_parse_errors;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    let tokens = monkey_lexer::lex(&content);

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        if token.kind == TokenKind::Eof {
            println!("  {}", token.kind);
        } else {
            println!("  {:<8} {:?}", token.kind.to_string(), token.literal);
        }
    }
}

/// Parse a file and display each statement's canonical rendering.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let output = monkey_parse::parse(monkey_lexer::Lexer::new(&content));

    println!("Parse result for '{path}':");
    println!("  Statements: {}", output.program.statements.len());
    println!("  Errors: {}", output.errors.len());

    if !output.program.is_empty() {
        println!();
        println!("Statements:");
        for stmt in &output.program.statements {
            println!("  {stmt}");
        }
    }

    if output.has_errors() {
        println!();
        println!("Errors:");
        // Stdout write failures here are not actionable.
        let _ = write_parse_errors(&mut std::io::stdout(), &output.error_messages());
        std::process::exit(1);
    }
}
