//! Error messages and recovery.

use monkey_ir::TokenKind;
use pretty_assertions::assert_eq;

use super::parse_source;
use crate::ParseError;

#[test]
fn let_statement_errors() {
    let output = parse_source("let x 5;\nlet = 10;\nlet 838383;");
    assert_eq!(
        output.error_messages(),
        vec![
            "expected next token to be =, got INT instead",
            "expected next token to be IDENT, got = instead",
            "expected next token to be IDENT, got INT instead",
        ]
    );
    assert!(output.program.is_empty());
}

#[test]
fn missing_prefix_rule() {
    let output = parse_source("5 + ;");
    assert_eq!(
        output.errors,
        vec![ParseError::NoPrefixParseFn(TokenKind::Semicolon)]
    );
    assert_eq!(
        output.error_messages(),
        vec!["no prefix parse function for ; found"]
    );
}

#[test]
fn illegal_token_has_no_prefix_rule() {
    let output = parse_source("@");
    assert_eq!(
        output.error_messages(),
        vec!["no prefix parse function for ILLEGAL found"]
    );
}

#[test]
fn integer_out_of_range() {
    let output = parse_source("let big = 99999999999999999999;");
    assert_eq!(
        output.error_messages(),
        vec!["could not parse \"99999999999999999999\" as integer"]
    );
}

#[test]
fn unclosed_group() {
    let output = parse_source("(1 + 2");
    assert_eq!(
        output.error_messages(),
        vec!["expected next token to be ), got EOF instead"]
    );
}

#[test]
fn hash_literal_needs_colon() {
    let output = parse_source("{\"a\" 1}");
    assert_eq!(
        output.error_messages(),
        vec!["expected next token to be :, got INT instead"]
    );
}

#[test]
fn hash_literal_needs_separator() {
    let output = parse_source("{\"a\": 1 \"b\": 2}");
    assert_eq!(
        output.error_messages(),
        vec!["expected next token to be }, got STRING instead"]
    );
}

#[test]
fn unclosed_block() {
    let output = parse_source("fn(x) { x");
    assert_eq!(
        output.error_messages(),
        vec!["expected next token to be }, got EOF instead"]
    );
}

#[test]
fn member_access_needs_name() {
    let output = parse_source("a.1");
    assert_eq!(
        output.error_messages(),
        vec!["expected next token to be IDENT, got INT instead"]
    );
}

#[test]
fn recovery_keeps_later_statements() {
    let output = parse_source("let x = ; let y = 2; y");
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.program.to_string(), "let y = 2; y");
}

#[test]
fn recovery_after_error_inside_function_body() {
    let output = parse_source("let f = fn(x) { let = 1 }; let g = 3;");
    assert_eq!(
        output.error_messages(),
        vec!["expected next token to be IDENT, got = instead"]
    );
    assert_eq!(output.program.to_string(), "let g = 3;");
}

#[test]
fn recovery_skips_the_rest_of_a_broken_body() {
    let output = parse_source("let f = fn() { let = 5; x }; let y = 2; y");
    assert_eq!(
        output.error_messages(),
        vec!["expected next token to be IDENT, got = instead"]
    );
    assert_eq!(output.program.to_string(), "let y = 2; y");
}

#[test]
fn recovery_inside_nested_blocks() {
    let source = "if (a) { if (b) { let = 1; 2; } 3; } let z = 4; {1: ; 2}; 5";
    let output = parse_source(source);
    assert_eq!(
        output.error_messages(),
        vec![
            "expected next token to be IDENT, got = instead",
            "no prefix parse function for ; found",
        ]
    );
    assert_eq!(output.program.to_string(), "let z = 4; 5");
}
