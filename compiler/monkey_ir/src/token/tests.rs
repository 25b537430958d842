use super::*;

#[test]
fn display_names_match_diagnostics() {
    assert_eq!(TokenKind::Ident.to_string(), "IDENT");
    assert_eq!(TokenKind::RParen.to_string(), ")");
    assert_eq!(TokenKind::NotEq.to_string(), "!=");
    assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
    assert_eq!(TokenKind::Eof.to_string(), "EOF");
}

#[test]
fn token_debug_shows_kind_and_literal() {
    let tok = Token::new(TokenKind::Int, "42");
    assert_eq!(format!("{tok:?}"), "Int(\"42\")");
    assert_eq!(Token::eof().literal, "");
}

#[test]
fn kinds_are_hashable_keys() {
    use std::collections::HashSet;
    let set: HashSet<_> = [TokenKind::Plus, TokenKind::Plus, TokenKind::Minus]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}
