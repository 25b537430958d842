//! Parse error types.

use monkey_ir::TokenKind;

/// A structural problem found while parsing.
///
/// The `Display` text is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The next token was not the one the grammar requires here.
    #[error("expected next token to be {expected}, got {found} instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// The token cannot begin an expression.
    #[error("no prefix parse function for {0} found")]
    NoPrefixParseFn(TokenKind),

    /// Integer literal out of `i64` range.
    #[error("could not parse {0:?} as integer")]
    InvalidInteger(String),
}
