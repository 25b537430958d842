//! Error recovery for the statement loop.
//!
//! After a failed statement the parser skips ahead to a statement boundary so
//! later statements still parse and report their own errors.

use monkey_ir::{Token, TokenKind};

use crate::cursor::Cursor;

/// A set of token kinds as a bitset over the kind's discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind as u8))
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind as u8)) != 0
    }
}

/// Tokens that end a statement.
pub const STMT_END: TokenSet = TokenSet::new()
    .with(TokenKind::Semicolon)
    .with(TokenKind::Eof);

/// Tokens that begin a fresh statement (or end the input).
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Let)
    .with(TokenKind::Return)
    .with(TokenKind::Eof);

/// Skip tokens until the current one ends a statement or the next one
/// starts a new statement, at brace depth `depth` or shallower.
///
/// `depth` is the cursor's depth where the failed statement began, so
/// boundaries inside a block the statement opened are skipped along with the
/// block. The statement loop's own `advance` then lands on the next
/// statement. Returns the number of tokens skipped.
pub fn synchronize<I: Iterator<Item = Token>>(cursor: &mut Cursor<I>, depth: usize) -> usize {
    let mut skipped = 0;
    while !at_boundary(cursor, depth) {
        cursor.advance();
        skipped += 1;
    }
    skipped
}

fn at_boundary<I: Iterator<Item = Token>>(cursor: &Cursor<I>, depth: usize) -> bool {
    if cursor.is_at_end() {
        return true;
    }
    cursor.depth() <= depth
        && (STMT_END.contains(cursor.current_kind()) || STMT_START.contains(cursor.peek_kind()))
}
