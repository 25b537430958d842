//! Token cursor with one token of lookahead.
//!
//! Pulls lazily from any token source. Once the source is exhausted the
//! cursor behaves as if it were followed by an endless run of `EOF`, so every
//! loop in the grammar can use `EOF` as its stop condition. The cursor also
//! counts unclosed braces so recovery can find the end of an enclosing block.

use monkey_ir::{Token, TokenKind};

use crate::ParseError;

pub struct Cursor<I> {
    tokens: I,
    current: Token,
    peek: Token,
    /// `{` minus `}` among the tokens that have been current, never below 0.
    depth: usize,
}

impl<I: Iterator<Item = Token>> Cursor<I> {
    pub fn new(mut tokens: I) -> Self {
        let current = tokens.next().unwrap_or_else(Token::eof);
        let peek = tokens.next().unwrap_or_else(Token::eof);
        let mut cursor = Cursor {
            tokens,
            current,
            peek,
            depth: 0,
        };
        cursor.track_depth();
        cursor
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek.kind
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    #[inline]
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Brace nesting at the current token. A `{` counts from the moment it is
    /// current, a `}` once it is current.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Move to the next token, returning the one just left.
    pub fn advance(&mut self) -> Token {
        let next = self.tokens.next().unwrap_or_else(Token::eof);
        let peek = std::mem::replace(&mut self.peek, next);
        let left = std::mem::replace(&mut self.current, peek);
        self.track_depth();
        left
    }

    #[inline]
    fn track_depth(&mut self) {
        match self.current.kind {
            TokenKind::LBrace => self.depth += 1,
            TokenKind::RBrace => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
    }

    /// Advance only if the next token has the given kind.
    ///
    /// On success the matched token becomes current. On failure nothing is
    /// consumed.
    #[inline]
    pub fn expect_peek(&mut self, kind: TokenKind) -> Result<&Token, ParseError> {
        if self.peek_is(kind) {
            self.advance();
            Ok(&self.current)
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, expected: TokenKind) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.peek.kind,
        }
    }
}
