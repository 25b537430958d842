//! Pratt parser for Monkey.
//!
//! Turns a token stream into a [`Program`]. Parsing never fails outright:
//! each malformed statement is dropped, its [`ParseError`] recorded, and the
//! parser resumes at the next statement boundary.
//!
//! Expression parsing is table-driven. Each parser instance owns a prefix
//! table and an infix table keyed by [`TokenKind`]; see `grammar/mod.rs`.

mod cursor;
mod error;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::ParseError;
pub use grammar::Precedence;

use monkey_ir::{Program, Token, TokenKind};
use rustc_hash::FxHashMap;

use grammar::{InfixParseFn, PrefixParseFn};

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// A parsed program plus the errors met along the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error messages in the order they were found.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Parser state.
pub struct Parser<I: Iterator<Item = Token>> {
    cursor: Cursor<I>,
    prefix_fns: FxHashMap<monkey_ir::TokenKind, PrefixParseFn<I>>,
    infix_fns: FxHashMap<monkey_ir::TokenKind, (Precedence, InfixParseFn<I>)>,
    errors: Vec<ParseError>,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Create a parser over any token source.
    pub fn new<T>(tokens: T) -> Self
    where
        T: IntoIterator<Item = Token, IntoIter = I>,
    {
        let mut parser = Parser {
            cursor: Cursor::new(tokens.into_iter()),
            prefix_fns: FxHashMap::default(),
            infix_fns: FxHashMap::default(),
            errors: Vec::new(),
        };
        parser.register_rules();
        parser
    }

    /// Parse statements until `EOF`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();

        while !self.cursor.is_at_end() {
            // Depth outside the statement, even when it opens with `{`.
            let depth = self
                .cursor
                .depth()
                .saturating_sub(usize::from(self.cursor.check(TokenKind::LBrace)));
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    let skipped = recovery::synchronize(&mut self.cursor, depth);
                    tracing::debug!(%error, skipped, "recovered from statement error");
                    self.errors.push(error);
                }
            }
            self.cursor.advance();
        }

        ParseOutput {
            program: Program::new(statements),
            errors: self.errors,
        }
    }
}

/// Parse a complete token stream.
pub fn parse<T>(tokens: T) -> ParseOutput
where
    T: IntoIterator<Item = Token>,
{
    Parser::new(tokens).parse_program()
}

#[cfg(test)]
mod tests;
