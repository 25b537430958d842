//! Expression parsing.
//!
//! `parse_expression` is the Pratt loop: run the prefix rule for the current
//! token, then keep folding infix rules into the left operand while the next
//! token binds tighter than the caller's precedence.

mod postfix;
mod primary;

use monkey_ir::{Expression, Token, TokenKind};
use monkey_stack::ensure_sufficient_stack;
use tracing::trace;

use super::Precedence;
use crate::{ParseError, ParseResult, Parser};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parse an expression binding tighter than `precedence`.
    ///
    /// Entered on the expression's first token; leaves the cursor on its last.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        ensure_sufficient_stack(|| self.parse_expression_inner(precedence))
    }

    fn parse_expression_inner(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let kind = self.cursor.current_kind();
        let Some(&prefix) = self.prefix_fns.get(&kind) else {
            return Err(ParseError::NoPrefixParseFn(kind));
        };
        trace!(%kind, ?precedence, "prefix rule");
        let mut left = prefix(self)?;

        while !self.cursor.peek_is(TokenKind::Semicolon)
            && precedence < self.infix_precedence(self.cursor.peek_kind())
        {
            let Some(&(_, infix)) = self.infix_fns.get(&self.cursor.peek_kind()) else {
                break;
            };
            self.cursor.advance();
            trace!(kind = %self.cursor.current_kind(), "infix rule");
            left = infix(self, left)?;
        }

        Ok(left)
    }

    /// Parse `item (, item)*` up to and including `end`.
    ///
    /// Entered on the opening delimiter; leaves the cursor on `end`. `item`
    /// is invoked with the cursor on the item's first token.
    pub(crate) fn parse_comma_separated<T>(
        &mut self,
        end: TokenKind,
        mut item: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.cursor.peek_is(end) {
            self.cursor.advance();
            return Ok(items);
        }

        self.cursor.advance();
        items.push(item(self)?);
        while self.cursor.peek_is(TokenKind::Comma) {
            self.cursor.advance();
            self.cursor.advance();
            items.push(item(self)?);
        }

        self.cursor.expect_peek(end)?;
        Ok(items)
    }

    /// Comma-separated expressions closed by `end`.
    pub(crate) fn parse_expression_list(&mut self, end: TokenKind) -> ParseResult<Vec<Expression>> {
        self.parse_comma_separated(end, |p| p.parse_expression(Precedence::Lowest))
    }
}
