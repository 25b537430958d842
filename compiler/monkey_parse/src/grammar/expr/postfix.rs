//! Infix rules: binary operators, calls, indexing and member access.

use monkey_ir::{Expression, InfixOperator, Token, TokenKind};

use crate::grammar::Precedence;
use crate::{ParseError, ParseResult, Parser};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// `<left> <op> <right>`, left-associative.
    pub(crate) fn parse_infix_expression(&mut self, left: Expression) -> ParseResult<Expression> {
        let kind = self.cursor.current_kind();
        let operator = match kind {
            TokenKind::Plus => InfixOperator::Plus,
            TokenKind::Minus => InfixOperator::Minus,
            TokenKind::Asterisk => InfixOperator::Asterisk,
            TokenKind::Slash => InfixOperator::Slash,
            TokenKind::Lt => InfixOperator::Lt,
            TokenKind::Gt => InfixOperator::Gt,
            TokenKind::Eq => InfixOperator::Eq,
            TokenKind::NotEq => InfixOperator::NotEq,
            // Only registered for the kinds above.
            other => return Err(ParseError::NoPrefixParseFn(other)),
        };
        let precedence = self.infix_precedence(kind);
        self.cursor.advance();
        let right = self.parse_expression(precedence)?;
        Ok(Expression::infix(operator, left, right))
    }

    /// `<callee>(<args>)`
    pub(crate) fn parse_call_expression(&mut self, callee: Expression) -> ParseResult<Expression> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Ok(Expression::call(callee, arguments))
    }

    /// `<target>[<index>]`
    pub(crate) fn parse_index_expression(&mut self, target: Expression) -> ParseResult<Expression> {
        self.cursor.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect_peek(TokenKind::RBracket)?;
        Ok(Expression::index(target, index))
    }

    /// `<target>.<name>`, sugar for `<target>["<name>"]`.
    pub(crate) fn parse_member_expression(
        &mut self,
        target: Expression,
    ) -> ParseResult<Expression> {
        let name = self.cursor.expect_peek(TokenKind::Ident)?.literal.clone();
        Ok(Expression::index(target, Expression::StringLiteral(name)))
    }
}
