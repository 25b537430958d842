//! Prefix rules: everything that can begin an expression.

use monkey_ir::{Expression, Identifier, PrefixOperator, Token, TokenKind};

use crate::grammar::Precedence;
use crate::{ParseError, ParseResult, Parser};

impl<I: Iterator<Item = Token>> Parser<I> {
    #[allow(clippy::unnecessary_wraps)] // signature fixed by the prefix table
    pub(crate) fn parse_identifier(&mut self) -> ParseResult<Expression> {
        Ok(Expression::identifier(self.cursor.current().literal.clone()))
    }

    pub(crate) fn parse_integer_literal(&mut self) -> ParseResult<Expression> {
        let literal = &self.cursor.current().literal;
        literal
            .parse::<i64>()
            .map(Expression::IntegerLiteral)
            .map_err(|_| ParseError::InvalidInteger(literal.clone()))
    }

    #[allow(clippy::unnecessary_wraps)] // signature fixed by the prefix table
    pub(crate) fn parse_string_literal(&mut self) -> ParseResult<Expression> {
        Ok(Expression::StringLiteral(self.cursor.current().literal.clone()))
    }

    #[allow(clippy::unnecessary_wraps)] // signature fixed by the prefix table
    pub(crate) fn parse_boolean_literal(&mut self) -> ParseResult<Expression> {
        Ok(Expression::BooleanLiteral(self.cursor.check(TokenKind::True)))
    }

    /// `!x`, `-x`
    pub(crate) fn parse_prefix_expression(&mut self) -> ParseResult<Expression> {
        let operator = match self.cursor.current_kind() {
            TokenKind::Bang => PrefixOperator::Bang,
            TokenKind::Minus => PrefixOperator::Minus,
            other => return Err(ParseError::NoPrefixParseFn(other)),
        };
        self.cursor.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Ok(Expression::prefix(operator, right))
    }

    /// `( <expr> )`
    pub(crate) fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.cursor.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect_peek(TokenKind::RParen)?;
        Ok(expr)
    }

    /// `if (<cond>) { ... } [else { ... }]`
    pub(crate) fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        self.cursor.expect_peek(TokenKind::LParen)?;
        self.cursor.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect_peek(TokenKind::RParen)?;

        self.cursor.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.cursor.peek_is(TokenKind::Else) {
            self.cursor.advance();
            self.cursor.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// `fn(<params>) { ... }`
    pub(crate) fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        self.cursor.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_comma_separated(TokenKind::RParen, Self::parse_parameter)?;
        self.cursor.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;
        Ok(Expression::function(parameters, body))
    }

    fn parse_parameter(&mut self) -> ParseResult<Identifier> {
        let current = self.cursor.current();
        if current.kind == TokenKind::Ident {
            Ok(Identifier::new(current.literal.clone()))
        } else {
            Err(ParseError::UnexpectedToken {
                expected: TokenKind::Ident,
                found: current.kind,
            })
        }
    }

    /// `[<expr>, ...]`
    pub(crate) fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Ok(Expression::ArrayLiteral(elements))
    }

    /// `{<key>: <value>, ...}`
    pub(crate) fn parse_hash_literal(&mut self) -> ParseResult<Expression> {
        let pairs = self.parse_comma_separated(TokenKind::RBrace, Self::parse_hash_pair)?;
        Ok(Expression::HashLiteral(pairs))
    }

    fn parse_hash_pair(&mut self) -> ParseResult<(Expression, Expression)> {
        let key = self.parse_expression(Precedence::Lowest)?;
        self.cursor.expect_peek(TokenKind::Colon)?;
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        Ok((key, value))
    }
}
