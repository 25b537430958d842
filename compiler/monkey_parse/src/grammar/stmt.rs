//! Statement parsing.

use monkey_ir::{
    BlockStatement, Identifier, LetStatement, ReturnStatement, Statement, Token, TokenKind,
};

use super::Precedence;
use crate::{ParseError, ParseResult, Parser};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parse one statement starting at the current token.
    ///
    /// Leaves the cursor on the statement's last token (its `;` if present).
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.cursor.current_kind() {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <ident> = <expr>[;]`
    fn parse_let_statement(&mut self) -> ParseResult<LetStatement> {
        let name = Identifier::new(self.cursor.expect_peek(TokenKind::Ident)?.literal.clone());
        self.cursor.expect_peek(TokenKind::Assign)?;
        self.cursor.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Ok(LetStatement { name, value })
    }

    /// `return <expr>[;]`
    fn parse_return_statement(&mut self) -> ParseResult<ReturnStatement> {
        self.cursor.advance();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Ok(ReturnStatement { value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();
        Ok(Statement::Expression(value))
    }

    /// `{ <stmt>* }`, entered with the cursor on `{` and left on `}`.
    pub(crate) fn parse_block_statement(&mut self) -> ParseResult<BlockStatement> {
        self.cursor.advance();
        let mut statements = Vec::new();

        while !self.cursor.check(TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(ParseError::UnexpectedToken {
                    expected: TokenKind::RBrace,
                    found: TokenKind::Eof,
                });
            }
            statements.push(self.parse_statement()?);
            self.cursor.advance();
        }

        Ok(BlockStatement::new(statements))
    }

    #[inline]
    fn skip_optional_semicolon(&mut self) {
        if self.cursor.peek_is(TokenKind::Semicolon) {
            self.cursor.advance();
        }
    }
}
