//! Grammar rules.
//!
//! - `stmt.rs`: `let`, `return`, expression statements, blocks
//! - `expr/mod.rs`: the Pratt loop and the shared comma-separated list routine
//! - `expr/primary.rs`: prefix rules (literals, unary operators, grouping,
//!   `if`, function literals, array and hash literals)
//! - `expr/postfix.rs`: infix rules (binary operators, calls, indexing,
//!   member access)

mod expr;
mod stmt;

use monkey_ir::{Expression, Token, TokenKind};

use crate::{ParseResult, Parser};

/// Binding power, weakest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    /// `==` `!=`
    Equals,
    /// `<` `>`
    LessGreater,
    /// `+` `-`
    Sum,
    /// `*` `/`
    Product,
    /// `-x` `!x`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]` `a.b`
    Index,
}

/// Rule invoked with the cursor on the token that begins an expression.
pub(crate) type PrefixParseFn<I> = fn(&mut Parser<I>) -> ParseResult<Expression>;

/// Rule invoked with the cursor on an operator token and the operand to its
/// left.
pub(crate) type InfixParseFn<I> = fn(&mut Parser<I>, Expression) -> ParseResult<Expression>;

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Populate the dispatch tables.
    pub(crate) fn register_rules(&mut self) {
        let prefix: [(TokenKind, PrefixParseFn<I>); 12] = [
            (TokenKind::Ident, Self::parse_identifier),
            (TokenKind::Int, Self::parse_integer_literal),
            (TokenKind::String, Self::parse_string_literal),
            (TokenKind::True, Self::parse_boolean_literal),
            (TokenKind::False, Self::parse_boolean_literal),
            (TokenKind::Bang, Self::parse_prefix_expression),
            (TokenKind::Minus, Self::parse_prefix_expression),
            (TokenKind::LParen, Self::parse_grouped_expression),
            (TokenKind::If, Self::parse_if_expression),
            (TokenKind::Function, Self::parse_function_literal),
            (TokenKind::LBracket, Self::parse_array_literal),
            (TokenKind::LBrace, Self::parse_hash_literal),
        ];
        self.prefix_fns.extend(prefix);

        let infix: [(TokenKind, Precedence, InfixParseFn<I>); 11] = [
            (TokenKind::Eq, Precedence::Equals, Self::parse_infix_expression),
            (TokenKind::NotEq, Precedence::Equals, Self::parse_infix_expression),
            (TokenKind::Lt, Precedence::LessGreater, Self::parse_infix_expression),
            (TokenKind::Gt, Precedence::LessGreater, Self::parse_infix_expression),
            (TokenKind::Plus, Precedence::Sum, Self::parse_infix_expression),
            (TokenKind::Minus, Precedence::Sum, Self::parse_infix_expression),
            (TokenKind::Asterisk, Precedence::Product, Self::parse_infix_expression),
            (TokenKind::Slash, Precedence::Product, Self::parse_infix_expression),
            (TokenKind::LParen, Precedence::Call, Self::parse_call_expression),
            (TokenKind::LBracket, Precedence::Index, Self::parse_index_expression),
            (TokenKind::Period, Precedence::Index, Self::parse_member_expression),
        ];
        self.infix_fns
            .extend(infix.into_iter().map(|(kind, prec, rule)| (kind, (prec, rule))));
    }

    /// Binding power of `kind` in operator position.
    #[inline]
    pub(crate) fn infix_precedence(&self, kind: TokenKind) -> Precedence {
        self.infix_fns
            .get(&kind)
            .map_or(Precedence::Lowest, |&(prec, _)| prec)
    }
}
