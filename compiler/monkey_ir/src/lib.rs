//! Monkey IR - tokens and the abstract syntax tree.
//!
//! Shared by every stage of the interpreter:
//! - `Token`/`TokenKind`: the scanner's output and the parser's input
//! - `ast`: the closed statement/expression catalogue produced by the parser
//!   and walked by the evaluator, plus its canonical `Display` rendering

pub mod ast;
mod token;

pub use ast::{
    BlockStatement, Expression, Identifier, InfixOperator, LetStatement, PrefixOperator, Program,
    ReturnStatement, Statement,
};
pub use token::{Token, TokenKind};
