//! Abstract syntax tree.
//!
//! Two closed families, [`Statement`] and [`Expression`], rooted at
//! [`Program`]. Every node owns its children; the only shared pieces are a
//! function literal's parameters and body, which sit behind `Rc` so runtime
//! function values can refer to them without cloning the subtree.
//!
//! Each node renders a fully parenthesized canonical form through `Display`
//! (see `display.rs`), used for diagnostics and for checking parse structure.
//! Rendering and dropping both handle arbitrarily deep nesting; the derived
//! `Clone`, `PartialEq` and `Debug` still recurse.

mod display;
mod drop;
mod operators;

use std::rc::Rc;

pub use operators::{InfixOperator, PrefixOperator};

/// Root of a parsed source unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Program { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Literal of the first statement's leading token, or `""`.
    pub fn token_literal(&self) -> String {
        self.statements
            .first()
            .map(Statement::token_literal)
            .unwrap_or_default()
    }
}

/// A bare name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let(LetStatement),
    /// `return <value>;`
    Return(ReturnStatement),
    /// An expression in statement position.
    Expression(Expression),
    /// `{ ... }`
    Block(BlockStatement),
}

impl Statement {
    pub fn token_literal(&self) -> String {
        match self {
            Statement::Let(_) => "let".to_owned(),
            Statement::Return(_) => "return".to_owned(),
            Statement::Expression(expr) => expr.token_literal(),
            Statement::Block(_) => "{".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetStatement {
    pub name: Identifier,
    pub value: Expression,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnStatement {
    pub value: Expression,
}

/// Statements between braces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        BlockStatement { statements }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(i64),
    StringLiteral(String),
    BooleanLiteral(bool),
    Prefix {
        operator: PrefixOperator,
        right: Box<Expression>,
    },
    Infix {
        operator: InfixOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },
    FunctionLiteral {
        parameters: Rc<[Identifier]>,
        body: Rc<BlockStatement>,
    },
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    ArrayLiteral(Vec<Expression>),
    /// Pairs in source order.
    HashLiteral(Vec<(Expression, Expression)>),
    Index {
        target: Box<Expression>,
        index: Box<Expression>,
    },
}

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier::new(name))
    }

    pub fn prefix(operator: PrefixOperator, right: Expression) -> Self {
        Expression::Prefix {
            operator,
            right: Box::new(right),
        }
    }

    pub fn infix(operator: InfixOperator, left: Expression, right: Expression) -> Self {
        Expression::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn function(parameters: Vec<Identifier>, body: BlockStatement) -> Self {
        Expression::FunctionLiteral {
            parameters: parameters.into(),
            body: Rc::new(body),
        }
    }

    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn index(target: Expression, index: Expression) -> Self {
        Expression::Index {
            target: Box::new(target),
            index: Box::new(index),
        }
    }

    /// Literal text of the token that begins (or, for infix forms, names) this
    /// expression.
    pub fn token_literal(&self) -> String {
        match self {
            Expression::Identifier(ident) => ident.name.clone(),
            Expression::IntegerLiteral(value) => value.to_string(),
            Expression::StringLiteral(value) => value.clone(),
            Expression::BooleanLiteral(value) => value.to_string(),
            Expression::Prefix { operator, .. } => operator.as_symbol().to_owned(),
            Expression::Infix { operator, .. } => operator.as_symbol().to_owned(),
            Expression::If { .. } => "if".to_owned(),
            Expression::FunctionLiteral { .. } => "fn".to_owned(),
            Expression::Call { .. } => "(".to_owned(),
            Expression::ArrayLiteral(_) | Expression::Index { .. } => "[".to_owned(),
            Expression::HashLiteral(_) => "{".to_owned(),
        }
    }
}
