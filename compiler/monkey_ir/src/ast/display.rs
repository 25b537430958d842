//! Canonical rendering.
//!
//! Every operator application is parenthesized, blocks keep their braces and
//! string literals are re-quoted, so a rendering parses back to a tree with
//! the same rendering.

use std::fmt::{self, Display, Formatter, Write};

use monkey_stack::ensure_sufficient_stack;

use super::{
    BlockStatement, Expression, Identifier, LetStatement, Program, ReturnStatement, Statement,
};

/// Statements separated by one space, so adjacent expression statements
/// stay apart when re-parsed.
impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => Display::fmt(stmt, f),
            Statement::Return(stmt) => Display::fmt(stmt, f),
            Statement::Expression(expr) => Display::fmt(expr, f),
            Statement::Block(block) => Display::fmt(block, f),
        }
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {};", self.name, self.value)
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "return {};", self.value)
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for stmt in &self.statements {
            write!(f, " {stmt}")?;
        }
        f.write_str(" }")
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.render(f))
    }
}

impl Expression {
    fn render(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => Display::fmt(ident, f),
            Expression::IntegerLiteral(value) => write!(f, "{value}"),
            Expression::StringLiteral(value) => write_quoted(f, value),
            Expression::BooleanLiteral(value) => write!(f, "{value}"),
            Expression::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Expression::Infix {
                operator,
                left,
                right,
            } => write!(f, "({left} {operator} {right})"),
            Expression::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alt) = alternative {
                    write!(f, " else {alt}")?;
                }
                Ok(())
            }
            Expression::FunctionLiteral { parameters, body } => {
                f.write_str("fn(")?;
                write_comma_separated(f, parameters.iter())?;
                write!(f, ") {body}")
            }
            Expression::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_comma_separated(f, arguments.iter())?;
                f.write_char(')')
            }
            Expression::ArrayLiteral(elements) => {
                f.write_char('[')?;
                write_comma_separated(f, elements.iter())?;
                f.write_char(']')
            }
            Expression::HashLiteral(pairs) => {
                f.write_char('{')?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_char('}')
            }
            Expression::Index { target, index } => write!(f, "({target}[{index}])"),
        }
    }
}

fn write_comma_separated<T: Display>(
    f: &mut Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_quoted(f: &mut Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
