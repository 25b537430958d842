//! Prefix and infix operators.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrefixOperator {
    /// `!`
    Bang,
    /// `-`
    Minus,
}

impl PrefixOperator {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Bang => "!",
            Self::Minus => "-",
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum InfixOperator {
    // Arithmetic
    Plus,
    Minus,
    Asterisk,
    Slash,

    // Comparison
    Lt,
    Gt,
    Eq,
    NotEq,
}

impl InfixOperator {
    /// Source-level symbol, also used in runtime error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
