//! Scanner for Monkey source text.
//!
//! [`Lexer`] is a pull-based token source: each `next()` yields one
//! [`Token`], ending with exactly one `EOF` token. Unrecognized input becomes
//! an `ILLEGAL` token rather than an error so the parser can report it in
//! place.

use logos::Logos;
use monkey_ir::{Token, TokenKind};

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    // === Keywords ===
    #[token("fn")]
    Function,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,

    // === Operators ===
    #[token("==")]
    Eq,
    #[token("=")]
    Assign,
    #[token("!=")]
    NotEq,
    #[token("!")]
    Bang,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,

    // === Delimiters ===
    #[token(".")]
    Period,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    // === Literals ===
    // Range is checked by the parser, which owns the diagnostic.
    #[regex(r"[0-9]+")]
    Int,

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    // A string with no closing quote before end of input.
    #[regex(r#""([^"\\]|\\.)*"#)]
    UnterminatedString,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Pull-based scanner over a source string.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            inner: RawToken::lexer(source),
            finished: false,
        }
    }

    /// Scan the next token; `EOF` once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        self.next().unwrap_or_else(Token::eof)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = match self.inner.next() {
            Some(Ok(raw)) => convert_token(raw, self.inner.slice()),
            Some(Err(())) => Token::new(TokenKind::Illegal, self.inner.slice()),
            None => {
                self.finished = true;
                Token::eof()
            }
        };
        Some(token)
    }
}

/// Scan all of `source`, including the trailing `EOF` token.
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

fn convert_token(raw: RawToken, slice: &str) -> Token {
    let kind = match raw {
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            return Token::new(TokenKind::String, unescape_string(content));
        }
        RawToken::UnterminatedString => TokenKind::Illegal,
        RawToken::Int => TokenKind::Int,
        RawToken::Ident => TokenKind::Ident,

        RawToken::Function => TokenKind::Function,
        RawToken::Let => TokenKind::Let,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::Return => TokenKind::Return,

        RawToken::Eq => TokenKind::Eq,
        RawToken::Assign => TokenKind::Assign,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Asterisk => TokenKind::Asterisk,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,

        RawToken::Period => TokenKind::Period,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
    };
    Token::new(kind, slice)
}

/// Process escape sequences in a string literal body.
fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            // Unknown escape: keep both characters.
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}
