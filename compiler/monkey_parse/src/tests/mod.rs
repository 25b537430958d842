//! Parser tests.
//!
//! - `statements`: `let`/`return`/expression statements and literal forms
//! - `precedence`: canonical renderings that pin down binding power
//! - `errors`: error messages and recovery
//! - `property`: rendering is stable under re-parsing

mod errors;

use crate::{parse, ParseOutput};

pub(super) fn parse_source(source: &str) -> ParseOutput {
    parse(monkey_lexer::Lexer::new(source))
}
