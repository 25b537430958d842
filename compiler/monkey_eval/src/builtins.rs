//! Builtin functions.
//!
//! Builtins are resolved after the environment chain, so a user binding
//! named `len` shadows the builtin.

use crate::errors::{missing_args, unsupported_arg, wrong_arg_count};
use crate::object::{Builtin, Object};
use crate::print_handler::PrintHandlerImpl;

static BUILTINS: [Builtin; 3] = [
    Builtin::new("len", len),
    Builtin::new("println", println),
    Builtin::new("printf", printf),
];

/// Find a builtin by name.
pub fn lookup(name: &str) -> Option<Builtin> {
    BUILTINS.iter().find(|b| b.name() == name).copied()
}

/// `len(x)`: byte length of a string or element count of an array.
fn len(args: &[Object], _out: &PrintHandlerImpl) -> Object {
    let [arg] = args else {
        return wrong_arg_count(args.len(), 1);
    };
    let count = match arg {
        Object::String(s) => s.len(),
        Object::Array(elements) => elements.len(),
        other => return unsupported_arg("len", other.object_type()),
    };
    // Lengths of in-memory values always fit.
    Object::Integer(i64::try_from(count).unwrap_or(i64::MAX))
}

/// `println(a, ...)`: inspections joined by spaces, then a newline.
fn println(args: &[Object], out: &PrintHandlerImpl) -> Object {
    if args.is_empty() {
        return missing_args(0);
    }
    let line = args.iter().map(Object::inspect).collect::<Vec<_>>().join(" ");
    out.println(&line);
    Object::NULL
}

/// `printf(fmt, a, ...)`: no trailing newline.
fn printf(args: &[Object], out: &PrintHandlerImpl) -> Object {
    let Some((format, rest)) = args.split_first() else {
        return missing_args(0);
    };
    out.print(&format_args_into(&format.inspect(), rest));
    Object::NULL
}

/// Substitute `%s`, `%v` and `%d` with successive inspections.
///
/// `%%` is a literal percent. `%d` takes integers only; any other argument
/// renders as `%!d(<TYPE>=<inspection>)`. A verb with no argument left
/// renders as `%!<verb>(MISSING)`; a lone trailing `%` as `%!(NOVERB)`.
/// Unknown verbs are copied through. Surplus arguments are ignored.
fn format_args_into(format: &str, args: &[Object]) -> String {
    let mut result = String::with_capacity(format.len());
    let mut args = args.iter();
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('%') => result.push('%'),
            Some(verb @ ('s' | 'v' | 'd')) => match args.next() {
                Some(arg) if verb == 'd' && !matches!(arg, Object::Integer(_)) => {
                    result.push_str("%!d(");
                    result.push_str(arg.object_type().as_str());
                    result.push('=');
                    result.push_str(&arg.inspect());
                    result.push(')');
                }
                Some(arg) => result.push_str(&arg.inspect()),
                None => {
                    result.push_str("%!");
                    result.push(verb);
                    result.push_str("(MISSING)");
                }
            },
            Some(other) => {
                result.push('%');
                result.push(other);
            }
            None => result.push_str("%!(NOVERB)"),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::print_handler::buffer_handler;

    fn call(name: &str, args: &[Object], out: &PrintHandlerImpl) -> Object {
        match lookup(name) {
            Some(builtin) => builtin.call(args, out),
            None => panic!("no builtin {name}"),
        }
    }

    #[test]
    fn lookup_knows_every_builtin() {
        for name in ["len", "println", "printf"] {
            assert_eq!(lookup(name).map(|b| b.name()), Some(name));
        }
        assert!(lookup("puts").is_none());
    }

    #[test]
    fn len_of_strings_and_arrays() {
        let out = buffer_handler();
        assert_eq!(call("len", &[Object::string("")], &out), Object::Integer(0));
        assert_eq!(call("len", &[Object::string("four")], &out), Object::Integer(4));
        assert_eq!(
            call("len", &[Object::string("héllo")], &out),
            Object::Integer(6)
        );
        let array = Object::array(vec![Object::NULL, Object::TRUE]);
        assert_eq!(call("len", &[array], &out), Object::Integer(2));
    }

    #[test]
    fn len_errors() {
        let out = buffer_handler();
        assert_eq!(
            call("len", &[Object::Integer(1)], &out),
            Object::error("argument to `len` is not supported. got INTEGER")
        );
        assert_eq!(
            call("len", &[Object::string("one"), Object::string("two")], &out),
            Object::error("wrong number of arguments. got=2, want=1")
        );
        assert_eq!(
            call("len", &[], &out),
            Object::error("wrong number of arguments. got=0, want=1")
        );
    }

    #[test]
    fn println_joins_with_spaces() {
        let out = buffer_handler();
        let result = call(
            "println",
            &[Object::string("a"), Object::Integer(1), Object::TRUE],
            &out,
        );
        assert_eq!(result, Object::NULL);
        assert_eq!(out.get_output(), "a 1 true\n");
        assert_eq!(
            call("println", &[], &out),
            Object::error("wrong number of arguments. got=0")
        );
    }

    #[test]
    fn printf_substitutes_verbs() {
        let out = buffer_handler();
        let result = call(
            "printf",
            &[
                Object::string("%s is %d%% %v"),
                Object::string("x"),
                Object::Integer(50),
                Object::array(vec![Object::Integer(1)]),
            ],
            &out,
        );
        assert_eq!(result, Object::NULL);
        assert_eq!(out.get_output(), "x is 50% [1]");
    }

    #[test]
    fn printf_edge_cases() {
        assert_eq!(format_args_into("%s and %s", &[Object::Integer(1)]), "1 and %!s(MISSING)");
        assert_eq!(format_args_into("100%", &[]), "100%!(NOVERB)");
        assert_eq!(format_args_into("%q", &[]), "%q");
        assert_eq!(format_args_into("plain", &[Object::TRUE]), "plain");
        assert_eq!(
            format_args_into("%d|%d|%v", &[Object::string("hi"), Object::Integer(-3), Object::NULL]),
            "%!d(STRING=hi)|-3|null"
        );

        let out = buffer_handler();
        assert_eq!(
            call("printf", &[], &out),
            Object::error("wrong number of arguments. got=0")
        );
    }
}
