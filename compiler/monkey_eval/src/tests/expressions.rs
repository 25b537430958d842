//! Literals, operators and conditionals.

use pretty_assertions::assert_eq;

use super::eval;
use crate::Object;

#[test]
fn integer_expressions() {
    let cases = [
        ("5", 5),
        ("10", 10),
        ("-5", -5),
        ("-10", -10),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
        ("7 / 2", 3),
        ("-7 / 2", -3),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Object::Integer(expected), "{source}");
    }
}

#[test]
fn boolean_expressions() {
    let cases = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 < 1", false),
        ("1 > 1", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("1 == 2", false),
        ("1 != 2", true),
        ("true == true", true),
        ("false == false", true),
        ("true == false", false),
        ("true != false", true),
        ("false != true", true),
        ("(1 < 2) == true", true),
        ("(1 < 2) == false", false),
        ("(1 > 2) == true", false),
        ("(1 > 2) == false", true),
        ("false < true", true),
        ("true > false", true),
        ("\"a\" == \"a\"", true),
        ("\"a\" != \"b\"", true),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Object::native_bool(expected), "{source}");
    }
}

#[test]
fn bang_operator() {
    let cases = [
        ("!true", false),
        ("!false", true),
        ("!5", false),
        ("!!true", true),
        ("!!false", false),
        ("!!5", true),
        ("!\"\"", false),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), Object::native_bool(expected), "{source}");
    }
}

#[test]
fn string_expressions() {
    assert_eq!(eval("\"Hello World!\""), Object::string("Hello World!"));
    assert_eq!(
        eval("\"Hello\" + \" \" + \"World!\""),
        Object::string("Hello World!")
    );
    assert_eq!(eval("\"ab\" * 3"), Object::string("ababab"));
    assert_eq!(eval("\"ab\" * 0"), Object::string(""));
    assert_eq!(eval("\"tab\\there\""), Object::string("tab\there"));
}

#[test]
fn if_else_expressions() {
    let cases = [
        ("if (true) { 10 }", Object::Integer(10)),
        ("if (false) { 10 }", Object::NULL),
        ("if (1) { 10 }", Object::Integer(10)),
        ("if (1 < 2) { 10 }", Object::Integer(10)),
        ("if (1 > 2) { 10 }", Object::NULL),
        ("if (1 > 2) { 10 } else { 20 }", Object::Integer(20)),
        ("if (1 < 2) { 10 } else { 20 }", Object::Integer(10)),
        ("if (\"\") { 1 } else { 2 }", Object::Integer(1)),
        ("if (if (false) { 1 }) { 1 } else { 2 }", Object::Integer(2)),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "{source}");
    }
}

#[test]
fn empty_blocks_are_null() {
    assert_eq!(eval("if (true) { }"), Object::NULL);
    assert_eq!(eval("fn() { }()"), Object::NULL);
}

#[test]
fn deeply_nested_negation() {
    let source = format!("{}1", "-".repeat(200_001));
    assert_eq!(eval(&source), Object::Integer(-1));
}
