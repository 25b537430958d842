//! Arrays, hashes and indexing.

use pretty_assertions::assert_eq;

use super::{error, eval};
use crate::{HashKey, Object};

#[test]
fn array_literals() {
    let result = eval("[1, 2 * 2, 3 + 3]");
    assert_eq!(
        result,
        Object::array(vec![
            Object::Integer(1),
            Object::Integer(4),
            Object::Integer(6)
        ])
    );
    assert_eq!(result.inspect(), "[1, 4, 6]");
    assert_eq!(eval("[]").inspect(), "[]");
}

#[test]
fn array_indexing() {
    let cases = [
        ("[1, 2, 3][0]", Object::Integer(1)),
        ("[1, 2, 3][1]", Object::Integer(2)),
        ("[1, 2, 3][2]", Object::Integer(3)),
        ("let i = 0; [1][i];", Object::Integer(1)),
        ("[1, 2, 3][1 + 1];", Object::Integer(3)),
        ("let myArray = [1, 2, 3]; myArray[2];", Object::Integer(3)),
        (
            "let myArray = [1, 2, 3]; myArray[0] + myArray[1] + myArray[2];",
            Object::Integer(6),
        ),
        (
            "let myArray = [1, 2, 3]; let i = myArray[0]; myArray[i]",
            Object::Integer(2),
        ),
        ("[1, 2, 3][3]", Object::NULL),
        ("[1, 2, 3][-1]", Object::NULL),
        ("[[1, 2], [3]][0][1]", Object::Integer(2)),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "{source}");
    }
}

#[test]
fn hash_literals() {
    let source = r#"
        let two = "two";
        {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }
    "#;
    let Object::Hash(pairs) = eval(source) else {
        panic!("expected a hash");
    };
    let expected = [
        (Object::string("one"), 1),
        (Object::string("two"), 2),
        (Object::string("three"), 3),
        (Object::Integer(4), 4),
        (Object::TRUE, 5),
        (Object::FALSE, 6),
    ];
    assert_eq!(pairs.len(), expected.len());
    for (key, value) in expected {
        let pair = &pairs[&key.hash_key().unwrap()];
        assert_eq!(pair.key, key);
        assert_eq!(pair.value, Object::Integer(value));
    }
}

#[test]
fn later_duplicate_keys_win() {
    let Object::Hash(pairs) = eval("{1: \"a\", 1: \"b\"}") else {
        panic!("expected a hash");
    };
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[&HashKey::Integer(1)].value, Object::string("b"));
}

#[test]
fn hash_indexing() {
    let cases = [
        ("{\"foo\": 5}[\"foo\"]", Object::Integer(5)),
        ("{\"foo\": 5}[\"bar\"]", Object::NULL),
        ("let key = \"foo\"; {\"foo\": 5}[key]", Object::Integer(5)),
        ("{}[\"foo\"]", Object::NULL),
        ("{5: 5}[5]", Object::Integer(5)),
        ("{true: 5}[true]", Object::Integer(5)),
        ("{false: 5}[false]", Object::Integer(5)),
        ("{1: 1}[1]", Object::Integer(1)),
    ];
    for (source, expected) in cases {
        assert_eq!(eval(source), expected, "{source}");
    }
}

#[test]
fn member_access_reads_string_keys() {
    let source = "let person = {\"name\": \"Ada\", \"age\": 36}; person.name";
    assert_eq!(eval(source), Object::string("Ada"));
    assert_eq!(eval("{\"a\": 1}.missing"), Object::NULL);
}

#[test]
fn unhashable_keys() {
    assert_eq!(
        eval("{\"name\": \"Monkey\"}[fn(x) { x }];"),
        error("unusable as hash key: FUNCTION")
    );
    assert_eq!(
        eval("{[1]: 2}"),
        error("unusable as hash key: ARRAY")
    );
}

#[test]
fn unsupported_index_targets() {
    assert_eq!(eval("1[0]"), error("index operator not supported: INTEGER"));
    assert_eq!(eval("\"abc\"[0]"), error("index operator not supported: STRING"));
    assert_eq!(eval("[1][\"a\"]"), error("index operator not supported: ARRAY"));
}

#[test]
fn len_of_collections() {
    assert_eq!(eval("len([1, 2, 3])"), Object::Integer(3));
    assert_eq!(eval("len([])"), Object::Integer(0));
    assert_eq!(eval("len(\"hello world\")"), Object::Integer(11));
}
