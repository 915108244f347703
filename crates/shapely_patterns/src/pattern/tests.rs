use pretty_assertions::assert_eq;

use super::*;
use crate::combinators::{any, number, string, var};

#[test]
fn pattern_kinds() {
    let cases = [
        (Pattern::Missing, Kind::Missing),
        (Pattern::Null, Kind::Null),
        (Pattern::from(true), Kind::Boolean),
        (Pattern::from(f64::NAN), Kind::Number),
        (Pattern::from("a"), Kind::String),
        (Pattern::array([1, 2]), Kind::Array),
        (Pattern::object([("a", number())]), Kind::Object),
        (Pattern::predicate("is_array", Value::is_array), Kind::Callable),
        (any(), Kind::Combinator),
        (var("x"), Kind::Binding),
    ];
    for (pattern, kind) in cases {
        assert_eq!(pattern.kind(), kind, "wrong kind for {pattern}");
    }
}

#[test]
fn values_author_literal_patterns() {
    let value = Value::object([
        ("b", Value::array([Value::from(1), Value::Null])),
        ("a", Value::string("x")),
    ]);
    let pattern = Pattern::from(&value);
    // Fields are laid out in key order.
    assert_eq!(pattern.to_string(), "{a: \"x\", b: [1, null]}");
    assert_eq!(pattern.kind(), Kind::Object);
}

#[test]
fn callable_values_become_predicates() {
    let value = Value::Function(FunctionValue::predicate("is_array", Value::is_array));
    let pattern = Pattern::from(value);
    assert_eq!(pattern.kind(), Kind::Callable);
    assert_eq!(pattern.to_string(), "<predicate is_array>");
}

#[test]
fn regex_values_become_regex_patterns() {
    let value = Value::regex("an*a").unwrap_or_else(|e| panic!("{e}"));
    let pattern = Pattern::from(value);
    assert_eq!(pattern.kind(), Kind::RegExp);
    assert_eq!(pattern.to_string(), "/an*a/");
}

#[test]
fn option_authoring() {
    assert_eq!(Pattern::from(None::<&str>).kind(), Kind::Missing);
    assert_eq!(Pattern::from(Some("x")).to_string(), "\"x\"");
}

#[test]
fn nested_shape_rendering() {
    let p = Pattern::object([
        ("foo", Pattern::object([("bar", var("bar")), ("baz", string())])),
        ("list", Pattern::array([Pattern::from(1), any()])),
    ]);
    assert_eq!(
        p.to_string(),
        "{foo: {bar: var(bar), baz: string}, list: [1, any]}"
    );
}

#[test]
fn patterns_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Pattern>();
    assert_send_sync::<Value>();
}
