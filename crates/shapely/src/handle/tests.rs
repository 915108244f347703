use pretty_assertions::assert_eq;

use shapely_eval::MatchErrorKind;
use shapely_patterns::combinators::{number, var_of};

use super::*;

#[test]
fn missing_handle() {
    assert_eq!(MatchHandle::missing().subject(), &Value::Missing);
    assert_eq!(MatchHandle::default().subject(), &Value::Missing);
    assert!(MatchHandle::missing().compare_to(Value::Missing).is_ok());
}

#[test]
fn failure_carries_subject_and_pattern() {
    let err = match match_value(42).compare_to(43) {
        Err(e) => e,
        Ok(()) => panic!("42 should not match 43"),
    };
    assert!(err.is_match_failure());
    assert_eq!(err.to_string(), "match failure: 42 does not match 43");
    assert_eq!(err.subject, Some(Value::from(42)));
    assert_eq!(err.pattern.map(|p| p.to_string()), Some("43".to_string()));
}

#[test]
fn callback_runs_only_on_success() {
    let mut ran = false;
    let result = match_value("hi").compare_to_with(number(), |_| {
        ran = true;
        Ok(())
    });
    assert!(result.is_err());
    assert!(!ran);

    let doubled = match_value(21).compare_to_with(var_of("n", number()), |b| {
        Ok(b["n"].as_number().unwrap_or_default() * 2.0)
    });
    assert_eq!(doubled.ok(), Some(42.0));
}

#[test]
fn matcher_limit_is_honored() {
    let deep = Value::array([Value::array([Value::array([Value::from(1)])])]);
    let pattern = Pattern::from(&deep);
    let handle = match_value(deep).with_matcher(Matcher::builder().max_depth(1).build());
    match handle.compare_to(pattern.clone()) {
        Err(e) => assert_eq!(e.kind, MatchErrorKind::RecursionLimitExceeded { limit: 1 }),
        Ok(()) => panic!("expected depth error"),
    }
    let handle = handle.with_matcher(Matcher::new());
    assert!(handle.compare_to(pattern).is_ok());
}

#[test]
fn free_functions_dispatch() {
    let unit = match_cases(7, |c| {
        c.when(number(), |_, ()| Ok("number"));
    });
    assert_eq!(unit.ok(), Some("number"));

    let mut hits = 0;
    let counted = match_cases_with(7, &mut hits, |c| {
        c.when(number(), |_, hits: &mut i32| {
            *hits += 1;
            Ok(*hits)
        });
    });
    assert_eq!(counted.ok(), Some(1));
    assert_eq!(hits, 1);
}
