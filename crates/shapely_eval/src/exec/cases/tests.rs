use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use pretty_assertions::assert_eq;

use shapely_patterns::combinators::{any, number, string, var, var_of};
use shapely_patterns::{MatchError, MatchErrorKind};

use super::*;

#[derive(Default)]
struct Calls {
    log: Vec<&'static str>,
}

#[test]
fn first_matching_branch_wins() {
    let mut calls = Calls::default();
    let mut cases = Cases::new();
    cases
        .when(string(), |_, c: &mut Calls| {
            c.log.push("string");
            Ok(1)
        })
        .when(number(), |_, c: &mut Calls| {
            c.log.push("number");
            Ok(2)
        })
        .when(any(), |_, c: &mut Calls| {
            c.log.push("any");
            Ok(3)
        });

    let result = eval_cases(&Value::from(42), &mut calls, cases, None);
    assert_eq!(result.ok(), Some(2));
    assert_eq!(calls.log, vec!["number"]);
}

#[test]
fn registration_runs_no_handlers() {
    let mut calls = Calls::default();
    let mut cases: Cases<'_, Calls, ()> = Cases::new();
    cases.when(any(), |_, c| {
        c.log.push("any");
        Ok(())
    });
    assert_eq!(cases.len(), 1);
    assert!(!cases.is_empty());
    assert_eq!(cases.branches()[0].pattern().to_string(), "any");
    assert!(calls.log.is_empty());

    let result = eval_cases(&Value::Null, &mut calls, cases, None);
    assert_eq!(result.ok(), Some(()));
    assert_eq!(calls.log, vec!["any"]);
}

#[test]
fn fallthrough_reports_branch_count() {
    let mut cases: Cases<'_, (), i32> = Cases::default();
    cases
        .when("one", |_, ()| Ok(1))
        .when("two", |_, ()| Ok(2));

    let err = match eval_cases(&Value::string("three"), &mut (), cases, None) {
        Err(e) => e,
        Ok(v) => panic!("expected fallthrough, got {v}"),
    };
    assert!(err.is_no_branch_matched());
    assert_eq!(
        err.kind,
        MatchErrorKind::NoBranchMatched {
            subject: "\"three\"".to_string(),
            branches: 2,
        }
    );
    assert_eq!(err.subject, Some(Value::string("three")));
}

#[test]
fn empty_cases_fall_through() {
    let cases: Cases<'_, (), ()> = Cases::new();
    assert!(cases.is_empty());
    let result = eval_cases(&Value::Missing, &mut (), cases, None);
    assert!(result.is_err_and(|e| e.is_no_branch_matched()));
}

#[test]
fn handler_receives_branch_bindings() {
    let subject = Value::object([("x", Value::from(1)), ("y", Value::string("a"))]);
    let mut cases: Cases<'_, (), String> = Cases::new();
    cases
        .when(Pattern::object([("x", var_of("x", string()))]), |_, ()| {
            Ok("string x".to_string())
        })
        .when(
            Pattern::object([("x", var("x")), ("y", var("y"))]),
            |b, ()| Ok(format!("{} {}", b["x"], b["y"])),
        );

    let result = eval_cases(&subject, &mut (), cases, None);
    assert_eq!(result.ok(), Some("1 \"a\"".to_string()));
}

#[test]
fn rejected_branches_leak_no_bindings() {
    let subject = Value::array([Value::from(1), Value::from(2)]);
    let mut cases: Cases<'_, (), Bindings> = Cases::new();
    cases
        .when(Pattern::array([var("a"), string()]), |_, ()| Ok(Bindings::new()))
        .when(Pattern::array([any(), var("b")]), |b, ()| Ok(b.clone()));

    let bindings = eval_cases(&subject, &mut (), cases, None).unwrap_or_else(|e| panic!("{e}"));
    assert!(!bindings.contains("a"));
    assert_eq!(bindings["b"], Value::from(2));
}

#[test]
fn handler_errors_propagate() {
    let mut cases: Cases<'_, (), ()> = Cases::new();
    cases.when(any(), |_, ()| Err(MatchError::new("handler failed")));
    let err = match eval_cases(&Value::Null, &mut (), cases, None) {
        Err(e) => e,
        Ok(()) => panic!("expected handler error"),
    };
    assert_eq!(err.to_string(), "handler failed");
    assert!(!err.is_no_branch_matched());
}

#[test]
fn context_is_threaded_mutably() {
    let mut total = 10;
    let mut cases = Cases::new();
    cases.when(var_of("n", number()), |b, acc: &mut i32| {
        let n = b["n"].as_number().unwrap_or_default();
        *acc += n as i32;
        Ok(*acc)
    });
    let result = eval_cases(&Value::from(5), &mut total, cases, None);
    assert_eq!(result.ok(), Some(15));
    assert_eq!(total, 15);
}

#[test]
fn pattern_errors_stop_dispatch() {
    let boom = Pattern::from(Value::function("boom", |_| Err(MatchError::new("boom"))));
    let mut reached = false;
    let mut cases = Cases::new();
    cases
        .when(boom, |_, r: &mut bool| {
            *r = true;
            Ok(())
        })
        .when(any(), |_, r: &mut bool| {
            *r = true;
            Ok(())
        });
    let result = eval_cases(&Value::Null, &mut reached, cases, None);
    assert!(result.is_err());
    assert!(!reached);
}

#[test]
fn later_branch_patterns_are_never_tried() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = {
        let calls = Arc::clone(&calls);
        Pattern::predicate("counting", move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            true
        })
    };

    let mut cases: Cases<'_, (), &str> = Cases::new();
    cases
        .when(number(), |_, ()| Ok("number"))
        .when(counted.clone(), |_, ()| Ok("counted"));
    let result = eval_cases(&Value::from(1), &mut (), cases, None);
    assert_eq!(result.ok(), Some("number"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let mut cases: Cases<'_, (), &str> = Cases::new();
    cases
        .when(number(), |_, ()| Ok("number"))
        .when(counted, |_, ()| Ok("counted"));
    let result = eval_cases(&Value::Null, &mut (), cases, None);
    assert_eq!(result.ok(), Some("counted"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
