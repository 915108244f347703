//! The combinator library.
//!
//! Constructors for composite and predicate patterns:
//!
//! ```text
//! use shapely_patterns::combinators::*;
//!
//! let shape = Pattern::object([
//!     ("id", all([integer(), nonnegative()])),
//!     ("name", var_of("name", string())),
//!     ("score", some([range(0.0, 100.0), Pattern::Null])),
//! ]);
//! ```

use crate::pattern::{Combinator, NumericTest, Pattern, TypeTag};
use crate::value::Value;
use crate::MatchResult;

/// Matches any subject, including missing.
pub fn any() -> Pattern {
    Combinator::Any.into()
}

/// Binds `name` to the subject. Shorthand for `var_of(name, any())`.
pub fn var(name: impl Into<String>) -> Pattern {
    var_of(name, any())
}

/// Binds `name` to the subject when `inner` matches it.
pub fn var_of(name: impl Into<String>, inner: impl Into<Pattern>) -> Pattern {
    Combinator::var(name.into(), inner.into()).into()
}

/// Matches when every pattern matches.
pub fn all<P: Into<Pattern>>(patterns: impl IntoIterator<Item = P>) -> Pattern {
    Combinator::all(patterns.into_iter().map(Into::into).collect()).into()
}

/// Matches when at least one pattern matches; the first match wins.
pub fn some<P: Into<Pattern>>(patterns: impl IntoIterator<Item = P>) -> Pattern {
    Combinator::some(patterns.into_iter().map(Into::into).collect()).into()
}

/// Numbers in `[low, high)`.
pub fn range(low: f64, high: f64) -> Pattern {
    Combinator::Range { low, high }.into()
}

/// Regular expression pattern over strings.
pub fn regex(expr: &str) -> MatchResult<Pattern> {
    Pattern::regex(expr)
}

/// Predicate pattern from a boolean test.
pub fn predicate<F>(name: &str, test: F) -> Pattern
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Pattern::predicate(name, test)
}

fn numeric(test: NumericTest) -> Pattern {
    Combinator::Numeric(test).into()
}

fn tagged(tag: TypeTag) -> Pattern {
    Combinator::Type(tag).into()
}

pub fn number() -> Pattern {
    numeric(NumericTest::Number)
}

pub fn integer() -> Pattern {
    numeric(NumericTest::Integer)
}

pub fn int32() -> Pattern {
    numeric(NumericTest::Int32)
}

pub fn uint32() -> Pattern {
    numeric(NumericTest::Uint32)
}

pub fn finite() -> Pattern {
    numeric(NumericTest::Finite)
}

pub fn infinite() -> Pattern {
    numeric(NumericTest::Infinite)
}

pub fn positive() -> Pattern {
    numeric(NumericTest::Positive)
}

pub fn negative() -> Pattern {
    numeric(NumericTest::Negative)
}

pub fn nonnegative() -> Pattern {
    numeric(NumericTest::Nonnegative)
}

pub fn plus_zero() -> Pattern {
    numeric(NumericTest::PlusZero)
}

pub fn minus_zero() -> Pattern {
    numeric(NumericTest::MinusZero)
}

pub fn string() -> Pattern {
    tagged(TypeTag::String)
}

pub fn boolean() -> Pattern {
    tagged(TypeTag::Boolean)
}

/// Keyed mappings; arrays and null do not match.
pub fn object() -> Pattern {
    tagged(TypeTag::Object)
}
