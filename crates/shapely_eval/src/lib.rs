//! Shapely Eval - the matching engine.
//!
//! This crate provides:
//! - `exec::equivalence`: recursive structural equivalence with binding capture
//! - `exec::cases`: first-match-wins multi-branch dispatch
//! - `Matcher`: the configured entry point over both
//!
//! Values, patterns and errors come from `shapely_patterns` and are
//! re-exported here.

pub mod exec;
mod matcher;

pub use exec::cases::{eval_cases, Branch, Cases, Handler};
pub use exec::equivalence::{evaluate, try_match};
pub use matcher::{Matcher, MatcherBuilder, DEFAULT_MAX_DEPTH};

pub use shapely_patterns::{
    Bindings, Combinator, FunctionValue, Kind, MatchError, MatchErrorKind, MatchResult,
    NumberClass, NumericTest, Pattern, TypeTag, Value,
};
