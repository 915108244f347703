//! Shapely Patterns - values, patterns and errors for the shapely matcher.
//!
//! This crate provides:
//! - Runtime subject values (`Value`, `Heap`, `FunctionValue`)
//! - The value classifier (`Kind`, `NumberClass`)
//! - Pattern descriptions (`Pattern`, `Combinator`, `NumericTest`, `TypeTag`)
//! - The combinator library (`combinators::{any, var, all, some, range, ...}`)
//! - Binding accumulators (`Bindings`)
//! - Match error types (`MatchError`, `MatchErrorKind`, `MatchResult`)
//!
//! # Value Types
//!
//! All heap payloads go through `Value::` and `Pattern::` factory methods;
//! `Heap<T>` has a crate-private constructor so external code cannot build
//! heap variants directly. Payloads are shared through `Arc`, so values and
//! patterns are cheap to clone and safe to share across threads.
//!
//! The matching algorithm itself lives in `shapely_eval`.

mod bindings;
pub mod combinators;
mod errors;
mod pattern;
mod render;
mod value;

pub use bindings::Bindings;
pub use errors::{
    invalid_regex, match_failure, no_branch_matched, recursion_limit_exceeded, MatchError,
    MatchErrorKind, MatchResult,
};
pub use pattern::{Combinator, NumericTest, Pattern, TypeTag};
pub use value::{FunctionValue, Heap, Kind, NativeFn, NumberClass, Value};
