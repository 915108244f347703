//! Shapely - structural pattern matching over dynamic values.
//!
//! Wrap a subject with [`match_value`], then either compare it against one
//! pattern or dispatch it over a list of cases:
//!
//! ```text
//! use shapely::combinators::{number, string, var_of};
//! use shapely::{match_value, Pattern, Value};
//!
//! let point = Value::object([("x", Value::from(3)), ("y", Value::from(4))]);
//! match_value(point.clone()).compare_to(Pattern::object([("x", number())]))?;
//!
//! let label = match_value(point).cases(|when| {
//!     when.when(Pattern::object([("name", var_of("n", string()))]), |b, ()| {
//!         Ok(b["n"].to_string())
//!     })
//!     .when(Pattern::object([("x", var_of("x", number()))]), |b, ()| {
//!         Ok(format!("x = {}", b["x"]))
//!     });
//! })?;
//! ```
//!
//! # Tracing
//!
//! Matching emits `tracing` events. Call [`init_tracing`] and set
//! `RUST_LOG=shapely_eval=debug` (or `trace`) to see branch selection.

mod handle;

use std::sync::Once;

pub use handle::{match_cases, match_cases_with, match_value, MatchHandle};
pub use shapely_eval::{
    Bindings, Branch, Cases, Combinator, FunctionValue, Handler, Kind, MatchError,
    MatchErrorKind, MatchResult, Matcher, MatcherBuilder, NumberClass, NumericTest, Pattern,
    TypeTag, Value, DEFAULT_MAX_DEPTH,
};
pub use shapely_patterns::combinators;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
