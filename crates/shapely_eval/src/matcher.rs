//! `Matcher` and `MatcherBuilder`.
//!
//! A `Matcher` carries the configuration a match runs under. It holds no
//! per-match state, so one matcher may serve any number of matches.

use shapely_patterns::{Bindings, MatchResult, Pattern, Value};

use crate::exec::cases::{eval_cases, Cases};
use crate::exec::equivalence;

/// Default bound on structural nesting.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Configured entry point to the equivalence engine and case dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Matcher {
    max_depth: Option<usize>,
}

impl Default for Matcher {
    fn default() -> Self {
        Matcher {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> MatcherBuilder {
        MatcherBuilder::new()
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Match `pattern` against `subject`, returning bindings on success.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(pattern = %pattern.kind(), subject = %subject.kind())
    )]
    pub fn try_match(&self, pattern: &Pattern, subject: &Value) -> MatchResult<Option<Bindings>> {
        equivalence::try_match(pattern, subject, self.max_depth)
    }

    /// Match and merge bindings into `bindings` on success.
    pub fn evaluate(
        &self,
        pattern: &Pattern,
        subject: &Value,
        bindings: &mut Bindings,
    ) -> MatchResult<bool> {
        equivalence::evaluate(pattern, subject, bindings, self.max_depth)
    }

    /// Collect branches with `build`, then dispatch `subject` to the first match.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn cases<'a, C, R, B>(&self, subject: &Value, ctx: &mut C, build: B) -> MatchResult<R>
    where
        B: FnOnce(&mut Cases<'a, C, R>),
    {
        let mut cases = Cases::new();
        build(&mut cases);
        tracing::trace!(branches = cases.len(), "case branches collected");
        eval_cases(subject, ctx, cases, self.max_depth)
    }
}

/// Builder for [`Matcher`].
#[derive(Clone, Copy, Debug)]
pub struct MatcherBuilder {
    max_depth: Option<usize>,
}

impl MatcherBuilder {
    pub fn new() -> Self {
        MatcherBuilder {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    /// Bound structural nesting; exceeding it raises `RecursionLimitExceeded`.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Remove the nesting bound. Deep subjects still cannot overflow the
    /// native stack.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_depth = None;
        self
    }

    pub fn build(self) -> Matcher {
        Matcher {
            max_depth: self.max_depth,
        }
    }
}

impl Default for MatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
