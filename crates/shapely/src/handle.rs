//! The `match_value(subject)` entry point.

use shapely_eval::{Bindings, Cases, MatchResult, Matcher, Pattern, Value};
use shapely_patterns::match_failure;

/// A subject awaiting comparison or case dispatch.
#[derive(Clone, Debug)]
pub struct MatchHandle {
    subject: Value,
    matcher: Matcher,
}

/// Wrap `subject` for matching under the default [`Matcher`].
pub fn match_value(subject: impl Into<Value>) -> MatchHandle {
    MatchHandle::new(subject)
}

/// Dispatch `subject` over the branches registered by `build`.
pub fn match_cases<'a, R, B>(subject: impl Into<Value>, build: B) -> MatchResult<R>
where
    B: FnOnce(&mut Cases<'a, (), R>),
{
    match_value(subject).cases(build)
}

/// Like [`match_cases`], threading `ctx` through to the chosen handler.
pub fn match_cases_with<'a, C, R, B>(
    subject: impl Into<Value>,
    ctx: &mut C,
    build: B,
) -> MatchResult<R>
where
    B: FnOnce(&mut Cases<'a, C, R>),
{
    match_value(subject).cases_with(ctx, build)
}

impl MatchHandle {
    pub fn new(subject: impl Into<Value>) -> Self {
        MatchHandle {
            subject: subject.into(),
            matcher: Matcher::default(),
        }
    }

    /// Handle over a missing subject.
    pub fn missing() -> Self {
        Self::new(Value::Missing)
    }

    #[must_use]
    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn subject(&self) -> &Value {
        &self.subject
    }

    /// Succeed if the subject matches `pattern`; fail with `MatchFailure` otherwise.
    pub fn compare_to(&self, pattern: impl Into<Pattern>) -> MatchResult<()> {
        self.compare_to_with(pattern, |_| Ok(()))
    }

    /// Match against `pattern` and pass the bindings to `f`.
    ///
    /// `f` runs only on success. Its errors are returned unchanged.
    #[tracing::instrument(level = "trace", skip_all, fields(subject = %self.subject.kind()))]
    pub fn compare_to_with<R, F>(&self, pattern: impl Into<Pattern>, f: F) -> MatchResult<R>
    where
        F: FnOnce(&Bindings) -> MatchResult<R>,
    {
        let pattern = pattern.into();
        if let Some(bindings) = self.matcher.try_match(&pattern, &self.subject)? {
            return f(&bindings);
        }
        tracing::debug!(
            subject = %self.subject.preview(),
            pattern = %pattern.preview(),
            "match failure"
        );
        Err(match_failure(&self.subject, &pattern))
    }

    /// Dispatch the subject over the branches registered by `build`.
    pub fn cases<'a, R, B>(&self, build: B) -> MatchResult<R>
    where
        B: FnOnce(&mut Cases<'a, (), R>),
    {
        self.cases_with(&mut (), build)
    }

    pub fn cases_with<'a, C, R, B>(&self, ctx: &mut C, build: B) -> MatchResult<R>
    where
        B: FnOnce(&mut Cases<'a, C, R>),
    {
        self.matcher.cases(&self.subject, ctx, build)
    }
}

impl Default for MatchHandle {
    fn default() -> Self {
        Self::missing()
    }
}

#[cfg(test)]
mod tests;
