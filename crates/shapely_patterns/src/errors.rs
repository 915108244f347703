//! Error types for matching.
//!
//! `MatchErrorKind` is the structured category; `MatchError` wraps it with a
//! rendered message and, where available, the subject and pattern involved.
//! Factory functions (`match_failure()`, `no_branch_matched()`, ...) are the
//! public way to build engine errors. Errors raised by user predicates and
//! handlers are built with `MatchError::new` and pass through the engine
//! untouched.

use crate::pattern::Pattern;
use crate::value::Value;

/// Result of a fallible matching operation.
pub type MatchResult<T> = Result<T, MatchError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchErrorKind {
    /// One-shot comparison did not match. Both sides are bounded previews;
    /// the full trees are on `MatchError::subject` and `MatchError::pattern`.
    #[error("match failure: {subject} does not match {pattern}")]
    MatchFailure { subject: String, pattern: String },

    /// Every registered branch failed against the subject.
    #[error("no matching branch for {subject} ({branches} branches tried)")]
    NoBranchMatched { subject: String, branches: usize },

    #[error("maximum match depth exceeded (limit: {limit})")]
    RecursionLimitExceeded { limit: usize },

    #[error("invalid regular expression /{expr}/: {reason}")]
    InvalidRegex { expr: String, reason: String },

    /// Raised by user code: predicates, callables and handlers.
    #[error("{message}")]
    Custom { message: String },
}

/// Matching error.
#[derive(Clone, Debug, thiserror::Error)]
#[error("{message}")]
pub struct MatchError {
    pub kind: MatchErrorKind,
    /// Equals `kind.to_string()`.
    pub message: String,
    /// Subject the failing match was run against.
    pub subject: Option<Value>,
    /// Pattern that failed, for one-shot comparisons.
    pub pattern: Option<Pattern>,
}

impl MatchError {
    /// Create a user error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(MatchErrorKind::Custom {
            message: message.into(),
        })
    }

    fn from_kind(kind: MatchErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            subject: None,
            pattern: None,
        }
    }

    #[must_use]
    pub fn with_subject(mut self, subject: Value) -> Self {
        self.subject = Some(subject);
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn is_match_failure(&self) -> bool {
        matches!(self.kind, MatchErrorKind::MatchFailure { .. })
    }

    pub fn is_no_branch_matched(&self) -> bool {
        matches!(self.kind, MatchErrorKind::NoBranchMatched { .. })
    }
}

/// The subject does not match the pattern.
#[cold]
pub fn match_failure(subject: &Value, pattern: &Pattern) -> MatchError {
    MatchError::from_kind(MatchErrorKind::MatchFailure {
        subject: subject.preview(),
        pattern: pattern.preview(),
    })
    .with_subject(subject.clone())
    .with_pattern(pattern.clone())
}

/// No branch of a case dispatch matched.
#[cold]
pub fn no_branch_matched(subject: &Value, branches: usize) -> MatchError {
    MatchError::from_kind(MatchErrorKind::NoBranchMatched {
        subject: subject.preview(),
        branches,
    })
    .with_subject(subject.clone())
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize) -> MatchError {
    MatchError::from_kind(MatchErrorKind::RecursionLimitExceeded { limit })
}

#[cold]
pub fn invalid_regex(expr: &str, reason: &str) -> MatchError {
    MatchError::from_kind(MatchErrorKind::InvalidRegex {
        expr: expr.to_string(),
        reason: reason.to_string(),
    })
}
