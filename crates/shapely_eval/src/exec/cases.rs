//! Multi-branch case dispatch.
//!
//! Branches are collected first, then tried in registration order against
//! one subject. The first branch whose pattern matches runs its handler with
//! that match's bindings and the caller's context; later branches are never
//! evaluated. If no branch matches, dispatch fails with `NoBranchMatched`.

use shapely_patterns::{no_branch_matched, Bindings, MatchResult, Pattern, Value};

use super::equivalence::try_match;

/// Branch handler: receives the bindings and the execution context.
pub type Handler<'a, C, R> = Box<dyn FnOnce(&Bindings, &mut C) -> MatchResult<R> + 'a>;

/// A registered `(pattern, handler)` pair.
pub struct Branch<'a, C, R> {
    pattern: Pattern,
    handler: Handler<'a, C, R>,
}

impl<C, R> Branch<'_, C, R> {
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

/// Branch collector handed to the builder closure.
pub struct Cases<'a, C, R> {
    branches: Vec<Branch<'a, C, R>>,
}

impl<'a, C, R> Cases<'a, C, R> {
    pub fn new() -> Self {
        Cases {
            branches: Vec::new(),
        }
    }

    /// Register a branch. Nothing is matched until dispatch.
    pub fn when<P, F>(&mut self, pattern: P, handler: F) -> &mut Self
    where
        P: Into<Pattern>,
        F: FnOnce(&Bindings, &mut C) -> MatchResult<R> + 'a,
    {
        self.branches.push(Branch {
            pattern: pattern.into(),
            handler: Box::new(handler),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn branches(&self) -> &[Branch<'a, C, R>] {
        &self.branches
    }
}

impl<C, R> Default for Cases<'_, C, R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate collected branches against `subject`; first match wins.
pub fn eval_cases<C, R>(
    subject: &Value,
    ctx: &mut C,
    cases: Cases<'_, C, R>,
    max_depth: Option<usize>,
) -> MatchResult<R> {
    let total = cases.len();

    for (index, branch) in cases.branches.into_iter().enumerate() {
        if let Some(bindings) = try_match(&branch.pattern, subject, max_depth)? {
            tracing::debug!(
                branch = index,
                bindings = bindings.len(),
                "case branch matched"
            );
            return (branch.handler)(&bindings, ctx);
        }
        tracing::trace!(
            branch = index,
            pattern = %branch.pattern.preview(),
            "case branch rejected"
        );
    }

    tracing::debug!(branches = total, subject = %subject.preview(), "no case branch matched");
    Err(no_branch_matched(subject, total))
}

#[cfg(test)]
mod tests;
