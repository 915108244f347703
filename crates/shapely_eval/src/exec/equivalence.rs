//! Structural equivalence between a pattern and a subject.
//!
//! Each node returns its own bindings (`Some(bindings)`) or no match
//! (`None`). Composite nodes merge their children's bindings only once the
//! composite itself has matched, so a failing node never leaks partial
//! bindings to its parent. `some` keeps only the winning alternative's
//! bindings.

use shapely_patterns::{
    recursion_limit_exceeded, Bindings, Combinator, MatchResult, Pattern, Value,
};
use shapely_stack::ensure_sufficient_stack;

/// Outcome of matching one node.
pub type NodeMatch = MatchResult<Option<Bindings>>;

#[inline]
fn matched_if(cond: bool) -> Option<Bindings> {
    cond.then(Bindings::new)
}

/// Try to match `pattern` against `subject`, returning bindings on success.
///
/// `max_depth` bounds the structural nesting the walk may descend into;
/// `None` means unbounded.
pub fn try_match(pattern: &Pattern, subject: &Value, max_depth: Option<usize>) -> NodeMatch {
    Walk { max_depth }.node(pattern, subject, 0)
}

/// Match and, on success only, merge bindings into `bindings`.
pub fn evaluate(
    pattern: &Pattern,
    subject: &Value,
    bindings: &mut Bindings,
    max_depth: Option<usize>,
) -> MatchResult<bool> {
    match try_match(pattern, subject, max_depth)? {
        Some(found) => {
            bindings.extend(found);
            Ok(true)
        }
        None => Ok(false),
    }
}

struct Walk {
    max_depth: Option<usize>,
}

impl Walk {
    fn node(&self, pattern: &Pattern, subject: &Value, depth: usize) -> NodeMatch {
        if let Some(limit) = self.max_depth {
            if depth > limit {
                return Err(recursion_limit_exceeded(limit));
            }
        }
        ensure_sufficient_stack(|| self.node_inner(pattern, subject, depth))
    }

    fn node_inner(&self, pattern: &Pattern, subject: &Value, depth: usize) -> NodeMatch {
        match pattern {
            Pattern::Missing => Ok(matched_if(subject.is_missing())),
            Pattern::Null => Ok(matched_if(subject.is_null())),
            Pattern::Bool(b) => Ok(matched_if(subject.as_bool() == Some(*b))),
            Pattern::Number(n) => Ok(matched_if(
                subject.as_number().is_some_and(|s| number_literal_eq(*n, s)),
            )),
            Pattern::Str(s) => Ok(matched_if(subject.as_str() == Some(s.as_str()))),

            Pattern::Regex(re) => Ok(matched_if(
                subject.as_str().is_some_and(|s| re.is_match(s)),
            )),

            // Errors from the predicate propagate as-is.
            Pattern::Predicate(func) => {
                let result = func.call(std::slice::from_ref(subject))?;
                Ok(matched_if(result.is_truthy()))
            }

            Pattern::Array(elements) => {
                let Some(items) = subject.as_array() else {
                    return Ok(None);
                };
                if items.len() < elements.len() {
                    return Ok(None);
                }
                let mut all_bindings = Bindings::new();
                for (pat, item) in elements.iter().zip(items) {
                    match self.node(pat, item, depth + 1)? {
                        Some(bindings) => all_bindings.extend(bindings),
                        None => return Ok(None),
                    }
                }
                Ok(Some(all_bindings))
            }

            Pattern::Object(fields) => {
                let Some(object) = subject.as_object() else {
                    return Ok(None);
                };
                let mut all_bindings = Bindings::new();
                for (name, pat) in fields.iter() {
                    let Some(field) = object.get(name) else {
                        return Ok(None);
                    };
                    match self.node(pat, field, depth + 1)? {
                        Some(bindings) => all_bindings.extend(bindings),
                        None => return Ok(None),
                    }
                }
                Ok(Some(all_bindings))
            }

            Pattern::Combinator(c) => self.combinator(c, subject, depth),
        }
    }

    fn combinator(&self, combinator: &Combinator, subject: &Value, depth: usize) -> NodeMatch {
        match combinator {
            Combinator::Any => Ok(Some(Bindings::new())),

            Combinator::Var { name, inner } => match self.node(inner, subject, depth + 1)? {
                Some(mut bindings) => {
                    bindings.insert(name.as_str(), subject.clone());
                    Ok(Some(bindings))
                }
                None => Ok(None),
            },

            Combinator::All(patterns) => {
                let mut all_bindings = Bindings::new();
                for pat in patterns.iter() {
                    match self.node(pat, subject, depth + 1)? {
                        Some(bindings) => all_bindings.extend(bindings),
                        None => return Ok(None),
                    }
                }
                Ok(Some(all_bindings))
            }

            Combinator::Some(patterns) => {
                for pat in patterns.iter() {
                    if let Some(bindings) = self.node(pat, subject, depth + 1)? {
                        return Ok(Some(bindings));
                    }
                }
                Ok(None)
            }

            Combinator::Range { low, high } => Ok(matched_if(
                subject
                    .as_number()
                    .is_some_and(|n| *low <= n && n < *high),
            )),

            Combinator::Numeric(test) => Ok(matched_if(
                subject.as_number().is_some_and(|n| test.test(n)),
            )),

            Combinator::Type(tag) => Ok(matched_if(tag.test(subject))),
        }
    }
}

/// Number literal equality: NaN matches NaN, and `0 == -0`.
fn number_literal_eq(literal: f64, subject: f64) -> bool {
    if literal.is_nan() {
        subject.is_nan()
    } else {
        literal == subject
    }
}
