//! Pattern descriptions.
//!
//! A `Pattern` is an immutable description of acceptable values. Patterns are
//! authored either from plain values (`Pattern::from(Value)`, where scalars
//! become literals, arrays and objects become shapes, regexes match strings and
//! callables become predicates) or through the combinator library.
//!
//! Patterns carry no match state and may be reused across any number of
//! matches, including from several threads at once.

mod combinator;

use std::fmt;

use regex::Regex;

use crate::render::{preview_pattern, Render};
use crate::value::{FunctionValue, Heap, Kind, Value};
use crate::{invalid_regex, MatchResult};

pub use combinator::{Combinator, NumericTest, TypeTag};

/// A pattern node.
#[derive(Clone)]
pub enum Pattern {
    // Literals
    /// Matches only a missing subject.
    Missing,
    /// Matches only null.
    Null,
    Bool(bool),
    /// NaN matches NaN; otherwise numeric equality, so `0` and `-0` match each other.
    Number(f64),
    Str(Heap<String>),

    /// Matches string subjects the expression finds a match in.
    Regex(Heap<Regex>),
    /// Matches when the callable returns a truthy value for the subject.
    Predicate(FunctionValue),

    // Shapes
    /// Prefix match over an array subject.
    Array(Heap<Vec<Pattern>>),
    /// Open match over an object subject, checked in field order.
    Object(Heap<Vec<(String, Pattern)>>),

    Combinator(Combinator),
}

impl Pattern {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Pattern::Str(Heap::new(s.into()))
    }

    /// Array shape from element patterns.
    pub fn array<P: Into<Pattern>>(elements: impl IntoIterator<Item = P>) -> Self {
        Pattern::Array(Heap::new(elements.into_iter().map(Into::into).collect()))
    }

    /// Object shape from `(field, pattern)` pairs.
    ///
    /// ```text
    /// let shape = Pattern::object([("a", number()), ("b", string())]);
    /// ```
    pub fn object<K, P>(fields: impl IntoIterator<Item = (K, P)>) -> Self
    where
        K: Into<String>,
        P: Into<Pattern>,
    {
        Pattern::Object(Heap::new(
            fields
                .into_iter()
                .map(|(k, p)| (k.into(), p.into()))
                .collect(),
        ))
    }

    /// Compile a regular-expression pattern.
    pub fn regex(expr: &str) -> MatchResult<Self> {
        Regex::new(expr)
            .map(|re| Pattern::Regex(Heap::new(re)))
            .map_err(|e| invalid_regex(expr, &e.to_string()))
    }

    /// Predicate pattern from a boolean test.
    pub fn predicate<F>(name: &str, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Pattern::Predicate(FunctionValue::predicate(name, test))
    }

    /// Classify this pattern.
    pub fn kind(&self) -> Kind {
        match self {
            Pattern::Missing => Kind::Missing,
            Pattern::Null => Kind::Null,
            Pattern::Bool(_) => Kind::Boolean,
            Pattern::Number(_) => Kind::Number,
            Pattern::Str(_) => Kind::String,
            Pattern::Regex(_) => Kind::RegExp,
            Pattern::Predicate(_) => Kind::Callable,
            Pattern::Array(_) => Kind::Array,
            Pattern::Object(_) => Kind::Object,
            Pattern::Combinator(Combinator::Var { .. }) => Kind::Binding,
            Pattern::Combinator(_) => Kind::Combinator,
        }
    }

    /// Short rendering for messages and logs: deep nesting is elided and
    /// long output is cut with `...`.
    pub fn preview(&self) -> String {
        preview_pattern(self)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Render::FULL.pattern(f, self, 0)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({self})")
    }
}

// Literal authoring

impl From<Value> for Pattern {
    fn from(value: Value) -> Self {
        Pattern::from(&value)
    }
}

impl From<&Value> for Pattern {
    fn from(value: &Value) -> Self {
        match value {
            Value::Missing => Pattern::Missing,
            Value::Null => Pattern::Null,
            Value::Bool(b) => Pattern::Bool(*b),
            Value::Number(n) => Pattern::Number(*n),
            Value::Str(s) => Pattern::Str(s.clone()),
            Value::Array(items) => Pattern::array(items.iter()),
            Value::Object(fields) => {
                let mut entries: Vec<_> = fields.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                Pattern::object(entries.into_iter().map(|(k, v)| (k.clone(), v)))
            }
            Value::Regex(re) => Pattern::Regex(re.clone()),
            Value::Function(func) => Pattern::Predicate(func.clone()),
        }
    }
}

impl From<Combinator> for Pattern {
    fn from(c: Combinator) -> Self {
        Pattern::Combinator(c)
    }
}

impl From<FunctionValue> for Pattern {
    fn from(func: FunctionValue) -> Self {
        Pattern::Predicate(func)
    }
}

impl From<bool> for Pattern {
    fn from(b: bool) -> Self {
        Pattern::Bool(b)
    }
}

impl From<f64> for Pattern {
    fn from(n: f64) -> Self {
        Pattern::Number(n)
    }
}

impl From<i32> for Pattern {
    fn from(n: i32) -> Self {
        Pattern::Number(f64::from(n))
    }
}

impl From<u32> for Pattern {
    fn from(n: u32) -> Self {
        Pattern::Number(f64::from(n))
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Pattern::string(s)
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Pattern::string(s)
    }
}

impl From<Vec<Pattern>> for Pattern {
    fn from(elements: Vec<Pattern>) -> Self {
        Pattern::Array(Heap::new(elements))
    }
}

/// `None` is the missing-value literal.
impl<T: Into<Pattern>> From<Option<T>> for Pattern {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Pattern::Missing, Into::into)
    }
}

#[cfg(test)]
mod tests;
