//! Combinator nodes.
//!
//! Each node is a tag plus payload; the evaluator dispatches on the tag.
//! The leaf tests (`NumericTest`, `TypeTag`) are pure functions of the
//! subject and live here next to their tags.

use std::fmt;

use super::Pattern;
use crate::render::Render;
use crate::value::{Heap, NumberClass, Value};

/// A combinator pattern node.
#[derive(Clone)]
pub enum Combinator {
    /// Matches anything, binds nothing.
    Any,
    /// Matches when `inner` matches, then binds `name` to the subject.
    Var {
        name: Heap<String>,
        inner: Heap<Pattern>,
    },
    /// Conjunction. Empty conjunction matches.
    All(Heap<Vec<Pattern>>),
    /// Disjunction, first match wins. Empty disjunction never matches.
    Some(Heap<Vec<Pattern>>),
    /// Half-open numeric interval `low <= x < high`.
    Range { low: f64, high: f64 },
    Numeric(NumericTest),
    Type(TypeTag),
}

impl Combinator {
    pub(crate) fn var(name: String, inner: Pattern) -> Self {
        Combinator::Var {
            name: Heap::new(name),
            inner: Heap::new(inner),
        }
    }

    pub(crate) fn all(patterns: Vec<Pattern>) -> Self {
        Combinator::All(Heap::new(patterns))
    }

    pub(crate) fn some(patterns: Vec<Pattern>) -> Self {
        Combinator::Some(Heap::new(patterns))
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Render::FULL.combinator(f, self, 0)
    }
}

/// Predicates over number subjects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumericTest {
    /// Any number, NaN included.
    Number,
    /// Whole number or an infinity.
    Integer,
    /// Whole number in `[-2^31, 2^31 - 1]`.
    Int32,
    /// Whole number in `[0, 2^32 - 1]`.
    Uint32,
    Finite,
    Infinite,
    /// Greater than zero, or `+0`.
    Positive,
    /// Less than zero, or `-0`.
    Negative,
    /// `x >= 0`, so both zeros.
    Nonnegative,
    PlusZero,
    MinusZero,
}

impl NumericTest {
    pub fn name(self) -> &'static str {
        match self {
            NumericTest::Number => "number",
            NumericTest::Integer => "integer",
            NumericTest::Int32 => "int32",
            NumericTest::Uint32 => "uint32",
            NumericTest::Finite => "finite",
            NumericTest::Infinite => "infinite",
            NumericTest::Positive => "positive",
            NumericTest::Negative => "negative",
            NumericTest::Nonnegative => "nonnegative",
            NumericTest::PlusZero => "plus_zero",
            NumericTest::MinusZero => "minus_zero",
        }
    }

    /// Apply the test to a number.
    pub fn test(self, n: f64) -> bool {
        let class = NumberClass::of(n);
        match self {
            NumericTest::Number => true,
            NumericTest::Integer => match class {
                NumberClass::Nan => false,
                NumberClass::Infinite => true,
                _ => n.trunc() == n,
            },
            NumericTest::Int32 => {
                n.trunc() == n && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&n)
            }
            NumericTest::Uint32 => n.trunc() == n && (0.0..=f64::from(u32::MAX)).contains(&n),
            NumericTest::Finite => n.is_finite(),
            NumericTest::Infinite => class == NumberClass::Infinite,
            NumericTest::Positive => n > 0.0 || class == NumberClass::PlusZero,
            NumericTest::Negative => n < 0.0 || class == NumberClass::MinusZero,
            NumericTest::Nonnegative => n >= 0.0,
            NumericTest::PlusZero => class == NumberClass::PlusZero,
            NumericTest::MinusZero => class == NumberClass::MinusZero,
        }
    }
}

/// Predicates over value kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    String,
    Boolean,
    /// Keyed mappings only; arrays and null are excluded.
    Object,
}

impl TypeTag {
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Boolean => "boolean",
            TypeTag::Object => "object",
        }
    }

    pub fn test(self, value: &Value) -> bool {
        match self {
            TypeTag::String => matches!(value, Value::Str(_)),
            TypeTag::Boolean => matches!(value, Value::Bool(_)),
            TypeTag::Object => matches!(value, Value::Object(_)),
        }
    }
}
