//! Value classification.
//!
//! Every value and every pattern falls into exactly one [`Kind`]. The
//! matcher selects its strategy from the pattern's kind; numeric predicates
//! additionally look at the [`NumberClass`] of a number subject.

use std::fmt;

/// The closed set of runtime kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Missing,
    Null,
    Boolean,
    Number,
    String,
    Callable,
    Array,
    Object,
    RegExp,
    /// Combinator node built by the combinator library.
    Combinator,
    /// A `var` combinator requesting a named binding.
    Binding,
}

impl Kind {
    /// Lowercase name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Missing => "missing",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Callable => "callable",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::RegExp => "regexp",
            Kind::Combinator => "combinator",
            Kind::Binding => "binding",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sub-classification of numbers.
///
/// Signed zeros are told apart by sign bit, not by comparison, since
/// `0.0 == -0.0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumberClass {
    Nan,
    PlusZero,
    MinusZero,
    /// Finite and non-zero.
    Finite,
    Infinite,
}

impl NumberClass {
    /// Classify a number.
    pub fn of(n: f64) -> Self {
        if n.is_nan() {
            NumberClass::Nan
        } else if n.is_infinite() {
            NumberClass::Infinite
        } else if n == 0.0 {
            if n.is_sign_negative() {
                NumberClass::MinusZero
            } else {
                NumberClass::PlusZero
            }
        } else {
            NumberClass::Finite
        }
    }

    pub fn is_zero(self) -> bool {
        matches!(self, NumberClass::PlusZero | NumberClass::MinusZero)
    }
}
