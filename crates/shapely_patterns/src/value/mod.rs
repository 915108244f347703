//! Runtime subject values.
//!
//! # Heap Enforcement
//!
//! Heap variants hold a `Heap<T>`, whose constructor is crate-private.
//! Build them through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");                         // OK
//! let xs = Value::array([Value::from(1), Value::from(2)]); // OK
//! let o = Value::object([("a", Value::from(42))]);       // OK
//! let s = Value::Str(Heap::new(...));                     // ERROR: Heap::new is pub(crate)
//! ```
//!
//! # Numbers
//!
//! There is a single number kind backed by `f64`, so NaN, the infinities
//! and both signed zeros are ordinary values. `PartialEq` follows IEEE
//! comparison; the matcher applies its own literal rules on top.

mod composite;
mod heap;
mod kind;

use std::fmt;

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::render::{preview_value, Render};
use crate::{invalid_regex, MatchResult};

pub use composite::{FunctionValue, NativeFn};
pub use heap::Heap;
pub use kind::{Kind, NumberClass};

/// Shared missing value, handed out where a reference is needed.
pub(crate) static MISSING: Value = Value::Missing;

/// A dynamically typed runtime value.
#[derive(Clone)]
pub enum Value {
    // Primitives (inline, no heap allocation)
    /// No value was supplied.
    Missing,
    /// Explicit null, distinct from missing.
    Null,
    Bool(bool),
    Number(f64),

    // Heap Types
    Str(Heap<String>),
    /// Ordered sequence.
    Array(Heap<Vec<Value>>),
    /// String-keyed mapping.
    Object(Heap<FxHashMap<String, Value>>),
    /// Compiled regular expression.
    Regex(Heap<Regex>),

    /// Host callable.
    Function(FunctionValue),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create an array value.
    ///
    /// ```text
    /// let empty = Value::array([]);
    /// let nums = Value::array([Value::from(1), Value::from(2)]);
    /// ```
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(Heap::new(items.into_iter().collect()))
    }

    /// Create an object value. Later duplicates of a key replace earlier ones.
    ///
    /// ```text
    /// let point = Value::object([("x", Value::from(1)), ("y", Value::from(2))]);
    /// ```
    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Object(Heap::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Compile a regular expression value.
    pub fn regex(expr: &str) -> MatchResult<Self> {
        Regex::new(expr)
            .map(|re| Value::Regex(Heap::new(re)))
            .map_err(|e| invalid_regex(expr, &e.to_string()))
    }

    /// Wrap an already compiled regular expression.
    pub fn from_regex(re: Regex) -> Self {
        Value::Regex(Heap::new(re))
    }

    /// Create a callable value.
    pub fn function<F>(name: &str, func: F) -> Self
    where
        F: Fn(&[Value]) -> MatchResult<Value> + Send + Sync + 'static,
    {
        Value::Function(FunctionValue::new(name, func))
    }
}

// Value Methods

impl Value {
    /// Classify this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Missing => Kind::Missing,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::Str(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Regex(_) => Kind::RegExp,
            Value::Function(_) => Kind::Callable,
        }
    }

    /// Number sub-classification, for number values only.
    pub fn number_class(&self) -> Option<NumberClass> {
        self.as_number().map(NumberClass::of)
    }

    /// Truthiness as used for predicate results.
    ///
    /// Missing, null, `false`, both zeros, NaN and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Missing | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Regex(_) | Value::Function(_) => true,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&FxHashMap<String, Value>> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Look up an object field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|fields| fields.get(key))
    }

    /// Short rendering for messages and logs: deep nesting is elided and
    /// long output is cut with `...`.
    pub fn preview(&self) -> String {
        preview_value(self)
    }
}

/// Object keys in sorted order, for deterministic rendering.
pub(crate) fn sorted_fields(fields: &FxHashMap<String, Value>) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = fields.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

// Trait Implementations

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Render::FULL.value(f, self, 0)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => write!(f, "Missing"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n:?})"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Array(items) => write!(f, "Array({:?})", &**items),
            Value::Object(fields) => f
                .debug_map()
                .entries(sorted_fields(fields))
                .finish(),
            Value::Regex(re) => write!(f, "Regex({:?})", re.as_str()),
            Value::Function(func) => write!(f, "{func:?}"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Missing, Value::Missing) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len() && a.iter().all(|(k, v)| b.get(k).is_some_and(|bv| v == bv))
            }
            (Value::Regex(a), Value::Regex(b)) => a.as_str() == b.as_str(),
            (Value::Function(a), Value::Function(b)) => a.same_as(b),
            _ => false,
        }
    }
}

// Conversions

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }
}

impl From<FunctionValue> for Value {
    fn from(func: FunctionValue) -> Self {
        Value::Function(func)
    }
}

/// `None` is the missing value.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Missing, Into::into)
    }
}
