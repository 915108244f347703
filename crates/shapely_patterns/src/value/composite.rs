//! Callable values.
//!
//! A `FunctionValue` is a host closure with a display name. Used as a
//! subject it is just another value; used as a pattern it becomes a
//! predicate that receives the subject as its only argument.

use std::fmt;
use std::sync::Arc;

use super::{Value, MISSING};
use crate::MatchResult;

/// Signature of a native callable.
///
/// Errors returned from the closure propagate through the matcher unchanged.
pub type NativeFn = dyn Fn(&[Value]) -> MatchResult<Value> + Send + Sync;

/// A named, shareable callable.
#[derive(Clone)]
pub struct FunctionValue {
    name: Arc<str>,
    func: Arc<NativeFn>,
}

impl FunctionValue {
    /// Wrap a closure taking any number of arguments.
    pub fn new<F>(name: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&[Value]) -> MatchResult<Value> + Send + Sync + 'static,
    {
        FunctionValue {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Wrap a single-argument boolean test.
    ///
    /// Called with no arguments, the test sees `Value::Missing`.
    pub fn predicate<F>(name: impl Into<Arc<str>>, test: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        FunctionValue::new(name, move |args: &[Value]| {
            let arg = args.first().unwrap_or(&MISSING);
            Ok(Value::Bool(test(arg)))
        })
    }

    /// Invoke the callable.
    #[inline]
    pub fn call(&self, args: &[Value]) -> MatchResult<Value> {
        (self.func)(args)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identity comparison: two handles are equal only if they share a closure.
    pub fn same_as(&self, other: &FunctionValue) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionValue({})", self.name)
    }
}
