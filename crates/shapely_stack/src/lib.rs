//! Stack growth for deep structural recursion.
//!
//! Matching walks the pattern and the subject in lockstep, one native frame
//! per nesting level. A subject built from user data can be nested far deeper
//! than anything a hand-written pattern would reach, so every recursive step
//! of the engine goes through [`ensure_sufficient_stack`].
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker` allocates a fresh segment when the
//!   remaining stack drops below the red zone.
//! - **WASM targets**: passthrough.
//!
//! # Usage
//!
//! ```text
//! fn walk(pattern: &Pattern, subject: &Value) -> MatchResult<Option<Bindings>> {
//!     ensure_sufficient_stack(|| match_node(pattern, subject))
//! }
//! ```

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
