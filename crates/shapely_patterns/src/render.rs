//! Text rendering for values and patterns.
//!
//! `Display` renders a tree in full. Error messages and log fields use a
//! preview instead: composites nested `PREVIEW_DEPTH` levels down are elided
//! and the text is cut after `PREVIEW_LEN` bytes. Both walks run under the
//! stack guard, so rendering a subject is as safe as matching it.

use std::fmt::{self, Write};

use shapely_stack::ensure_sufficient_stack;

use crate::pattern::{Combinator, Pattern};
use crate::value::{sorted_fields, Value};

/// Nesting level from which previews elide composites.
pub(crate) const PREVIEW_DEPTH: usize = 3;

/// Maximum preview length in bytes, before the trailing ellipsis.
pub(crate) const PREVIEW_LEN: usize = 64;

const ELLIPSIS: &str = "...";

/// A rendering walk. `max_depth: None` renders every level.
#[derive(Clone, Copy)]
pub(crate) struct Render {
    max_depth: Option<usize>,
}

impl Render {
    pub(crate) const FULL: Render = Render { max_depth: None };
    const PREVIEW: Render = Render {
        max_depth: Some(PREVIEW_DEPTH),
    };

    fn elide(self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }

    pub(crate) fn value<W: Write>(self, out: &mut W, value: &Value, depth: usize) -> fmt::Result {
        ensure_sufficient_stack(|| self.value_inner(out, value, depth))
    }

    fn value_inner<W: Write>(self, out: &mut W, value: &Value, depth: usize) -> fmt::Result {
        match value {
            Value::Missing => out.write_str("missing"),
            Value::Null => out.write_str("null"),
            Value::Bool(b) => write!(out, "{b}"),
            Value::Number(n) => write_number(out, *n),
            Value::Str(s) => write!(out, "{:?}", s.as_str()),
            Value::Array(items) => {
                if items.is_empty() {
                    return out.write_str("[]");
                }
                if self.elide(depth) {
                    return out.write_str("[...]");
                }
                out.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.write_str(", ")?;
                    }
                    self.value(out, item, depth + 1)?;
                }
                out.write_char(']')
            }
            Value::Object(fields) => {
                if fields.is_empty() {
                    return out.write_str("{}");
                }
                if self.elide(depth) {
                    return out.write_str("{...}");
                }
                out.write_char('{')?;
                for (i, (k, v)) in sorted_fields(fields).into_iter().enumerate() {
                    if i > 0 {
                        out.write_str(", ")?;
                    }
                    write!(out, "{k}: ")?;
                    self.value(out, v, depth + 1)?;
                }
                out.write_char('}')
            }
            Value::Regex(re) => write!(out, "/{}/", re.as_str()),
            Value::Function(func) => write!(out, "<function {}>", func.name()),
        }
    }

    pub(crate) fn pattern<W: Write>(
        self,
        out: &mut W,
        pattern: &Pattern,
        depth: usize,
    ) -> fmt::Result {
        ensure_sufficient_stack(|| self.pattern_inner(out, pattern, depth))
    }

    fn pattern_inner<W: Write>(self, out: &mut W, pattern: &Pattern, depth: usize) -> fmt::Result {
        match pattern {
            Pattern::Missing => out.write_str("missing"),
            Pattern::Null => out.write_str("null"),
            Pattern::Bool(b) => write!(out, "{b}"),
            Pattern::Number(n) => write_number(out, *n),
            Pattern::Str(s) => write!(out, "{:?}", s.as_str()),
            Pattern::Regex(re) => write!(out, "/{}/", re.as_str()),
            Pattern::Predicate(func) => write!(out, "<predicate {}>", func.name()),
            Pattern::Array(elements) => {
                if elements.is_empty() {
                    return out.write_str("[]");
                }
                if self.elide(depth) {
                    return out.write_str("[...]");
                }
                out.write_char('[')?;
                self.list(out, elements, depth + 1)?;
                out.write_char(']')
            }
            Pattern::Object(fields) => {
                if fields.is_empty() {
                    return out.write_str("{}");
                }
                if self.elide(depth) {
                    return out.write_str("{...}");
                }
                out.write_char('{')?;
                for (i, (k, p)) in fields.iter().enumerate() {
                    if i > 0 {
                        out.write_str(", ")?;
                    }
                    write!(out, "{k}: ")?;
                    self.pattern(out, p, depth + 1)?;
                }
                out.write_char('}')
            }
            Pattern::Combinator(c) => self.combinator(out, c, depth),
        }
    }

    pub(crate) fn combinator<W: Write>(
        self,
        out: &mut W,
        combinator: &Combinator,
        depth: usize,
    ) -> fmt::Result {
        match combinator {
            Combinator::Any => out.write_str("any"),
            Combinator::Var { name, inner } => {
                if let Pattern::Combinator(Combinator::Any) = &**inner {
                    return write!(out, "var({})", name.as_str());
                }
                write!(out, "var({}, ", name.as_str())?;
                if self.elide(depth) {
                    out.write_str(ELLIPSIS)?;
                } else {
                    self.pattern(out, inner, depth + 1)?;
                }
                out.write_char(')')
            }
            Combinator::All(patterns) => self.call(out, "all", patterns, depth),
            Combinator::Some(patterns) => self.call(out, "some", patterns, depth),
            Combinator::Range { low, high } => {
                out.write_str("range(")?;
                write_number(out, *low)?;
                out.write_str(", ")?;
                write_number(out, *high)?;
                out.write_char(')')
            }
            Combinator::Numeric(test) => out.write_str(test.name()),
            Combinator::Type(tag) => out.write_str(tag.name()),
        }
    }

    fn call<W: Write>(
        self,
        out: &mut W,
        name: &str,
        patterns: &[Pattern],
        depth: usize,
    ) -> fmt::Result {
        write!(out, "{name}(")?;
        if !patterns.is_empty() && self.elide(depth) {
            out.write_str(ELLIPSIS)?;
        } else {
            self.list(out, patterns, depth + 1)?;
        }
        out.write_char(')')
    }

    fn list<W: Write>(self, out: &mut W, patterns: &[Pattern], depth: usize) -> fmt::Result {
        for (i, p) in patterns.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            self.pattern(out, p, depth)?;
        }
        Ok(())
    }
}

/// Write a number the way dynamic-language users expect to read it.
fn write_number<W: Write>(out: &mut W, n: f64) -> fmt::Result {
    if n.is_nan() {
        out.write_str("NaN")
    } else if n.is_infinite() {
        out.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(out, "{n}")
    }
}

/// Bounded rendering of a value.
pub(crate) fn preview_value(value: &Value) -> String {
    preview(|out| Render::PREVIEW.value(out, value, 0))
}

/// Bounded rendering of a pattern.
pub(crate) fn preview_pattern(pattern: &Pattern) -> String {
    preview(|out| Render::PREVIEW.pattern(out, pattern, 0))
}

fn preview(write: impl FnOnce(&mut Capped) -> fmt::Result) -> String {
    let mut out = Capped {
        text: String::new(),
    };
    // `Capped` fails only once the cap is reached.
    if write(&mut out).is_err() {
        out.text.push_str(ELLIPSIS);
    }
    out.text
}

/// Writer that stops the walk once `PREVIEW_LEN` bytes are written.
struct Capped {
    text: String,
}

impl Write for Capped {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = PREVIEW_LEN.saturating_sub(self.text.len());
        if s.len() <= room {
            self.text.push_str(s);
            return Ok(());
        }
        let mut end = room;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        self.text.push_str(&s[..end]);
        Err(fmt::Error)
    }
}
