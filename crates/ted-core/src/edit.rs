//! One `ted` invocation as a pure function: input text and options in,
//! text to print or to write back out.
//!
//! The host owns all I/O. [`run`] loads the document, applies any
//! `path=value` assignments, then either reads the value at `path` (when no
//! value is given) or coerces and sets it, and finally serializes.

use std::str::FromStr;

use tracing::debug;

use crate::codec::{load_document, serialize_document};
use crate::coerce::{coerce_scalar, ValueKind};
use crate::document::Document;
use crate::error::{Result, TedError};
use crate::render::render;

/// A `path=value` pair with a fixed kind, as given to `--set-<kind>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub kind: ValueKind,
    pub path: String,
    pub raw: String,
}

impl Assignment {
    /// Split `pair` at its first `=`. The value may itself contain `=`.
    pub fn parse(kind: ValueKind, pair: &str) -> Result<Self> {
        let (path, raw) = pair
            .split_once('=')
            .ok_or_else(|| TedError::InvalidAssignment(pair.to_string()))?;
        Ok(Self {
            kind,
            path: path.to_string(),
            raw: raw.to_string(),
        })
    }

    /// Coerce and set this assignment on `document`.
    pub fn apply(&self, document: &mut Document) -> Result<()> {
        let value = coerce_scalar(&self.raw, self.kind)?;
        document.set(&self.path, value)
    }
}

/// Everything the host passes in for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditOptions {
    /// Dot path to read or write. `None` or empty: just re-serialize.
    pub path: Option<String>,
    /// Raw value text. `None` or empty with a `path` means read.
    pub value: Option<String>,
    /// Type tag for `value` (`s`, `bool`, `t`, ...). Empty means string.
    pub kind: String,
    /// Applied in order before the read or write.
    pub assignments: Vec<Assignment>,
}

impl EditOptions {
    fn target(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }

    fn raw_value(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }

    fn value_kind(&self) -> Result<ValueKind> {
        if self.kind.is_empty() {
            return Ok(ValueKind::default());
        }
        ValueKind::from_str(&self.kind)
    }
}

/// What the host should do with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A read found a value; print this text. Nothing is written.
    Print(String),
    /// A read found nothing at the path. Nothing is written.
    NotFound,
    /// The full document to write to the output destination.
    Write(String),
}

/// Run one edit against `input` (TOML text).
///
/// # Errors
///
/// Parse failures, unknown type tags, values that fail coercion, malformed
/// assignments, path conflicts, and documents that cannot be serialized.
/// On any error no output is produced.
pub fn run(input: &str, options: &EditOptions) -> Result<Outcome> {
    let mut document = load_document(input)?;

    for assignment in &options.assignments {
        debug!(path = %assignment.path, kind = %assignment.kind, "applying assignment");
        assignment.apply(&mut document)?;
    }

    if let Some(path) = options.target() {
        match options.raw_value() {
            None => {
                return match document.get(path) {
                    Some(node) => Ok(Outcome::Print(render(node)?)),
                    None => {
                        debug!(path, "no value at path");
                        Ok(Outcome::NotFound)
                    }
                };
            }
            Some(raw) => {
                let kind = options.value_kind()?;
                let value = coerce_scalar(raw, kind)?;
                document.set(path, value)?;
                debug!(path, %kind, "value set");
            }
        }
    }

    Ok(Outcome::Write(serialize_document(&document)?))
}
