//! Dot-separated paths into a document.

use std::fmt;

use crate::error::{Result, TedError};

/// A parsed path: the ordered table keys from the root to a node.
///
/// `"a.b.c"` becomes `["a", "b", "c"]`. The empty string is the root path.
/// Segments are taken verbatim; there is no quoting or escaping, so a key
/// containing `.` cannot be addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<'a> {
    segments: Vec<&'a str>,
}

impl<'a> Path<'a> {
    /// Split `raw` on dots. Fails with [`TedError::InvalidPath`] when any
    /// segment is empty (`"a..b"`, `".a"`, `"a."`).
    pub fn parse(raw: &'a str) -> Result<Self> {
        if raw.is_empty() {
            return Ok(Self::root());
        }
        let segments: Vec<&str> = raw.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(TedError::InvalidPath(raw.to_string()));
        }
        Ok(Self { segments })
    }

    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The dotted form of the first `depth` segments.
    pub fn prefix(&self, depth: usize) -> String {
        self.segments[..depth.min(self.segments.len())].join(".")
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}
