//! Error types for path resolution, mutation, coercion and the TOML codec.

use thiserror::Error;

/// Errors that can occur while editing a document.
///
/// A missing path on the read side is not an error: [`crate::Document::get`]
/// returns `None` for it.
#[derive(Error, Debug)]
pub enum TedError {
    /// A `set` walk reached a scalar or array before the last segment.
    /// `path` is the prefix that names the offending node.
    #[error("path conflict: '{path}' holds a non-table value")]
    PathConflict { path: String },

    /// The path is empty or has an empty segment where a key is required.
    #[error("invalid path: '{0}'")]
    InvalidPath(String),

    /// The raw text does not parse as the requested kind.
    #[error("'{text}' could not be interpreted as {kind}")]
    InvalidTypeValue { text: String, kind: &'static str },

    /// The type tag is not one of the recognised kinds.
    #[error("unknown type '{0}' (expected one of bool, uint, int, string, float, time)")]
    UnknownTypeTag(String),

    /// A `path=value` assignment without the `=`.
    #[error("invalid assignment '{0}': expected path=value")]
    InvalidAssignment(String),

    /// The input was not valid TOML.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document could not be rendered as TOML.
    #[error("TOML serialize error: {0}")]
    Serialize(String),
}

/// Convenience alias used throughout ted-core.
pub type Result<T> = std::result::Result<T, TedError>;
