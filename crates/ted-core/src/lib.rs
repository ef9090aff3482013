//! # ted-core
//!
//! Read and write values in a TOML document by dotted path.
//!
//! A document is a tree of tables, arrays and typed scalars. Reads walk the
//! tree one key at a time and report absence as `None`. Writes create any
//! missing ancestor tables but refuse to deepen a path through an existing
//! scalar or array. Raw text is turned into a typed scalar by an explicit
//! type tag (`string`, `bool`, `int`, `uint`, `float`, `time`).
//!
//! ## Quick start
//!
//! ```rust
//! use ted_core::{coerce_scalar, load_document, serialize_document, Scalar, ValueKind};
//!
//! let mut doc = load_document("[a]\nb = 1\n").unwrap();
//! doc.set("a.c", coerce_scalar("2", ValueKind::Int).unwrap()).unwrap();
//! assert_eq!(doc.get_scalar("a.c"), Some(&Scalar::Int(2)));
//!
//! doc.set("server.tls.enabled", true).unwrap();
//! assert!(serialize_document(&doc).unwrap().contains("enabled = true"));
//! ```
//!
//! ## Modules
//!
//! - [`types`] — `Node`, `NodeRef`, `Scalar`, `Table`
//! - [`path`] — dot-path parsing
//! - [`document`] — `Document` with `get` / `set`
//! - [`coerce`] — type tags and text → scalar coercion
//! - [`render`] — canonical text for printed values
//! - [`codec`] — TOML text ⇄ `Document`
//! - [`edit`] — one CLI invocation as a function of input and options
//! - [`error`] — error types

pub mod codec;
pub mod coerce;
pub mod document;
pub mod edit;
pub mod error;
pub mod path;
pub mod render;
pub mod types;

pub use codec::{load_document, serialize_document};
pub use coerce::{coerce_scalar, ValueKind};
pub use document::Document;
pub use edit::{Assignment, EditOptions, Outcome};
pub use error::{Result, TedError};
pub use path::Path;
pub use render::render;
pub use types::{Node, NodeRef, Scalar, Table};
