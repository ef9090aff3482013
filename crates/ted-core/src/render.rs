//! Canonical text for values printed by a read.
//!
//! - strings print raw, without quotes
//! - booleans print `true` / `false`, integers in decimal
//! - floats print as they are written to the file, minus a trailing `.0`
//!   (`3.14`, `1`, `nan`, `inf`)
//! - timestamps print as RFC 3339, `Z` for UTC
//! - arrays print as an inline TOML array, e.g. `[1, 2, "x"]`
//! - tables print as a TOML fragment

use std::fmt;

use chrono::SecondsFormat;

use crate::codec::{node_to_toml, serialize_table};
use crate::error::Result;
use crate::types::{NodeRef, Scalar};

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => f.write_str(s),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::UInt(u) => write!(f, "{u}"),
            Scalar::Float(x) => {
                let text = toml::Value::Float(*x).to_string();
                f.write_str(text.strip_suffix(".0").unwrap_or(&text))
            }
            Scalar::Timestamp(ts) => {
                f.write_str(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Scalar::LocalDateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            Scalar::LocalDate(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Scalar::LocalTime(t) => write!(f, "{}", t.format("%H:%M:%S%.f")),
        }
    }
}

/// Render any node for display.
///
/// Fails only when an array or table holds a value TOML cannot express
/// (an unsigned integer above `i64::MAX`).
pub fn render(node: NodeRef<'_>) -> Result<String> {
    match node {
        NodeRef::Scalar(scalar) => Ok(scalar.to_string()),
        NodeRef::Array(items) => {
            let values = items.iter().map(node_to_toml).collect::<Result<Vec<_>>>()?;
            Ok(toml::Value::Array(values).to_string())
        }
        NodeRef::Table(table) => serialize_table(table),
    }
}
