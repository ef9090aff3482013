//! Text → typed scalar coercion, driven by a type tag.
//!
//! | tag                       | accepted text                                   | result      |
//! |---------------------------|-------------------------------------------------|-------------|
//! | `s`, `string` (default)   | anything, verbatim                              | `String`    |
//! | `b`, `bool`               | `t,true,yes,y` / `f,false,no,n`, any case       | `Bool`      |
//! | `i`, `int`                | base-10 signed integer, optional `+`/`-`        | `Int`       |
//! | `u`, `uint`               | base-10 unsigned integer, no sign               | `UInt`      |
//! | `f`, `float`              | decimal or exponential literal                  | `Float`     |
//! | `t`, `time`, `timestamp`  | RFC 3339 date-time, upper-case `T` and `Z`      | `Timestamp` |
//!
//! There is no cross-kind fallback: `"3"` is a fine float but not a bool.

use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use tracing::trace;

use crate::error::{Result, TedError};
use crate::types::Scalar;

/// The kind a raw value should be coerced to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValueKind {
    #[default]
    String,
    Bool,
    Int,
    UInt,
    Float,
    Time,
}

impl ValueKind {
    pub const ALL: [ValueKind; 6] = [
        ValueKind::String,
        ValueKind::Bool,
        ValueKind::Int,
        ValueKind::UInt,
        ValueKind::Float,
        ValueKind::Time,
    ];

    /// Long tag name.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Float => "float",
            ValueKind::Time => "time",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = TedError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "s" | "string" => Ok(ValueKind::String),
            "b" | "bool" => Ok(ValueKind::Bool),
            "i" | "int" => Ok(ValueKind::Int),
            "u" | "uint" => Ok(ValueKind::UInt),
            "f" | "float" => Ok(ValueKind::Float),
            "t" | "time" | "timestamp" => Ok(ValueKind::Time),
            other => Err(TedError::UnknownTypeTag(other.to_string())),
        }
    }
}

/// Coerce `text` into a scalar of the requested `kind`.
///
/// # Errors
///
/// [`TedError::InvalidTypeValue`] when the text does not parse as `kind`.
///
/// # Examples
///
/// ```
/// use ted_core::{coerce_scalar, Scalar, ValueKind};
///
/// assert_eq!(coerce_scalar("42", ValueKind::Int).unwrap(), Scalar::Int(42));
/// assert_eq!(coerce_scalar("Yes", ValueKind::Bool).unwrap(), Scalar::Bool(true));
/// assert!(coerce_scalar("nope", ValueKind::Int).is_err());
/// ```
pub fn coerce_scalar(text: &str, kind: ValueKind) -> Result<Scalar> {
    trace!(text, %kind, "coercing");
    let invalid = || TedError::InvalidTypeValue {
        text: text.to_string(),
        kind: kind.name(),
    };
    let scalar = match kind {
        ValueKind::String => Scalar::String(text.to_string()),
        ValueKind::Bool => Scalar::Bool(parse_bool(text).ok_or_else(invalid)?),
        ValueKind::Int => Scalar::Int(text.parse().map_err(|_| invalid())?),
        ValueKind::UInt => {
            if text.starts_with('+') {
                return Err(invalid());
            }
            Scalar::UInt(text.parse().map_err(|_| invalid())?)
        }
        ValueKind::Float => Scalar::Float(text.parse().map_err(|_| invalid())?),
        ValueKind::Time => {
            if !is_rfc3339_layout(text) {
                return Err(invalid());
            }
            Scalar::Timestamp(DateTime::parse_from_rfc3339(text).map_err(|_| invalid())?)
        }
    };
    Ok(scalar)
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.to_lowercase().as_str() {
        "t" | "true" | "yes" | "y" => Some(true),
        "f" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

/// Exact RFC 3339 layout: `YYYY-MM-DDTHH:MM:SS[.fraction](Z|±HH:MM)`.
///
/// chrono's RFC 3339 parser also takes a space or lower-case `t` as the
/// separator and a lower-case `z`; those are rejected here. Range checks on
/// the fields are left to chrono.
fn is_rfc3339_layout(text: &str) -> bool {
    let b = text.as_bytes();
    let digits = |range: std::ops::Range<usize>| {
        b.get(range).is_some_and(|s| s.iter().all(u8::is_ascii_digit))
    };
    let at = |i: usize, c: u8| b.get(i) == Some(&c);

    let date_time = digits(0..4)
        && at(4, b'-')
        && digits(5..7)
        && at(7, b'-')
        && digits(8..10)
        && at(10, b'T')
        && digits(11..13)
        && at(13, b':')
        && digits(14..16)
        && at(16, b':')
        && digits(17..19);
    if !date_time {
        return false;
    }

    let mut rest = &b[19..];
    if let Some(fraction) = rest.strip_prefix(b".") {
        let len = fraction.iter().take_while(|c| c.is_ascii_digit()).count();
        if len == 0 {
            return false;
        }
        rest = &fraction[len..];
    }
    match rest {
        [b'Z'] => true,
        [sign, h1, h2, b':', m1, m2] => {
            matches!(sign, b'+' | b'-') && [h1, h2, m1, m2].iter().all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}
