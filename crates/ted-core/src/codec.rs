//! TOML adapter: text ⇄ [`Document`].
//!
//! Parsing and printing are delegated to the `toml` crate (with
//! `preserve_order`, so keys keep their file order). This module only maps
//! between `toml::Value` and [`Node`]. Comments and formatting are not kept.
//!
//! TOML integers are signed 64-bit, so a [`Scalar::UInt`] above `i64::MAX`
//! cannot be written and fails with [`TedError::Serialize`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};
use toml::value::Datetime;
use tracing::debug;

use crate::document::Document;
use crate::error::{Result, TedError};
use crate::types::{Node, Scalar, Table};

const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const LOCAL_DATE_FORMAT: &str = "%Y-%m-%d";
const LOCAL_TIME_FORMAT: &str = "%H:%M:%S%.f";

/// Parse TOML text into a document. Blank input is an empty document.
pub fn load_document(text: &str) -> Result<Document> {
    let parsed: toml::Table = text.parse()?;
    debug!(keys = parsed.len(), "loaded document");
    Ok(Document::from_table(table_from_toml(parsed)?))
}

/// Render a document as TOML text.
pub fn serialize_document(document: &Document) -> Result<String> {
    let table = table_to_toml(document.root())?;
    toml::to_string(&table).map_err(|e| TedError::Serialize(e.to_string()))
}

/// Render a single table as TOML text, as if it were a document of its own.
pub fn serialize_table(table: &Table) -> Result<String> {
    let table = table_to_toml(table)?;
    toml::to_string(&table).map_err(|e| TedError::Serialize(e.to_string()))
}

fn table_from_toml(table: toml::Table) -> Result<Table> {
    table
        .into_iter()
        .map(|(key, value)| Ok((key, node_from_toml(value)?)))
        .collect()
}

fn node_from_toml(value: toml::Value) -> Result<Node> {
    let node = match value {
        toml::Value::String(s) => Node::Scalar(Scalar::String(s)),
        toml::Value::Integer(i) => Node::Scalar(Scalar::Int(i)),
        toml::Value::Float(f) => Node::Scalar(Scalar::Float(f)),
        toml::Value::Boolean(b) => Node::Scalar(Scalar::Bool(b)),
        toml::Value::Datetime(dt) => Node::Scalar(datetime_from_toml(&dt)?),
        toml::Value::Array(items) => Node::Array(
            items
                .into_iter()
                .map(node_from_toml)
                .collect::<Result<Vec<_>>>()?,
        ),
        toml::Value::Table(table) => Node::Table(table_from_toml(table)?),
    };
    Ok(node)
}

/// Map a TOML datetime onto the matching scalar kind by which parts it has.
fn datetime_from_toml(dt: &Datetime) -> Result<Scalar> {
    let text = dt.to_string();
    let invalid = || TedError::InvalidTypeValue {
        text: text.clone(),
        kind: "time",
    };
    let scalar = match (dt.date.is_some(), dt.time.is_some(), dt.offset.is_some()) {
        (true, true, true) => {
            Scalar::Timestamp(DateTime::parse_from_rfc3339(&text).map_err(|_| invalid())?)
        }
        (true, true, false) => Scalar::LocalDateTime(
            NaiveDateTime::parse_from_str(&text, LOCAL_DATETIME_FORMAT).map_err(|_| invalid())?,
        ),
        (true, false, _) => Scalar::LocalDate(
            NaiveDate::parse_from_str(&text, LOCAL_DATE_FORMAT).map_err(|_| invalid())?,
        ),
        (false, true, _) => Scalar::LocalTime(
            NaiveTime::parse_from_str(&text, LOCAL_TIME_FORMAT).map_err(|_| invalid())?,
        ),
        (false, false, _) => return Err(invalid()),
    };
    Ok(scalar)
}

fn table_to_toml(table: &Table) -> Result<toml::Table> {
    table
        .iter()
        .map(|(key, node)| Ok((key.to_string(), node_to_toml(node)?)))
        .collect()
}

pub(crate) fn node_to_toml(node: &Node) -> Result<toml::Value> {
    let value = match node {
        Node::Table(table) => toml::Value::Table(table_to_toml(table)?),
        Node::Array(items) => toml::Value::Array(
            items
                .iter()
                .map(node_to_toml)
                .collect::<Result<Vec<_>>>()?,
        ),
        Node::Scalar(scalar) => scalar_to_toml(scalar)?,
    };
    Ok(value)
}

fn scalar_to_toml(scalar: &Scalar) -> Result<toml::Value> {
    let value = match scalar {
        Scalar::String(s) => toml::Value::String(s.clone()),
        Scalar::Bool(b) => toml::Value::Boolean(*b),
        Scalar::Int(i) => toml::Value::Integer(*i),
        Scalar::UInt(u) => toml::Value::Integer(i64::try_from(*u).map_err(|_| {
            TedError::Serialize(format!("unsigned integer {u} exceeds the TOML integer range"))
        })?),
        Scalar::Float(f) => toml::Value::Float(*f),
        Scalar::Timestamp(ts) => {
            datetime_to_toml(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))?
        }
        Scalar::LocalDateTime(dt) => {
            datetime_to_toml(&dt.format(LOCAL_DATETIME_FORMAT).to_string())?
        }
        Scalar::LocalDate(d) => datetime_to_toml(&d.format(LOCAL_DATE_FORMAT).to_string())?,
        Scalar::LocalTime(t) => datetime_to_toml(&t.format(LOCAL_TIME_FORMAT).to_string())?,
    };
    Ok(value)
}

fn datetime_to_toml(text: &str) -> Result<toml::Value> {
    text.parse::<Datetime>()
        .map(toml::Value::Datetime)
        .map_err(|e| TedError::Serialize(format!("datetime '{text}': {e}")))
}
