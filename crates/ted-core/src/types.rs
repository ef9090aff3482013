//! Value model for an editable document: tables, arrays and typed scalars.
//!
//! Every container owns its children outright, so a [`Node`] tree can never
//! share a subtree or form a cycle. Mutation replaces whole nodes; a scalar is
//! never edited in place.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

/// A typed leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// An instant with a UTC offset (RFC 3339).
    Timestamp(DateTime<FixedOffset>),
    /// Offset-less TOML date-time. Only produced by loading a document.
    LocalDateTime(NaiveDateTime),
    /// Offset-less TOML date. Only produced by loading a document.
    LocalDate(NaiveDate),
    /// Offset-less TOML time of day. Only produced by loading a document.
    LocalTime(NaiveTime),
}

impl Scalar {
    /// Short lower-case name of the scalar's kind, as used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Scalar::String(_) => "string",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::UInt(_) => "uint",
            Scalar::Float(_) => "float",
            Scalar::Timestamp(_) => "time",
            Scalar::LocalDateTime(_) => "local datetime",
            Scalar::LocalDate(_) => "local date",
            Scalar::LocalTime(_) => "local time",
        }
    }
}

/// One node of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Table(Table),
    /// Homogeneous by convention; not enforced.
    Array(Vec<Node>),
    Scalar(Scalar),
}

impl Node {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Node::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        self.as_node_ref().kind_name()
    }

    pub fn as_node_ref(&self) -> NodeRef<'_> {
        match self {
            Node::Table(table) => NodeRef::Table(table),
            Node::Array(items) => NodeRef::Array(items),
            Node::Scalar(scalar) => NodeRef::Scalar(scalar),
        }
    }
}

/// A borrowed view of a node.
///
/// Lookups return this rather than `&Node` so the document root, which is a
/// bare [`Table`], can be handed out the same way as any nested value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Table(&'a Table),
    Array(&'a [Node]),
    Scalar(&'a Scalar),
}

impl<'a> NodeRef<'a> {
    pub fn as_table(self) -> Option<&'a Table> {
        match self {
            NodeRef::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_array(self) -> Option<&'a [Node]> {
        match self {
            NodeRef::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(self) -> Option<&'a Scalar> {
        match self {
            NodeRef::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn kind_name(self) -> &'static str {
        match self {
            NodeRef::Table(_) => "table",
            NodeRef::Array(_) => "array",
            NodeRef::Scalar(scalar) => scalar.kind_name(),
        }
    }

    /// Clone the viewed value into an owned node.
    pub fn to_node(self) -> Node {
        match self {
            NodeRef::Table(table) => Node::Table(table.clone()),
            NodeRef::Array(items) => Node::Array(items.to_vec()),
            NodeRef::Scalar(scalar) => Node::Scalar(scalar.clone()),
        }
    }
}

/// Key-value pairs in insertion order.
///
/// Backed by a `Vec` rather than a hash map: documents are small, and the
/// order in which keys were loaded or first set is the order they serialize in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    entries: Vec<(String, Node)>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert or overwrite `key`. An overwritten key keeps its position.
    /// Returns the previous node, if any.
    pub fn insert(&mut self, key: impl Into<String>, node: Node) -> Option<Node> {
        let key = key.into();
        match self.get_mut(&key) {
            Some(slot) => Some(std::mem::replace(slot, node)),
            None => {
                self.entries.push((key, node));
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, Node)> for Table {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Self {
        let mut table = Table::new();
        for (key, node) in iter {
            table.insert(key, node);
        }
        table
    }
}

impl IntoIterator for Table {
    type Item = (String, Node);
    type IntoIter = std::vec::IntoIter<(String, Node)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar)
    }
}

impl From<Table> for Node {
    fn from(table: Table) -> Self {
        Node::Table(table)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::UInt(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<DateTime<FixedOffset>> for Scalar {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Scalar::Timestamp(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_in_place() {
        let mut table = Table::new();
        table.insert("a", Scalar::Int(1).into());
        table.insert("b", Scalar::Int(2).into());
        let old = table.insert("a", Scalar::Int(3).into());

        assert_eq!(old, Some(Node::Scalar(Scalar::Int(1))));
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(table.get("a"), Some(&Node::Scalar(Scalar::Int(3))));
    }

    #[test]
    fn from_iter_keeps_last_duplicate() {
        let table: Table = vec![
            ("x".to_string(), Node::from(Scalar::Bool(true))),
            ("x".to_string(), Node::from(Scalar::Bool(false))),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("x"), Some(&Node::Scalar(Scalar::Bool(false))));
    }
}
