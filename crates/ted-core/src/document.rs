//! The document tree and its path walks.
//!
//! A [`Document`] owns a single root table. Reads walk tables one segment at a
//! time and report absence as `None`. Writes follow the **intermediate-table
//! rule**: any missing ancestor of the target key is created as an empty
//! table, but an ancestor that already holds a scalar or array is never
//! replaced; the write fails with [`TedError::PathConflict`] instead.

use tracing::{debug, trace};

use crate::error::{Result, TedError};
use crate::path::Path;
use crate::types::{Node, NodeRef, Scalar, Table};

/// An editable hierarchical document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Table,
}

impl Document {
    /// An empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_table(root: Table) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Table {
        &self.root
    }

    pub fn into_root(self) -> Table {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Resolve `path` to a node.
    ///
    /// The empty path returns the root table. A missing key, a scalar or array
    /// met before the path is exhausted, or a malformed path all yield `None`.
    pub fn get(&self, path: &str) -> Option<NodeRef<'_>> {
        let path = Path::parse(path).ok()?;
        let Some((leaf, parents)) = path.segments().split_last() else {
            return Some(NodeRef::Table(&self.root));
        };
        let mut table = &self.root;
        for segment in parents {
            table = table.get(segment)?.as_table()?;
        }
        table.get(leaf).map(Node::as_node_ref)
    }

    /// Resolve `path` to a scalar. `None` for tables, arrays and absent paths.
    pub fn get_scalar(&self, path: &str) -> Option<&Scalar> {
        self.get(path).and_then(NodeRef::as_scalar)
    }

    /// Set the scalar at `path`. See [`Document::set_node`].
    pub fn set(&mut self, path: &str, value: impl Into<Scalar>) -> Result<()> {
        self.set_node(path, Node::Scalar(value.into()))
    }

    /// Insert or overwrite the node at `path`, creating missing ancestor tables.
    ///
    /// Whatever previously occupied the final key is replaced. The root itself
    /// cannot be set. On error the document is unchanged.
    pub fn set_node(&mut self, path: &str, node: Node) -> Result<()> {
        let parsed = Path::parse(path)?;
        let Some((leaf, parents)) = parsed.segments().split_last() else {
            return Err(TedError::InvalidPath(path.to_string()));
        };

        // Check the whole walk before creating anything so a conflict
        // leaves no half-built tables behind.
        if let Some(depth) = first_conflict(&self.root, parents) {
            return Err(conflict(&parsed, depth));
        }

        let mut table = &mut self.root;
        for (depth, segment) in parents.iter().enumerate() {
            table = descend_or_create(table, segment)
                .ok_or_else(|| conflict(&parsed, depth + 1))?;
        }

        trace!(path = %parsed, kind = node.kind_name(), "set");
        table.insert(*leaf, node);
        Ok(())
    }
}

/// Walk `parents` read-only and return how many segments lead to the first
/// non-table node the write would pass through. `None` means the write can
/// proceed.
fn first_conflict(root: &Table, parents: &[&str]) -> Option<usize> {
    let mut table = root;
    for (depth, segment) in parents.iter().enumerate() {
        match table.get(segment) {
            None => return None,
            Some(Node::Table(child)) => table = child,
            Some(_) => return Some(depth + 1),
        }
    }
    None
}

/// Step into the child table `segment`, creating an empty table when the key
/// is absent. `None` if the child exists but is not a table.
fn descend_or_create<'t>(table: &'t mut Table, segment: &str) -> Option<&'t mut Table> {
    if !table.contains_key(segment) {
        debug!(segment, "creating intermediate table");
        table.insert(segment, Node::Table(Table::new()));
    }
    match table.get_mut(segment) {
        Some(Node::Table(child)) => Some(child),
        _ => None,
    }
}

fn conflict(path: &Path<'_>, depth: usize) -> TedError {
    TedError::PathConflict {
        path: path.prefix(depth),
    }
}
