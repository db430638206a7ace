//! Owning read-only wrapper around one request's raw payload mapping.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path;

/// One request's raw transport mapping, owned for the lifetime of the
/// enclosing request context.
///
/// The root is expected to be a mapping, but no validation happens at
/// construction time: a malformed root only surfaces as "not found"
/// during lookups. There is no `&mut` surface, so the payload is
/// structurally immutable after construction and safe to share across
/// threads for concurrent reads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    root: Value,
}

impl Payload {
    /// Wrap a raw payload value received from the lower transport.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Value at `path`, or `default` returned unchanged when any
    /// segment along the way is missing or not traversable.
    pub fn get(&self, path: &str, default: Value) -> Value {
        path::get_path(&self.root, path)
            .cloned()
            .unwrap_or(default)
    }

    /// Borrowed value at `path`, when the full traversal succeeds.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        path::get_path(&self.root, path)
    }

    /// Whether `path` resolves, regardless of the value found.
    pub fn path_exists(&self, path: &str) -> bool {
        path::path_exists(&self.root, path)
    }

    /// The raw root mapping, for SDK layers that need it verbatim.
    pub fn root(&self) -> &Value {
        &self.root
    }
}
