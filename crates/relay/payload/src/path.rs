//! Slash-delimited path navigation over untyped payload values.

use serde_json::Value;

/// Resolve a slash-delimited path against a payload value.
///
/// Traversal succeeds only while every intermediate node is a mapping
/// containing the next segment. Segments are matched exactly by key,
/// case-sensitive, with no wildcard support. Returns `None` as soon as
/// any segment is missing or the current node is not traversable.
pub fn get_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('/') {
        // Path segments are non-empty by contract; an empty segment
        // (leading, trailing, or doubled slash) never matches.
        if segment.is_empty() {
            return None;
        }
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Whether a full traversal of `path` succeeds.
///
/// The value found is irrelevant: falsy values such as `null` or an
/// empty mapping still count as present.
pub fn path_exists(root: &Value, path: &str) -> bool {
    get_path(root, path).is_some()
}
