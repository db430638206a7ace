//! File handle built from a Transport `body` payload.

use relay_payload::{get_path, PayloadValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Download registered in a Transport, as described by its `body`
/// payload fragment.
///
/// The handle is opaque to the navigation core: it exposes the fields
/// the wire fragment carried and nothing more. Serving the actual
/// bytes is the file server's concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub name: String,
    pub path: String,
    pub mime: String,
    pub filename: String,
    pub size: u64,
    pub token: String,
}

impl File {
    /// Build a handle from a `body` mapping.
    ///
    /// Extraction is defensive: missing or non-string fields become
    /// empty strings, a missing size becomes 0.
    pub fn from_payload(body: &PayloadValue) -> Self {
        let text = |field: &str| {
            get_path(body, field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned()
        };
        Self {
            name: text("name"),
            path: text("path"),
            mime: text("mime"),
            filename: text("filename"),
            size: get_path(body, "size").and_then(Value::as_u64).unwrap_or(0),
            token: text("token"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_from_full_body() {
        let body = json!({
            "name": "download",
            "path": "file:///tmp/report.pdf",
            "mime": "application/pdf",
            "filename": "report.pdf",
            "size": 1024,
            "token": "secret",
        });
        let file = File::from_payload(&body);
        assert_eq!(file.name, "download");
        assert_eq!(file.path, "file:///tmp/report.pdf");
        assert_eq!(file.mime, "application/pdf");
        assert_eq!(file.filename, "report.pdf");
        assert_eq!(file.size, 1024);
        assert_eq!(file.token, "secret");
    }

    #[test]
    fn missing_fields_degrade_to_defaults() {
        let file = File::from_payload(&json!({"path": "file:///x"}));
        assert_eq!(file.path, "file:///x");
        assert_eq!(file.name, "");
        assert_eq!(file.size, 0);
    }

    #[test]
    fn non_mapping_body_yields_empty_handle() {
        let file = File::from_payload(&json!(null));
        assert_eq!(file, File::from_payload(&json!({})));
    }
}
