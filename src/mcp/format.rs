//! Formatting helpers shared across MCP handlers and resources.

use rmcp::model::ResourceContents;
use serde::Serialize;

pub(crate) const APPLICATION_JSON: &str = "application/json";
pub(crate) const TEXT_PLAIN: &str = "text/plain";

/// Serialize a value to JSON, falling back to compact formatting on error.
pub(crate) fn serialize_json<T: Serialize>(value: &T, context_uri: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|error| {
        tracing::warn!(uri = context_uri, %error, "Failed to serialize JSON prettily");
        serde_json::to_string(value).unwrap_or_else(|_| "[]".into())
    })
}

/// Build JSON resource contents for MCP resource responses.
pub(crate) fn json_resource_contents(uri: &str, text: String) -> ResourceContents {
    ResourceContents::TextResourceContents {
        uri: uri.to_string(),
        mime_type: Some(APPLICATION_JSON.into()),
        text,
        meta: None,
    }
}

/// Build plain-text resource contents carrying a document body.
pub(crate) fn text_resource_contents(uri: &str, text: String) -> ResourceContents {
    ResourceContents::TextResourceContents {
        uri: uri.to_string(),
        mime_type: Some(TEXT_PLAIN.into()),
        text,
        meta: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn serialize_json_renders_ordered_array() {
        let ids = vec!["b.md".to_string(), "a.md".to_string()];
        let body = serialize_json(&ids, "docs://documents");
        let value: Value = serde_json::from_str(&body).expect("valid JSON");
        assert_eq!(value, serde_json::json!(["b.md", "a.md"]));
    }

    #[test]
    fn json_resource_contents_sets_application_json_mime() {
        let contents = json_resource_contents("docs://documents", "[]".into());
        match contents {
            ResourceContents::TextResourceContents { mime_type, uri, .. } => {
                assert_eq!(mime_type.as_deref(), Some(APPLICATION_JSON));
                assert_eq!(uri, "docs://documents");
            }
            other => panic!("unexpected contents: {other:?}"),
        }
    }

    #[test]
    fn text_resource_contents_sets_text_plain_mime() {
        let contents = text_resource_contents("docs://documents/a.md", "hello".into());
        match contents {
            ResourceContents::TextResourceContents {
                mime_type, text, ..
            } => {
                assert_eq!(mime_type.as_deref(), Some(TEXT_PLAIN));
                assert_eq!(text, "hello");
            }
            other => panic!("unexpected contents: {other:?}"),
        }
    }
}
