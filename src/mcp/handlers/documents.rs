//! Handlers for document tools and resources.

use std::sync::Arc;

use crate::{
    documents::{DocumentError, DocumentStore},
    mcp::format::{json_resource_contents, serialize_json, text_resource_contents},
};
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject, ReadResourceResult},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::parse_arguments;

/// Request payload for the `read_document` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub(crate) struct ReadDocumentRequest {
    /// Id of the document
    pub(crate) doc_id: String,
}

/// Request payload for the `edit_document` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub(crate) struct EditDocumentRequest {
    /// Id of the document that will be edited
    pub(crate) doc_id: String,
    /// The text to replace. Must match exactly, including whitespace.
    pub(crate) old_str: String,
    /// The new text to insert in place of the old text.
    pub(crate) new_str: String,
}

/// Handle the `read_document` tool, returning the document body as text content.
pub(crate) async fn handle_read_document(
    store: &Arc<DocumentStore>,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let args: ReadDocumentRequest = parse_arguments(arguments)?;
    let content = store.get(&args.doc_id).map_err(map_not_found)?;
    Ok(CallToolResult::success(vec![Content::text(content)]))
}

/// Handle the `edit_document` tool.
///
/// Success carries no payload, but the result keeps one empty text item: clients decode an
/// empty `content` array as a different result type.
pub(crate) async fn handle_edit_document(
    store: &Arc<DocumentStore>,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let args: EditDocumentRequest = parse_arguments(arguments)?;
    store
        .replace(&args.doc_id, &args.old_str, &args.new_str)
        .map_err(map_not_found)?;
    Ok(CallToolResult::success(vec![Content::text("")]))
}

/// Serve `docs://documents`: the ordered id list as a JSON array.
pub(crate) fn document_list_contents(store: &DocumentStore, uri: &str) -> ReadResourceResult {
    let ids = store.list_ids();
    ReadResourceResult {
        contents: vec![json_resource_contents(uri, serialize_json(&ids, uri))],
    }
}

/// Serve `docs://documents/{doc_id}`: the document body as plain text.
pub(crate) fn document_contents(
    store: &DocumentStore,
    uri: &str,
    doc_id: &str,
) -> Result<ReadResourceResult, McpError> {
    if doc_id.is_empty() {
        return Err(McpError::invalid_params(
            "Document identifier missing in resource URI",
            None,
        ));
    }
    let content = store.get(doc_id).map_err(map_not_found)?;
    Ok(ReadResourceResult {
        contents: vec![text_resource_contents(uri, content)],
    })
}

/// Unknown ids fail the same way on tools and resources, with a code distinct from the
/// `invalid_params` used for malformed arguments.
fn map_not_found(error: DocumentError) -> McpError {
    McpError::resource_not_found(error.to_string(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::Document;
    use rmcp::model::{ErrorCode, ResourceContents, ServerResult};
    use serde_json::json;

    fn store() -> Arc<DocumentStore> {
        Arc::new(
            DocumentStore::from_seed(vec![
                Document::new("a.md", "hello world"),
                Document::new("b.md", "second"),
            ])
            .expect("valid seed"),
        )
    }

    fn args(value: serde_json::Value) -> Option<JsonObject> {
        value.as_object().cloned()
    }

    fn first_text(result: &CallToolResult) -> String {
        result
            .content
            .first()
            .and_then(|content| content.as_text())
            .map(|text| text.text.clone())
            .expect("text content")
    }

    #[tokio::test]
    async fn edit_then_read_returns_updated_content() {
        let store = store();
        let edited = handle_edit_document(
            &store,
            args(json!({ "doc_id": "a.md", "old_str": "world", "new_str": "there" })),
        )
        .await
        .expect("edit succeeds");
        assert_eq!(edited.is_error, Some(false));
        assert_eq!(edited.content.len(), 1);
        assert_eq!(first_text(&edited), "");

        let read = handle_read_document(&store, args(json!({ "doc_id": "a.md" })))
            .await
            .expect("read succeeds");
        assert_eq!(first_text(&read), "hello there");
    }

    #[tokio::test]
    async fn edit_result_decodes_as_tool_result_on_the_wire() {
        let edited = handle_edit_document(
            &store(),
            args(json!({ "doc_id": "a.md", "old_str": "absent", "new_str": "x" })),
        )
        .await
        .expect("edit succeeds");
        let wire = serde_json::to_value(&edited).expect("serializable result");
        let decoded: ServerResult = serde_json::from_value(wire).expect("decodable result");
        assert!(matches!(decoded, ServerResult::CallToolResult(_)));
    }

    #[tokio::test]
    async fn read_unknown_document_reports_id() {
        let err = handle_read_document(&store(), args(json!({ "doc_id": "missing.md" })))
            .await
            .expect_err("unknown id");
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert!(err.message.contains("missing.md"));
    }

    #[tokio::test]
    async fn edit_unknown_document_reports_id() {
        let err = handle_edit_document(
            &store(),
            args(json!({ "doc_id": "nope.md", "old_str": "a", "new_str": "b" })),
        )
        .await
        .expect_err("unknown id");
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert!(err.message.contains("nope.md"));
    }

    #[tokio::test]
    async fn missing_arguments_are_rejected() {
        let err = handle_edit_document(&store(), args(json!({ "doc_id": "a.md" })))
            .await
            .expect_err("missing old_str");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

        let err = handle_read_document(&store(), None)
            .await
            .expect_err("missing doc_id");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn unknown_argument_fields_are_rejected() {
        let err = handle_read_document(
            &store(),
            args(json!({ "doc_id": "a.md", "extra": true })),
        )
        .await
        .expect_err("unexpected field");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn document_list_is_json_array_in_seed_order() {
        let result = document_list_contents(&store(), "docs://documents");
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                let ids: Vec<String> = serde_json::from_str(text).expect("JSON array");
                assert_eq!(ids, vec!["a.md", "b.md"]);
            }
            other => panic!("unexpected contents: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_document_and_malformed_arguments_use_distinct_codes() {
        let missing = handle_read_document(&store(), args(json!({ "doc_id": "gone.md" })))
            .await
            .expect_err("unknown id");
        let malformed = handle_read_document(&store(), args(json!({ "id": "a.md" })))
            .await
            .expect_err("wrong field");
        assert_ne!(missing.code, malformed.code);

        let resource = document_contents(&store(), "docs://documents/gone.md", "gone.md")
            .expect_err("unknown id");
        assert_eq!(resource.code, missing.code);
        assert_eq!(resource.message, missing.message);
    }

    #[test]
    fn document_contents_maps_missing_id_to_resource_not_found() {
        let err = document_contents(&store(), "docs://documents/zzz", "zzz")
            .expect_err("unknown id");
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert!(err.message.contains("zzz"));
    }

    #[test]
    fn document_contents_rejects_empty_segment() {
        let err = document_contents(&store(), "docs://documents/", "").expect_err("empty id");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }
}
