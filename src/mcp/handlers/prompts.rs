//! Handlers for the document prompts.

use crate::mcp::prompts::{format_messages, summarize_messages};
use rmcp::{
    ErrorData as McpError,
    model::{GetPromptResult, JsonObject},
};
use serde::Deserialize;

use super::parse_arguments;

/// Arguments accepted by both document prompts.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct DocumentPromptRequest {
    pub(crate) doc_id: String,
}

/// Handle the `format` prompt. The id is not checked against the store.
pub(crate) async fn handle_format_prompt(
    arguments: Option<JsonObject>,
) -> Result<GetPromptResult, McpError> {
    let args: DocumentPromptRequest = parse_arguments(arguments)?;
    Ok(GetPromptResult {
        description: Some("Rewrites the contents of the document in Markdown format.".into()),
        messages: format_messages(&args.doc_id),
    })
}

/// Handle the `summarize` prompt. The id is not checked against the store.
pub(crate) async fn handle_summarize_prompt(
    arguments: Option<JsonObject>,
) -> Result<GetPromptResult, McpError> {
    let args: DocumentPromptRequest = parse_arguments(arguments)?;
    Ok(GetPromptResult {
        description: Some("Summarizes the contents of the document.".into()),
        messages: summarize_messages(&args.doc_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::{ErrorCode, PromptMessageContent};
    use serde_json::json;

    #[tokio::test]
    async fn format_prompt_accepts_unregistered_ids() {
        let result = handle_format_prompt(json!({ "doc_id": "ghost.md" }).as_object().cloned())
            .await
            .expect("prompt renders");
        assert_eq!(result.messages.len(), 1);
        match &result.messages[0].content {
            PromptMessageContent::Text { text } => assert!(text.contains("ghost.md")),
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[tokio::test]
    async fn summarize_prompt_requires_doc_id() {
        let err = handle_summarize_prompt(None)
            .await
            .expect_err("doc_id is required");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }
}
