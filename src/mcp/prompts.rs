//! Instruction templates returned by the `format` and `summarize` prompts.
//!
//! Prompts never touch the store. They only name the document; the caller reads and edits it
//! through the tools, so an unknown id surfaces when those tools run.

use rmcp::model::{PromptMessage, PromptMessageRole};

/// Build the markdown reformatting instructions for `doc_id`.
pub fn format_prompt_text(doc_id: &str) -> String {
    format!(
        "Your goal is to reformat a document to be written with markdown syntax.

The id of the document you need to reformat is:
<document_id>
{doc_id}
</document_id>

Read the document with the 'read_document' tool first. Add in headers, bullet points, tables, etc as necessary. Feel free to add in structure.
Use the 'edit_document' tool to edit the document. After the document has been reformatted, reply with a short note describing the structure you added.
"
    )
}

/// Build the summarization instructions for `doc_id`.
pub fn summarize_prompt_text(doc_id: &str) -> String {
    format!(
        "Your goal is to summarize the contents of the document.

The id of the document you need to summarize is:
<document_id>
{doc_id}
</document_id>

Read the document with the 'read_document' tool, then reply with a concise summary of it.
"
    )
}

/// Single user message asking the caller to reformat `doc_id` as markdown.
pub fn format_messages(doc_id: &str) -> Vec<PromptMessage> {
    vec![PromptMessage::new_text(
        PromptMessageRole::User,
        format_prompt_text(doc_id),
    )]
}

/// Single user message asking the caller to summarize `doc_id`.
pub fn summarize_messages(doc_id: &str) -> Vec<PromptMessage> {
    vec![PromptMessage::new_text(
        PromptMessageRole::User,
        summarize_prompt_text(doc_id),
    )]
}
