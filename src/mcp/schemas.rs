//! JSON schema builders for MCP tools and prompts.

use rmcp::model::{JsonObject, PromptArgument};
use schemars::{JsonSchema, schema_for};
use serde_json::Value;

/// Derive a tool input schema from the request type used to parse its arguments.
///
/// The draft marker and type title are dropped; clients only need the object shape.
pub(crate) fn input_schema<T: JsonSchema>() -> JsonObject {
    let root = schema_for!(T);
    match serde_json::to_value(root) {
        Ok(Value::Object(mut schema)) => {
            schema.remove("$schema");
            schema.remove("title");
            schema
        }
        Ok(_) | Err(_) => {
            tracing::warn!("Falling back to an empty tool input schema");
            empty_object_schema()
        }
    }
}

/// Schema accepting an empty argument object.
pub(crate) fn empty_object_schema() -> JsonObject {
    let mut schema = JsonObject::new();
    schema.insert("type".into(), Value::String("object".into()));
    schema.insert("properties".into(), Value::Object(JsonObject::new()));
    schema.insert("additionalProperties".into(), Value::Bool(false));
    schema
}

/// Required `doc_id` argument shared by the document prompts.
pub(crate) fn doc_id_prompt_argument(description: &str) -> PromptArgument {
    PromptArgument {
        name: "doc_id".into(),
        title: None,
        description: Some(description.into()),
        required: Some(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::handlers::documents::{EditDocumentRequest, ReadDocumentRequest};

    #[test]
    fn read_schema_requires_doc_id() {
        let schema = input_schema::<ReadDocumentRequest>();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], serde_json::json!(["doc_id"]));
        assert_eq!(schema["properties"]["doc_id"]["type"], "string");
        assert_eq!(schema["additionalProperties"], false);
        assert!(!schema.contains_key("$schema"));
    }

    #[test]
    fn edit_schema_requires_all_fields_with_descriptions() {
        let schema = input_schema::<EditDocumentRequest>();
        let required: Vec<_> = schema["required"]
            .as_array()
            .expect("required array")
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(required.len(), 3);
        for field in ["doc_id", "old_str", "new_str"] {
            assert!(required.contains(&field), "missing {field}");
        }
        let old_description = schema["properties"]["old_str"]["description"]
            .as_str()
            .expect("description");
        assert!(old_description.contains("Must match exactly"));
    }

    #[test]
    fn prompt_argument_is_required() {
        let argument = doc_id_prompt_argument("Id of the document to format");
        assert_eq!(argument.name, "doc_id");
        assert_eq!(argument.required, Some(true));
    }
}
