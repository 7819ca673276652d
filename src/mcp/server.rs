//! MCP server bootstrap and request dispatch.

use std::{borrow::Cow, sync::Arc};

use crate::{
    config::config_or_default,
    documents::DocumentStore,
    mcp::{
        format::{APPLICATION_JSON, TEXT_PLAIN},
        handlers::{
            documents::{
                EditDocumentRequest, ReadDocumentRequest, document_contents,
                document_list_contents, handle_edit_document, handle_read_document,
            },
            prompts::{handle_format_prompt, handle_summarize_prompt},
        },
        registry, schemas,
    },
};
use rmcp::{
    ErrorData as McpError,
    handler::server::ServerHandler,
    model::{
        AnnotateAble, CallToolRequestParam, CallToolResult, GetPromptRequestParam,
        GetPromptResult, ListPromptsResult, ListResourceTemplatesResult, ListResourcesResult,
        ListToolsResult, Prompt, RawResource, RawResourceTemplate, ReadResourceRequestParam,
        ReadResourceResult, Resource, ResourceTemplate, ServerCapabilities, ServerInfo, Tool,
        ToolAnnotations,
    },
};

pub(crate) const DOCUMENTS_URI: &str = "docs://documents";
const DOCUMENT_TEMPLATE_URI: &str = "docs://documents/{doc_id}";
const DOCUMENT_PREFIX: &str = "docs://documents/";

/// MCP server exposing the document store as tools, resources, and prompts.
#[derive(Clone)]
pub struct DocsMcpServer {
    store: Arc<DocumentStore>,
    registry: Arc<registry::Registry>,
}

impl DocsMcpServer {
    /// Create a new MCP server backed by the supplied store.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        let mut registry = registry::Registry::new();
        registry.register_resource(DOCUMENTS_URI, resource_documents);

        registry.register_tool("read_document", tool_read_document);
        registry.register_tool("edit_document", tool_edit_document);

        registry.register_prompt("format", prompt_format);
        registry.register_prompt("summarize", prompt_summarize);

        Self {
            store,
            registry: Arc::new(registry),
        }
    }

    fn describe_tools(&self) -> Vec<Tool> {
        vec![
            Tool {
                name: Cow::Borrowed("read_document"),
                title: Some("Read Document".to_string()),
                description: Some(Cow::Borrowed(
                    "Read contents of the document and return results as string",
                )),
                input_schema: Arc::new(schemas::input_schema::<ReadDocumentRequest>()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("Read Document")
                        .read_only(true)
                        .idempotent(true)
                        .open_world(false),
                ),
                icons: None,
            },
            Tool {
                name: Cow::Borrowed("edit_document"),
                title: Some("Edit Document".to_string()),
                description: Some(Cow::Borrowed(
                    "Edit a document by replacing a string in the documents content with a new string.",
                )),
                input_schema: Arc::new(schemas::input_schema::<EditDocumentRequest>()),
                output_schema: None,
                annotations: Some(
                    ToolAnnotations::with_title("Edit Document")
                        .destructive(true)
                        .idempotent(false)
                        .open_world(false),
                ),
                icons: None,
            },
        ]
    }

    fn describe_resources(&self) -> Vec<Resource> {
        let mut documents = RawResource::new(DOCUMENTS_URI, "documents");
        documents.description = Some("Ids of every registered document, in listing order".into());
        documents.mime_type = Some(APPLICATION_JSON.into());

        vec![documents.no_annotation()]
    }

    fn describe_resource_templates(&self) -> Vec<ResourceTemplate> {
        let document_template = RawResourceTemplate {
            uri_template: DOCUMENT_TEMPLATE_URI.into(),
            name: "document".into(),
            title: Some("Document Contents".into()),
            description: Some(
                "Contents of a single document: replace {doc_id} and call readResource".into(),
            ),
            mime_type: Some(TEXT_PLAIN.into()),
        };

        vec![document_template.no_annotation()]
    }

    fn describe_prompts(&self) -> Vec<Prompt> {
        vec![
            Prompt::new(
                "format",
                Some("Rewrites the contents of the document in Markdown format."),
                Some(vec![schemas::doc_id_prompt_argument(
                    "Id of the document to format",
                )]),
            ),
            Prompt::new(
                "summarize",
                Some("Summarizes the contents of the document."),
                Some(vec![schemas::doc_id_prompt_argument(
                    "Id of the document to summarize",
                )]),
            ),
        ]
    }
}

fn resource_documents(
    server: &DocsMcpServer,
    request: ReadResourceRequestParam,
) -> registry::ResourceFuture {
    let store = server.store.clone();
    Box::pin(async move { Ok(document_list_contents(&store, &request.uri)) })
}

fn tool_read_document(
    server: &DocsMcpServer,
    request: CallToolRequestParam,
) -> registry::ToolFuture {
    let store = server.store.clone();
    Box::pin(async move { handle_read_document(&store, request.arguments).await })
}

fn tool_edit_document(
    server: &DocsMcpServer,
    request: CallToolRequestParam,
) -> registry::ToolFuture {
    let store = server.store.clone();
    Box::pin(async move { handle_edit_document(&store, request.arguments).await })
}

fn prompt_format(
    _server: &DocsMcpServer,
    request: GetPromptRequestParam,
) -> registry::PromptFuture {
    Box::pin(async move { handle_format_prompt(request.arguments).await })
}

fn prompt_summarize(
    _server: &DocsMcpServer,
    request: GetPromptRequestParam,
) -> registry::PromptFuture {
    Box::pin(async move { handle_summarize_prompt(request.arguments).await })
}

/// Extract `{doc_id}` from a templated document URI; the id is a single path segment.
fn document_segment(uri: &str) -> Option<&str> {
    uri.strip_prefix(DOCUMENT_PREFIX)
        .filter(|segment| !segment.contains('/'))
}

impl ServerHandler for DocsMcpServer {
    fn get_info(&self) -> ServerInfo {
        let mut implementation = rmcp::model::Implementation::from_build_env();
        implementation.name = config_or_default().server_name.clone();
        implementation.title = Some("Document MCP".to_string());
        implementation.version = env!("CARGO_PKG_VERSION").to_string();

        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: implementation,
            instructions: Some(
                "Use this server to list, read, and edit text documents. Fetch docs://documents for the ids, read with `read_document`, and change text with `edit_document` using an exact `old_str` copied from the document. The `format` and `summarize` prompts produce ready-made instructions for a document id.".into(),
            ),
            ..ServerInfo::default()
        }
    }

    fn list_resources(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        let resources = self.describe_resources();
        std::future::ready(Ok(ListResourcesResult::with_all_items(resources)))
    }

    fn list_resource_templates(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListResourceTemplatesResult, McpError>> + Send + '_
    {
        let templates = self.describe_resource_templates();
        std::future::ready(Ok(ListResourceTemplatesResult::with_all_items(templates)))
    }

    fn list_tools(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        let tools = self.describe_tools();
        std::future::ready(Ok(ListToolsResult::with_all_items(tools)))
    }

    fn list_prompts(
        &self,
        _request: Option<rmcp::model::PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListPromptsResult, McpError>> + Send + '_ {
        let prompts = self.describe_prompts();
        std::future::ready(Ok(ListPromptsResult::with_all_items(prompts)))
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        async move {
            let uri = request.uri.clone();
            if let Some(handler) = self.registry.resources.get(uri.as_str()) {
                return handler(self, request).await;
            }

            if let Some(doc_id) = document_segment(&uri) {
                return document_contents(&self.store, &uri, doc_id);
            }

            Err(McpError::invalid_params(
                format!("Unknown resource URI: {uri}"),
                None,
            ))
        }
    }

    #[allow(clippy::manual_async_fn)]
    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            if let Some(handler) = self.registry.tools.get(request.name.as_ref()) {
                return handler(self, request).await;
            }

            Err(McpError::invalid_params(
                format!("Unknown tool: {}", request.name),
                None,
            ))
        }
    }

    #[allow(clippy::manual_async_fn)]
    fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<GetPromptResult, McpError>> + Send + '_ {
        async move {
            if let Some(handler) = self.registry.prompts.get(request.name.as_str()) {
                return handler(self, request).await;
            }

            Err(McpError::invalid_params(
                format!("Unknown prompt: {}", request.name),
                None,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::Document;

    fn server() -> DocsMcpServer {
        let store = DocumentStore::from_seed(vec![Document::new("a.md", "hello world")])
            .expect("valid seed");
        DocsMcpServer::new(Arc::new(store))
    }

    #[test]
    fn registry_covers_every_surface_point() {
        let server = server();
        let mut tools: Vec<_> = server.registry.tools.keys().copied().collect();
        tools.sort_unstable();
        assert_eq!(tools, vec!["edit_document", "read_document"]);

        let mut prompts: Vec<_> = server.registry.prompts.keys().copied().collect();
        prompts.sort_unstable();
        assert_eq!(prompts, vec!["format", "summarize"]);

        assert!(server.registry.resources.contains_key(DOCUMENTS_URI));
    }

    #[test]
    fn described_tools_match_registered_tools() {
        let server = server();
        for tool in server.describe_tools() {
            assert!(server.registry.tools.contains_key(tool.name.as_ref()));
            assert!(tool.description.is_some());
        }
    }

    #[test]
    fn template_advertises_text_plain() {
        let templates = server().describe_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].raw.uri_template, DOCUMENT_TEMPLATE_URI);
        assert_eq!(templates[0].raw.mime_type.as_deref(), Some(TEXT_PLAIN));
    }

    #[test]
    fn document_segment_matches_one_path_segment() {
        assert_eq!(document_segment("docs://documents/a.md"), Some("a.md"));
        assert_eq!(document_segment("docs://documents/"), Some(""));
        assert_eq!(document_segment("docs://documents/a.md/extra"), None);
        assert_eq!(document_segment("docs://other/a.md"), None);
    }

    #[test]
    fn server_info_enables_all_capabilities() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_some());
    }
}
