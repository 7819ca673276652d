//! HTTP surface for the document store.
//!
//! This module exposes a compact Axum router with a handful of endpoints:
//!
//! - `GET /documents` – List registered document ids in seed order.
//! - `GET /documents/:doc_id` – Return a document body as plain text.
//! - `POST /documents/:doc_id/edit` – Replace every exact occurrence of `old_str` with `new_str`
//!   and report how many occurrences changed.
//! - `GET /metrics` – Observe read/edit counters.
//! - `GET /commands` – Machine-readable command catalog for quick discovery by tools/hosts.
//!
//! The HTTP surface shares the same store with the MCP server, so behavior is identical across
//! interfaces.

use crate::documents::{DocumentApi, DocumentError};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Build the HTTP router exposing the document API surface.
pub fn create_router<S>(service: Arc<S>) -> Router
where
    S: DocumentApi + 'static,
{
    Router::new()
        .route("/documents", get(list_documents::<S>))
        .route("/documents/:doc_id", get(read_document::<S>))
        .route("/documents/:doc_id/edit", post(edit_document::<S>))
        .route("/metrics", get(get_metrics::<S>))
        .route("/commands", get(get_commands))
        .with_state(service)
}

/// Response body for `GET /documents`.
#[derive(Serialize)]
struct DocumentsResponse {
    documents: Vec<String>,
}

/// List registered document ids.
async fn list_documents<S>(State(service): State<Arc<S>>) -> Json<DocumentsResponse>
where
    S: DocumentApi,
{
    Json(DocumentsResponse {
        documents: service.list_documents().await,
    })
}

/// Return the current body of a document.
async fn read_document<S>(
    State(service): State<Arc<S>>,
    Path(doc_id): Path<String>,
) -> Result<String, AppError>
where
    S: DocumentApi,
{
    Ok(service.read_document(&doc_id).await?)
}

/// Request body for `POST /documents/:doc_id/edit`.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EditRequest {
    /// Text to replace; must match exactly, including whitespace.
    old_str: String,
    /// Replacement text.
    new_str: String,
}

/// Response body for `POST /documents/:doc_id/edit`.
#[derive(Serialize)]
struct EditResponse {
    /// Number of occurrences substituted; zero when the text was not found.
    replacements: usize,
}

/// Apply an exact-match substitution to a document.
async fn edit_document<S>(
    State(service): State<Arc<S>>,
    Path(doc_id): Path<String>,
    Json(request): Json<EditRequest>,
) -> Result<Json<EditResponse>, AppError>
where
    S: DocumentApi,
{
    let outcome = service
        .edit_document(&doc_id, &request.old_str, &request.new_str)
        .await?;
    tracing::info!(
        doc_id,
        replacements = outcome.replacements,
        "Edit request completed"
    );
    Ok(Json(EditResponse {
        replacements: outcome.replacements,
    }))
}

/// Return a metrics snapshot with read/edit counters.
async fn get_metrics<S>(State(service): State<Arc<S>>) -> Json<MetricsResponse>
where
    S: DocumentApi,
{
    let snapshot = service.metrics_snapshot();
    Json(MetricsResponse {
        reads: snapshot.reads,
        edits: snapshot.edits,
        replacements: snapshot.replacements,
        not_found: snapshot.not_found,
    })
}

/// Response body for `GET /metrics`.
#[derive(Serialize)]
struct MetricsResponse {
    reads: u64,
    edits: u64,
    replacements: u64,
    not_found: u64,
}

/// Descriptor for a single command in the discovery catalog.
#[derive(Serialize)]
struct CommandDescriptor {
    name: &'static str,
    method: &'static str,
    path: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_example: Option<serde_json::Value>,
}

/// Response body for `GET /commands`.
#[derive(Serialize)]
struct CommandsResponse {
    commands: Vec<CommandDescriptor>,
}

/// Enumerate supported HTTP commands for discovery/UX in hosts and tools.
async fn get_commands() -> Json<CommandsResponse> {
    Json(CommandsResponse {
        commands: vec![
            CommandDescriptor {
                name: "list_documents",
                method: "GET",
                path: "/documents",
                description: "Return the ids of every registered document in listing order.",
                request_example: None,
            },
            CommandDescriptor {
                name: "read_document",
                method: "GET",
                path: "/documents/:doc_id",
                description: "Return the current contents of a document as plain text.",
                request_example: None,
            },
            CommandDescriptor {
                name: "edit_document",
                method: "POST",
                path: "/documents/:doc_id/edit",
                description: "Replace every exact occurrence of old_str with new_str. Response returns { \"replacements\": number }.",
                request_example: Some(json!({
                    "old_str": "condenser tower",
                    "new_str": "cooling tower"
                })),
            },
            CommandDescriptor {
                name: "metrics",
                method: "GET",
                path: "/metrics",
                description: "Return read and edit counters useful for observability dashboards.",
                request_example: None,
            },
        ],
    })
}

struct AppError(DocumentError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            DocumentError::NotFound { .. } => StatusCode::NOT_FOUND,
        };
        (status, self.0.to_string()).into_response()
    }
}

impl From<DocumentError> for AppError {
    fn from(inner: DocumentError) -> Self {
        Self(inner)
    }
}
