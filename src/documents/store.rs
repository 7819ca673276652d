//! In-memory document store shared by the MCP and HTTP surfaces.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, PoisonError, RwLock},
};

use async_trait::async_trait;

use crate::{
    documents::{
        seed::{default_documents, ensure_unique_ids, load_documents},
        types::{Document, DocumentError, ReplaceOutcome, SeedError},
    },
    metrics::{DocumentMetrics, MetricsSnapshot},
};

/// Authoritative mapping from document id to text content.
///
/// The id set is fixed when the store is built; only content changes afterwards. Reads take a
/// shared lock and edits take the exclusive lock for the whole read-modify-write, so a reader
/// never observes a half-applied substitution even when the transport runs requests in
/// parallel. Construct once at startup and share through an `Arc`.
pub struct DocumentStore {
    order: Vec<String>,
    contents: RwLock<HashMap<String, String>>,
    metrics: Arc<DocumentMetrics>,
}

/// Abstraction over the store used by external surfaces (HTTP, tests).
#[async_trait]
pub trait DocumentApi: Send + Sync {
    /// Return the current content of `doc_id`.
    async fn read_document(&self, doc_id: &str) -> Result<String, DocumentError>;

    /// Replace every exact occurrence of `old_str` with `new_str` in `doc_id`.
    async fn edit_document(
        &self,
        doc_id: &str,
        old_str: &str,
        new_str: &str,
    ) -> Result<ReplaceOutcome, DocumentError>;

    /// List registered ids in seed order.
    async fn list_documents(&self) -> Vec<String>;

    /// Retrieve the current metrics snapshot for diagnostics.
    fn metrics_snapshot(&self) -> MetricsSnapshot;
}

impl DocumentStore {
    /// Build a store from seed documents, rejecting duplicate ids.
    pub fn from_seed(documents: Vec<Document>) -> Result<Self, SeedError> {
        ensure_unique_ids(&documents)?;
        Ok(Self::build(documents))
    }

    /// Build a store holding the built-in document set.
    pub fn with_defaults() -> Self {
        Self::build(default_documents())
    }

    /// Build a store from an optional seed file, falling back to the built-in set.
    pub fn from_seed_file(path: Option<&Path>) -> Result<Self, SeedError> {
        match path {
            Some(path) => Self::from_seed(load_documents(path)?),
            None => Ok(Self::with_defaults()),
        }
    }

    /// Return the current content for `doc_id`.
    pub fn get(&self, doc_id: &str) -> Result<String, DocumentError> {
        let contents = self.contents.read().unwrap_or_else(PoisonError::into_inner);
        match contents.get(doc_id) {
            Some(content) => {
                self.metrics.record_read();
                tracing::debug!(doc_id, bytes = content.len(), "Read document");
                Ok(content.clone())
            }
            None => Err(self.not_found(doc_id)),
        }
    }

    /// Replace every exact occurrence of `old_text` with `new_text`.
    ///
    /// Matching is literal and case-sensitive. When `old_text` is absent, or empty, the content
    /// is left untouched and the call still succeeds with zero replacements.
    pub fn replace(
        &self,
        doc_id: &str,
        old_text: &str,
        new_text: &str,
    ) -> Result<ReplaceOutcome, DocumentError> {
        let mut contents = self
            .contents
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let Some(content) = contents.get_mut(doc_id) else {
            return Err(self.not_found(doc_id));
        };

        let replacements = if old_text.is_empty() {
            tracing::debug!(doc_id, "Empty search text; leaving document unchanged");
            0
        } else {
            content.matches(old_text).count()
        };
        if replacements > 0 {
            *content = content.replace(old_text, new_text);
        }
        drop(contents);

        self.metrics.record_edit(replacements as u64);
        tracing::info!(doc_id, replacements, "Edited document");
        Ok(ReplaceOutcome { replacements })
    }

    /// Return all registered ids in seed order.
    pub fn list_ids(&self) -> Vec<String> {
        tracing::debug!(documents = self.order.len(), "Listed documents");
        self.order.clone()
    }

    /// Whether `doc_id` is registered.
    pub fn contains(&self, doc_id: &str) -> bool {
        self.contents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(doc_id)
    }

    /// Number of registered documents.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Return the current metrics snapshot.
    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn build(documents: Vec<Document>) -> Self {
        let order = documents.iter().map(|doc| doc.id.clone()).collect();
        let contents = documents
            .into_iter()
            .map(|doc| (doc.id, doc.content))
            .collect();
        Self {
            order,
            contents: RwLock::new(contents),
            metrics: Arc::new(DocumentMetrics::new()),
        }
    }

    fn not_found(&self, doc_id: &str) -> DocumentError {
        self.metrics.record_not_found();
        tracing::warn!(doc_id, "Unknown document id");
        DocumentError::not_found(doc_id)
    }
}

#[async_trait]
impl DocumentApi for DocumentStore {
    async fn read_document(&self, doc_id: &str) -> Result<String, DocumentError> {
        self.get(doc_id)
    }

    async fn edit_document(
        &self,
        doc_id: &str,
        old_str: &str,
        new_str: &str,
    ) -> Result<ReplaceOutcome, DocumentError> {
        self.replace(doc_id, old_str, new_str)
    }

    async fn list_documents(&self) -> Vec<String> {
        self.list_ids()
    }

    fn metrics_snapshot(&self) -> MetricsSnapshot {
        DocumentStore::metrics_snapshot(self)
    }
}
