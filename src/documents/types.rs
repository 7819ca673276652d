//! Core data types and error definitions for the document store.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The operation referenced an id that was never registered.
    #[error("Doc with id {doc_id} not found")]
    NotFound {
        /// Identifier supplied by the caller.
        doc_id: String,
    },
}

impl DocumentError {
    pub(crate) fn not_found(doc_id: &str) -> Self {
        Self::NotFound {
            doc_id: doc_id.to_string(),
        }
    }
}

/// Errors raised while building a store from seed data.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file '{}': {source}", path.display())]
    Read {
        /// Seed file location.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The seed file was not a JSON array of documents.
    #[error("invalid seed document list: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two seed entries share the same id.
    #[error("duplicate document id in seed: {0}")]
    DuplicateId(String),
}

/// A single document as it appears in seed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    /// Stable identifier chosen by whoever seeded the store.
    pub id: String,
    /// Opaque text content.
    pub content: String,
}

impl Document {
    /// Build a document from any string-like id and content.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

/// Result of an exact-match substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReplaceOutcome {
    /// Number of occurrences substituted; zero when the old text was absent or empty.
    pub replacements: usize,
}

impl ReplaceOutcome {
    /// Whether the edit left the content untouched.
    pub fn is_noop(&self) -> bool {
        self.replacements == 0
    }
}
