//! Seed data used to populate the store at process start.

use std::{collections::HashSet, path::Path};

use super::types::{Document, SeedError};

/// Built-in document set, in listing order.
const DEFAULT_DOCUMENTS: [(&str, &str); 6] = [
    (
        "deposition.md",
        "This deposition covers the testimony of Angela Smith, P.E.",
    ),
    (
        "report.pdf",
        "The report details the state of a 20m condenser tower.",
    ),
    (
        "financials.docx",
        "These financials outline the project's budget and expenditures.",
    ),
    (
        "outlook.pdf",
        "This document presents the projected future performance of the system.",
    ),
    (
        "plan.md",
        "The plan outlines the steps for the project's implementation.",
    ),
    (
        "spec.txt",
        "These specifications define the technical requirements for the equipment.",
    ),
];

/// Return the built-in seed documents.
pub fn default_documents() -> Vec<Document> {
    DEFAULT_DOCUMENTS
        .iter()
        .map(|(id, content)| Document::new(*id, *content))
        .collect()
}

/// Parse a JSON array of `{ "id", "content" }` objects, preserving array order.
pub fn parse_documents(raw: &str) -> Result<Vec<Document>, SeedError> {
    let documents: Vec<Document> = serde_json::from_str(raw)?;
    ensure_unique_ids(&documents)?;
    Ok(documents)
}

/// Read and parse a seed file from disk.
pub fn load_documents(path: &Path) -> Result<Vec<Document>, SeedError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let documents = parse_documents(&raw)?;
    tracing::info!(
        path = %path.display(),
        documents = documents.len(),
        "Loaded seed documents"
    );
    Ok(documents)
}

pub(crate) fn ensure_unique_ids(documents: &[Document]) -> Result<(), SeedError> {
    let mut seen = HashSet::with_capacity(documents.len());
    for document in documents {
        if !seen.insert(document.id.as_str()) {
            return Err(SeedError::DuplicateId(document.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_documents_keep_listing_order() {
        let ids: Vec<_> = default_documents().into_iter().map(|doc| doc.id).collect();
        assert_eq!(
            ids,
            vec![
                "deposition.md",
                "report.pdf",
                "financials.docx",
                "outlook.pdf",
                "plan.md",
                "spec.txt"
            ]
        );
    }

    #[test]
    fn parse_documents_preserves_array_order() {
        let raw = r#"[
            {"id": "z.md", "content": "last letter"},
            {"id": "a.md", "content": "first letter"}
        ]"#;
        let docs = parse_documents(raw).expect("valid seed");
        assert_eq!(docs[0].id, "z.md");
        assert_eq!(docs[1].content, "first letter");
    }

    #[test]
    fn parse_documents_rejects_duplicates() {
        let raw = r#"[{"id": "a", "content": "1"}, {"id": "a", "content": "2"}]"#;
        let err = parse_documents(raw).expect_err("duplicate ids must fail");
        assert!(matches!(err, SeedError::DuplicateId(ref id) if id == "a"));
    }

    #[test]
    fn parse_documents_rejects_unknown_fields() {
        let raw = r#"[{"id": "a", "content": "1", "title": "nope"}]"#;
        assert!(matches!(parse_documents(raw), Err(SeedError::Parse(_))));
    }

    #[test]
    fn empty_seed_is_allowed() {
        assert!(parse_documents("[]").expect("empty seed").is_empty());
    }

    #[test]
    fn load_documents_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"[{{"id": "notes.txt", "content": "hello"}}]"#).expect("write seed");

        let docs = load_documents(file.path()).expect("seed file loads");
        assert_eq!(docs, vec![Document::new("notes.txt", "hello")]);
    }

    #[test]
    fn load_documents_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.json");
        let err = load_documents(&missing).expect_err("missing file");
        assert!(matches!(err, SeedError::Read { .. }));
        assert!(err.to_string().contains("absent.json"));
    }
}
