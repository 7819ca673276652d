//! Model Context Protocol (MCP) integration for the document store.
//!
//! The surface area consists of:
//!
//! - Tools: `read_document` and `edit_document`.
//! - Resources: `docs://documents` and a templated `docs://documents/{doc_id}`.
//! - Prompts: `format` and `summarize`.
//!
//! Handlers, schemas, prompt templates, and formatting helpers live in focused submodules.

mod format;
mod handlers;
pub mod prompts;
mod registry;
mod schemas;
mod server;

pub use server::DocsMcpServer;
