#![deny(missing_docs)]

//! Core library for the Document MCP server.

/// HTTP routing and REST handlers.
pub mod api;
/// Environment-driven configuration management.
pub mod config;
/// Document registry with exact-match editing.
pub mod documents;
/// Structured logging and tracing setup.
pub mod logging;
/// Model Context Protocol server implementation.
pub mod mcp;
/// Store activity counters.
pub mod metrics;
