//! MCP server entrypoint (stdio transport).
//!
//! Launches an MCP server that exposes the document tools, resources, and prompts over stdio.
//! This mode is designed for editor/agent integrations and shares all runtime configuration with
//! the HTTP binary. Stdout carries protocol frames, so logs go to stderr and the log file.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use docmcp::{config, documents::DocumentStore, logging, mcp::DocsMcpServer};
use rmcp::{service::ServiceExt, transport::stdio};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "docmcp_mcp",
    about = "Serve the document registry over MCP on stdio"
)]
struct Cli {
    /// JSON seed file to load instead of `DOCMCP_SEED_FILE` or the built-in documents.
    #[arg(long)]
    seed_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    config::init_config();
    logging::init_tracing(logging::LogOutput::Stderr);

    let seed_file = cli
        .seed_file
        .or_else(|| config::get_config().seed_file.clone());
    let store = DocumentStore::from_seed_file(seed_file.as_deref())
        .context("failed to load seed documents")?;
    tracing::info!(documents = store.len(), "Document store ready");

    let server = DocsMcpServer::new(Arc::new(store));

    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server over stdio")?;

    service
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;

    Ok(())
}
