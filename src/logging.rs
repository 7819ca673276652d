//! Tracing configuration and log routing.
//!
//! The HTTP binary logs to stdout with a compact formatter. The MCP binary speaks the protocol
//! over stdout, so it logs to stderr instead. Both also append to a file: `DOCMCP_LOG_FILE`
//! when set, otherwise `logs/docmcp.log`. A non‑blocking writer keeps file I/O off request
//! paths.
use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::config_or_default;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Console stream receiving formatted log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// Standard output; used by the HTTP server.
    Stdout,
    /// Standard error; required when stdout carries protocol frames.
    Stderr,
}

/// Configure tracing subscribers for the console and optional file logging.
///
/// - Respects `RUST_LOG` for filtering (defaults to `info`).
/// - Installs a compact console layer on the requested stream and, when available, a file layer.
/// - Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing(output: LogOutput) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console_layer = match output {
        LogOutput::Stdout => fmt::layer().with_target(false).compact().boxed(),
        LogOutput::Stderr => fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(false)
            .compact()
            .boxed(),
    };

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    let result = if let Some(writer) = configure_file_writer() {
        let file_layer = fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .with_ansi(false)
            .compact();

        registry.with(file_layer).try_init()
    } else {
        registry.try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// Build a non‑blocking writer for file logging.
///
/// Returns `None` when the logs directory cannot be created or the target file cannot be opened.
fn configure_file_writer() -> Option<NonBlocking> {
    if let Some(path) = config_or_default().log_file.as_deref() {
        open_log_file(path)
    } else {
        if let Err(err) = std::fs::create_dir_all("logs") {
            eprintln!("Failed to create logs directory: {err}");
            return None;
        }
        let file_appender = tracing_appender::rolling::never("logs", "docmcp.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let _ = LOG_GUARD.set(guard);
        Some(non_blocking)
    }
}

fn open_log_file(path: &Path) -> Option<NonBlocking> {
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let _ = LOG_GUARD.set(guard);
            Some(non_blocking)
        }
        Err(err) => {
            eprintln!("Failed to open log file {}: {err}", path.display());
            None
        }
    }
}
