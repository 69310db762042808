// src/infra/logger.rs — Structured logging with tracing

use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Log to stderr. Used by the line-mode chat and the server.
pub fn init_logging(level: &str) {
    fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .compact()
        .init();
}

/// Log to a file. The terminal UI owns the screen, so its logs go here instead.
pub fn init_file_logging(level: &str, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
