//! Tracing setup.
//!
//! Two layers: ANSI console output (JSON when `LOG_FORMAT=json`) and a
//! plain append-only log file under the work directory. File lines are
//! timestamped and severity-tagged by the fmt layer.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::RunResult;

/// Initialize tracing with a console layer and an append-only file
/// layer at `log_path`. The file's parent directory is created if
/// missing.
pub fn init(log_path: &Path) -> RunResult<()> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shortify=info,shortify_cli=info"));

    let log_writer = Arc::new(log_file);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    if use_json {
        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(log_writer);
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(file_layer)
            .with(env_filter)
            .init();
    } else {
        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(log_writer);
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(file_layer)
            .with(env_filter)
            .init();
    }

    Ok(())
}
