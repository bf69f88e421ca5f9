//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, setting up the pipeline from
//! `tracing` macros to the rotating log file.

use super::file_writer::FileWriter;
use crate::Config;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based output.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters spans and events based on the configured level
/// 2. Formats them as plain text lines, with span context
/// 3. Writes to a rotating file with backups
///
/// Nothing goes to stdout or stderr: the terminal is the UI.
///
/// # Parameters
///
/// * `config` - Configuration containing the `log_level` and `log_file` options
///
/// # Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` environment variable
/// 2. `config.log_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// `config.log_file` if set, otherwise `activity-board.log` in the data
/// directory (see [`crate::infrastructure::paths::get_data_dir`]).
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently skips setup if directory creation fails (logging is optional)
/// - Idempotent: Safe to call multiple times (only first call takes effect)
///
/// # Example
///
/// ```rust
/// use activity_board::observability::init_tracing;
/// use activity_board::Config;
///
/// let dir = std::env::temp_dir().join("activity-board-doc");
/// let config = Config {
///     log_level: Some("debug".to_string()),
///     log_file: Some(dir.join("board.log")),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.log_level.clone().unwrap_or_else(|| "info".to_string());

    let log_file = config.log_file.clone().unwrap_or_else(default_log_file);
    if let Some(parent) = log_file.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let writer = Arc::new(FileWriter::new(log_file));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true),
    );

    let _ = subscriber.try_init();
}

fn default_log_file() -> PathBuf {
    crate::infrastructure::paths::get_data_dir().join("activity-board.log")
}
