//! Logging with file-based output.
//!
//! This module provides the tracing infrastructure for the board. The
//! terminal is occupied by the UI, so all diagnostics go to a log file.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → activity-board.log
//! ```
//!
//! # Features
//!
//! - **File Output**: `~/.local/share/activity-board/activity-board.log` by default
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Span Context**: Each line carries the `handle_event` / `api_request`
//!   span it was logged in
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `log_level` config option or `--log-level` flag
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Tracing initialization and subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
