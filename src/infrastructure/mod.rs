//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides platform path handling for the configuration file,
//! the log directory, and user-supplied paths such as custom theme files.

pub mod paths;

pub use paths::{default_config_file, expand_tilde, get_config_dir, get_data_dir};
