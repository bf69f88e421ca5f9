//! Activity Board: a terminal client for a school activities REST API.
//!
//! Activity Board keeps a terminal view in step with the activities server:
//! - Lists every activity with its schedule, availability and participants
//! - Signs a student up for an activity by email
//! - Removes a participant after a confirmation prompt, with a short undo window
//! - Shows transient status messages that hide themselves
//!
//! All business rules (capacity, duplicates, persistence) live on the server.
//! The client re-fetches the whole catalog after every confirmed change.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shell (main.rs, shell/)                   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │ Events
//! ┌─────────────────────────────────────────────────────┐
//! │  Synchronizer (sync/)                               │  ← Runtime
//! │  - Executes actions, owns view state                │
//! │  - Hide timers, confirmation prompt                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action emission                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────┐                       ┌───────────────┐
//! │ UI Layer      │                       │ API Layer     │
//! │ (ui/)         │                       │ (api/)        │
//! │ - Rendering   │                       │ - HTTP client │
//! │ - Theming     │                       │ - Req/resp    │
//! │ - Components  │                       │   protocol    │
//! └───────────────┘                       └───────────────┘
//!         │                                       │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Activity catalog (domain/activity)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber                               │
//! │  - Rotating log file                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: View state machine with event/action model
//! - [`api`]: Activities API trait, HTTP client, request protocol
//! - [`domain`]: Core domain types (Activity, catalog, errors)
//! - [`sync`]: Runtime executing actions against the API and timers
//! - [`ui`]: Terminal rendering with theme support
//! - [`shell`]: Command parsing and terminal confirmation
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`observability`]: Tracing setup with a rotating log file
//!
//! # Configuration
//!
//! The board reads an optional TOML file, by default
//! `~/.config/activity-board/config.toml`:
//!
//! ```toml
//! base_url = "http://127.0.0.1:8000"
//! theme = "catppuccin-latte"
//! log_level = "debug"
//! request_timeout_secs = 10
//! ```
//!
//! Command-line flags override the file.
//!
//! # Example
//!
//! ```rust
//! use activity_board::{handle_event, initialize, Config, Event};
//!
//! let config = Config::from_toml_str("theme = \"catppuccin-latte\"")?;
//! let mut state = initialize(&config);
//! assert_eq!(state.theme.name, "catppuccin-latte");
//!
//! let (_render, actions) = handle_event(&mut state, &Event::Refresh);
//! assert_eq!(actions.len(), 1); // one catalog fetch to execute
//! # Ok::<(), activity_board::BoardError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod shell;
pub mod sync;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, ViewState};
pub use domain::{Activity, ActivityCatalog, BoardError, Result};
pub use sync::ViewSynchronizer;
pub use ui::Theme;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default address of the activities server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Board configuration.
///
/// Every field has a default, so an empty or missing file is valid.
///
/// # Example
///
/// ```toml
/// base_url = "https://school.example.org/api"
/// theme_file = "~/themes/school.toml"
/// log_file = "/tmp/board.log"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the activities API. A path prefix is kept, so
    /// `https://host/api` requests `https://host/api/activities`.
    ///
    /// Default: `http://127.0.0.1:8000`
    pub base_url: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file. `~` is expanded.
    ///
    /// Takes precedence over `theme`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Log level filter.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub log_level: Option<String>,

    /// Log file path. Default: `activity-board.log` in the data directory.
    pub log_file: Option<PathBuf>,

    /// Per-request timeout in seconds. Default: 10
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            theme: None,
            theme_file: None,
            log_level: None,
            log_file: None,
            request_timeout_secs: 10,
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Config`] on invalid TOML, wrong value types, or
    /// unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| BoardError::Config(e.to_string()))
    }

    /// Loads configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. The default file is optional: when it is
    /// absent, the built-in defaults are used.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Config`] if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match infrastructure::default_config_file() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| BoardError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }
}

/// Initializes the view state from configuration.
///
/// Resolves the theme (file, then name, then default) and returns a
/// [`ViewState`] in its loading state, ready for the startup refresh. Theme
/// problems never abort startup; they fall back to the default theme with a
/// debug log.
pub fn initialize(config: &Config) -> ViewState {
    tracing::debug!(base_url = %config.base_url, "initializing activity board");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    ViewState::new(theme)
}
