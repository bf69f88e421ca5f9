//! Domain layer for the activity board client.
//!
//! This module contains the core domain types, independent of HTTP, terminal
//! rendering, or the async runtime.
//!
//! # Organization
//!
//! - [`activity`]: Activity model and the order-preserving catalog
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use activity_board::domain::{ActivityCatalog, Result};
//!
//! fn parse(body: &str) -> Result<ActivityCatalog> {
//!     serde_json::from_str(body)
//!         .map_err(|e| activity_board::BoardError::Decode(e.to_string()))
//! }
//!
//! let catalog = parse("{}").unwrap();
//! assert!(catalog.is_empty());
//! ```

pub mod activity;
pub mod error;

pub use activity::{Activity, ActivityCatalog};
pub use error::{BoardError, Result};
