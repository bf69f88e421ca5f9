//! Activity API abstraction.
//!
//! This module defines the [`ActivityApi`] trait that abstracts over the REST
//! collaborator owning all activity data. The synchronizer only ever talks to
//! this trait, so the view logic can be exercised without a server.
//!
//! Each method maps directly to one endpoint and one user intent; there is no
//! generic request surface.

use crate::domain::{ActivityCatalog, Result};
use async_trait::async_trait;

/// Access to the activities REST API.
///
/// Implementations must be shareable across tasks: every request runs as an
/// independent task holding an `Arc<dyn ActivityApi>`.
///
/// # Implementations
///
/// - [`HttpActivityApi`](crate::api::HttpActivityApi): `reqwest` client (default)
///
/// # Errors
///
/// All methods report failures with the crate error taxonomy:
/// [`BoardError::Transport`](crate::BoardError::Transport) when no response
/// arrived, [`BoardError::Rejected`](crate::BoardError::Rejected) for non-2xx
/// answers, [`BoardError::Decode`](crate::BoardError::Decode) for unparsable
/// bodies.
#[async_trait]
pub trait ActivityApi: Send + Sync {
    /// Fetches the whole catalog (`GET /activities`).
    async fn fetch_activities(&self) -> Result<ActivityCatalog>;

    /// Signs `email` up for `activity` (`POST /activities/{name}/signup`).
    ///
    /// Returns the server's confirmation message.
    async fn sign_up(&self, activity: &str, email: &str) -> Result<String>;

    /// Removes `email` from `activity` (`DELETE /activities/{name}/participants`).
    ///
    /// Returns the server's confirmation message.
    async fn remove_participant(&self, activity: &str, email: &str) -> Result<String>;
}
