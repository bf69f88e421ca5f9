//! HTTP implementation of the activity API.
//!
//! Talks to the activities REST service with a shared `reqwest` client. The
//! status code decides how a body is read: 2xx bodies decode into the
//! endpoint's payload, anything else is an error document carrying `detail`.
//!
//! # Endpoints
//!
//! ```text
//! GET    {base}/activities
//! POST   {base}/activities/{name}/signup?email={email}
//! DELETE {base}/activities/{name}/participants?email={email}
//! ```
//!
//! Activity names and emails are percent-encoded, so names with spaces or
//! emails with `+` survive the trip.

use crate::api::backend::ActivityApi;
use crate::domain::{ActivityCatalog, BoardError, Result};
use crate::Config;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Success body of the signup and removal endpoints.
#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

/// `reqwest`-backed [`ActivityApi`].
///
/// Cheap to share: the inner client pools connections and the struct is only
/// ever used behind an `Arc`.
#[derive(Debug, Clone)]
pub struct HttpActivityApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpActivityApi {
    /// Creates a client for the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Config`] if `base_url` is not an absolute
    /// http(s) URL or the HTTP client cannot be built.
    ///
    /// # Examples
    ///
    /// ```
    /// use activity_board::api::HttpActivityApi;
    /// use activity_board::Config;
    ///
    /// let api = HttpActivityApi::new(&Config::default())?;
    /// assert_eq!(api.base_url().as_str(), "http://127.0.0.1:8000/");
    /// # Ok::<(), activity_board::BoardError>(())
    /// ```
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| BoardError::Config(format!("invalid base_url {:?}: {e}", config.base_url)))?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(BoardError::Config(format!(
                "base_url must be an http(s) URL, got {:?}",
                config.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| BoardError::Config(format!("failed to build HTTP client: {e}")))?;

        tracing::debug!(base_url = %base_url, "HTTP activity API ready");
        Ok(Self { client, base_url })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins path segments onto the base URL and attaches the `email` query.
    ///
    /// Segments are percent-encoded individually; a base URL with a path
    /// prefix (`http://host/api/`) keeps its prefix.
    fn endpoint(&self, segments: &[&str], email: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| BoardError::Config(format!("base_url cannot carry a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        if let Some(email) = email {
            url.query_pairs_mut().append_pair("email", email);
        }

        Ok(url)
    }

    /// Reads a response body, splitting on status.
    ///
    /// A 2xx body is returned raw so each caller decodes it into its own
    /// shape. Non-2xx answers become [`BoardError::Rejected`] with the body's
    /// `detail` string when there is one; an unparsable error body is a
    /// [`BoardError::Decode`].
    async fn read_success(response: reqwest::Response) -> Result<Vec<u8>> {
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport)?;

        if status.is_success() {
            return Ok(bytes.to_vec());
        }

        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| BoardError::Decode(format!("status {status}: {e}")))?;
        Err(Self::rejection(status, &body))
    }

    fn rejection(status: StatusCode, body: &Value) -> BoardError {
        let detail = body
            .get("detail")
            .and_then(Value::as_str)
            .map(String::from);

        tracing::debug!(status = status.as_u16(), detail = ?detail, "request rejected by server");
        BoardError::Rejected {
            status: status.as_u16(),
            detail,
        }
    }

    fn into_message(body: &[u8]) -> Result<String> {
        serde_json::from_slice::<MessageBody>(body)
            .map(|b| b.message)
            .map_err(|e| BoardError::Decode(format!("expected a message body: {e}")))
    }
}

fn transport(err: reqwest::Error) -> BoardError {
    BoardError::Transport(err.to_string())
}

#[async_trait]
impl ActivityApi for HttpActivityApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog> {
        let url = self.endpoint(&["activities"], None)?;
        tracing::debug!(url = %url, "fetching activities");

        let response = self.client.get(url).send().await.map_err(transport)?;
        let body = Self::read_success(response).await?;

        // Decoded straight from the bytes so the server's key order survives.
        let catalog: ActivityCatalog = serde_json::from_slice(&body)
            .map_err(|e| BoardError::Decode(format!("unexpected catalog shape: {e}")))?;

        tracing::debug!(count = catalog.len(), "activities fetched");
        Ok(catalog)
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<String> {
        let url = self.endpoint(&["activities", activity, "signup"], Some(email))?;
        tracing::debug!(url = %url, "posting signup");

        let response = self.client.post(url).send().await.map_err(transport)?;
        let body = Self::read_success(response).await?;
        Self::into_message(&body)
    }

    async fn remove_participant(&self, activity: &str, email: &str) -> Result<String> {
        let url = self.endpoint(&["activities", activity, "participants"], Some(email))?;
        tracing::debug!(url = %url, "deleting participant");

        let response = self.client.delete(url).send().await.map_err(transport)?;
        let body = Self::read_success(response).await?;
        Self::into_message(&body)
    }
}
