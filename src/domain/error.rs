//! Error types for the activity board client.
//!
//! This module defines the centralized error type [`BoardError`] and a type alias
//! [`Result`] for error handling throughout the crate. All errors are implemented
//! using the `thiserror` crate.
//!
//! The variants mirror the failure taxonomy the client surfaces to the user:
//! transport failures, server rejections carrying a `detail` message, and
//! malformed response bodies. Local failures (I/O, theme, configuration) only
//! occur during startup.

use thiserror::Error;

/// The main error type for activity board operations.
///
/// # Examples
///
/// ```
/// use activity_board::BoardError;
///
/// let err = BoardError::Rejected {
///     status: 400,
///     detail: Some("Activity full".to_string()),
/// };
/// assert_eq!(err.detail(), Some("Activity full"));
/// assert!(!err.is_transport());
/// ```
#[derive(Debug, Error)]
pub enum BoardError {
    /// The request never produced a response.
    ///
    /// Connection refused, DNS failure, timeout, or a body that could not be
    /// read off the wire. Surfaced to the user as a fixed generic message.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    ///
    /// `detail` holds the `detail` string from the JSON error body when the
    /// server provided one.
    #[error("Request rejected with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// Server-provided explanation, if any.
        detail: Option<String>,
    },

    /// The response body could not be parsed into the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    ///
    /// Occurs when the config file is malformed or the base URL cannot be used
    /// to build endpoint URLs.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BoardError {
    /// Returns the server-provided detail message of a rejection.
    ///
    /// Every other variant, and a rejection without a detail, yields `None`.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Whether the error belongs to the "generic failure" class.
    ///
    /// Transport and decode failures are both reported with fixed text; only
    /// server rejections carry their own message.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Decode(_))
    }
}

/// A specialized `Result` type for activity board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_only_comes_from_rejections() {
        let rejected = BoardError::Rejected {
            status: 404,
            detail: Some("Activity not found".to_string()),
        };
        assert_eq!(rejected.detail(), Some("Activity not found"));

        let bare = BoardError::Rejected { status: 500, detail: None };
        assert_eq!(bare.detail(), None);

        assert_eq!(BoardError::Transport("refused".to_string()).detail(), None);
    }

    #[test]
    fn decode_failures_count_as_transport() {
        assert!(BoardError::Decode("eof".to_string()).is_transport());
        assert!(BoardError::Transport("timeout".to_string()).is_transport());
        assert!(!BoardError::Config("bad".to_string()).is_transport());
    }

    #[test]
    fn rejection_display_includes_detail() {
        let err = BoardError::Rejected {
            status: 400,
            detail: Some("Student is already signed up".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Request rejected with status 400: Student is already signed up"
        );
    }
}
