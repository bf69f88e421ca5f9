//! Request and response protocol between the view logic and the API tasks.
//!
//! The event handler never awaits the network. It emits an [`ApiRequest`], the
//! synchronizer runs it as an independent task via [`ApiRequest::execute`], and
//! the outcome comes back as an [`ApiResponse`] wrapped in an event. Every
//! response echoes the identifying fields of its request so the handler can
//! react without remembering what was in flight.

use crate::api::backend::ActivityApi;
use crate::domain::{ActivityCatalog, BoardError};

/// Which user gesture produced a signup request.
///
/// A form submission and an undo both hit the same endpoint, but their
/// outcomes are reported with different messages and hide delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOrigin {
    /// The signup form was submitted.
    Form,
    /// The undo button of a removal message was pressed.
    Undo,
}

/// Requests sent from the event handler to the API layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    /// Load the full catalog.
    FetchActivities {
        /// Monotonic refresh sequence number, used to drop stale responses.
        seq: u64,
    },

    /// Sign an email up for an activity.
    SignUp {
        activity: String,
        email: String,
        origin: SignupOrigin,
    },

    /// Remove a participant from an activity.
    RemoveParticipant { activity: String, email: String },
}

/// Outcomes reported back to the event handler.
///
/// Failures are split the way the user sees them: `*Rejected` carries the
/// server's optional detail message, `*Failed` covers transport and decode
/// errors that are reported with fixed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    /// The catalog was fetched and parsed.
    ActivitiesLoaded { seq: u64, catalog: ActivityCatalog },

    /// The catalog could not be loaded, for any reason.
    ActivitiesFailed { seq: u64, error: String },

    /// The server accepted a signup.
    SignedUp {
        activity: String,
        email: String,
        origin: SignupOrigin,
        message: String,
    },

    /// The server refused a signup.
    SignupRejected {
        activity: String,
        email: String,
        origin: SignupOrigin,
        detail: Option<String>,
    },

    /// A signup never got a usable answer.
    SignupFailed {
        activity: String,
        email: String,
        origin: SignupOrigin,
        error: String,
    },

    /// The server removed a participant.
    ParticipantRemoved {
        activity: String,
        email: String,
        message: String,
    },

    /// The server refused a removal.
    RemovalRejected {
        activity: String,
        email: String,
        detail: Option<String>,
    },

    /// A removal never got a usable answer.
    RemovalFailed {
        activity: String,
        email: String,
        error: String,
    },
}

impl ApiRequest {
    /// Short name for logs and spans.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::FetchActivities { .. } => "fetch_activities",
            Self::SignUp { .. } => "sign_up",
            Self::RemoveParticipant { .. } => "remove_participant",
        }
    }

    /// Performs the request and folds the result into an [`ApiResponse`].
    ///
    /// Never fails: every error is converted at this boundary. A catalog
    /// fetch failure of any kind becomes `ActivitiesFailed`; signup and
    /// removal errors are split into rejected (server said no) and failed.
    pub async fn execute(self, api: &dyn ActivityApi) -> ApiResponse {
        match self {
            Self::FetchActivities { seq } => match api.fetch_activities().await {
                Ok(catalog) => ApiResponse::ActivitiesLoaded { seq, catalog },
                Err(e) => ApiResponse::ActivitiesFailed {
                    seq,
                    error: e.to_string(),
                },
            },
            Self::SignUp {
                activity,
                email,
                origin,
            } => match api.sign_up(&activity, &email).await {
                Ok(message) => ApiResponse::SignedUp {
                    activity,
                    email,
                    origin,
                    message,
                },
                Err(BoardError::Rejected { detail, .. }) => ApiResponse::SignupRejected {
                    activity,
                    email,
                    origin,
                    detail,
                },
                Err(e) => ApiResponse::SignupFailed {
                    activity,
                    email,
                    origin,
                    error: e.to_string(),
                },
            },
            Self::RemoveParticipant { activity, email } => {
                match api.remove_participant(&activity, &email).await {
                    Ok(message) => ApiResponse::ParticipantRemoved {
                        activity,
                        email,
                        message,
                    },
                    Err(BoardError::Rejected { detail, .. }) => ApiResponse::RemovalRejected {
                        activity,
                        email,
                        detail,
                    },
                    Err(e) => ApiResponse::RemovalFailed {
                        activity,
                        email,
                        error: e.to_string(),
                    },
                }
            }
        }
    }
}
