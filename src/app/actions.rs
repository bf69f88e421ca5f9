//! Actions representing side effects to be executed by the synchronizer.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing user input or API responses.
//! Actions bridge pure state transformations and effectful operations like
//! network requests, confirmation prompts, and message timers.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event, allowing
//! multiple side effects to be queued atomically. The
//! [`ViewSynchronizer`](crate::sync::ViewSynchronizer) executes them in order.
//!
//! # Example
//!
//! ```rust
//! use activity_board::app::Action;
//! use activity_board::api::ApiRequest;
//!
//! let actions = vec![Action::Request(ApiRequest::FetchActivities { seq: 1 })];
//! assert_eq!(actions.len(), 1);
//! ```

use super::state::TimerId;
use crate::api::ApiRequest;
use std::time::Duration;

/// Commands representing side effects to be executed by the synchronizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Sends a request to the activities API.
    ///
    /// Runs as an independent task; the outcome comes back later as an
    /// [`Event::ApiResponse`](crate::app::Event::ApiResponse). Requests are
    /// never serialized against one another.
    Request(ApiRequest),

    /// Asks the user to confirm a removal.
    ///
    /// An accepted prompt feeds back
    /// [`Event::RemovalConfirmed`](crate::app::Event::RemovalConfirmed); a
    /// declined prompt ends the interaction without any request.
    ConfirmRemoval {
        activity: String,
        email: String,
        /// `"Remove <email> from <activity>?"`.
        prompt: String,
    },

    /// Hides the status message after `after`, unless canceled.
    ScheduleHide {
        timer: TimerId,
        after: Duration,
    },

    /// Cancels a pending hide timer. A timer that already fired is ignored.
    CancelHide(TimerId),
}
