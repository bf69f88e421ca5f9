//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! timer expiries, and API responses, translating them into state changes
//! and action sequences. It serves as the primary control flow coordinator
//! for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the shell, the hide timers, or finished API tasks
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `ViewState` methods
//! 4. Actions are collected and returned for execution
//!
//! The handler never awaits anything. Every network round-trip is an
//! [`Action::Request`] whose outcome returns as [`Event::ApiResponse`], so the
//! whole signup/removal/undo flow can be driven synchronously in tests.
//!
//! # Event Types
//!
//! - **Form**: `SetEmail`, `SetActivity`, `SelectActivity`, `SubmitSignup`
//! - **Roster**: `RemoveParticipant`, `RemovalConfirmed`, `Undo`
//! - **System**: `Refresh`, `HideTimerFired`
//! - **API**: `ApiResponse` with typed outcome variants
//!
//! # Example
//!
//! ```rust
//! use activity_board::app::{handle_event, Action, Event, ViewState};
//! use activity_board::api::ApiRequest;
//! use activity_board::Theme;
//!
//! let mut state = ViewState::new(Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::Refresh);
//! assert!(!render);
//! assert_eq!(actions, vec![Action::Request(ApiRequest::FetchActivities { seq: 1 })]);
//! ```

use super::form::resolve_activity;
use super::state::{Listing, PendingUndo, StatusKind, ViewState};
use crate::api::{ApiRequest, ApiResponse, SignupOrigin};
use crate::app::Action;
use std::time::Duration;

/// Hide delay for signup outcomes, rejections, and the undo window.
pub const MESSAGE_HIDE_DELAY: Duration = Duration::from_millis(5000);

/// Hide delay after a participant was restored by undo.
pub const RESTORED_HIDE_DELAY: Duration = Duration::from_millis(3000);

const SIGNUP_FALLBACK: &str = "An error occurred";
const SIGNUP_TRANSPORT_FAILURE: &str = "Failed to sign up. Please try again.";
const REMOVAL_FALLBACK: &str = "Failed to remove participant";
const REMOVAL_TRANSPORT_FAILURE: &str = "Failed to remove participant. Please try again.";
const UNDO_FALLBACK: &str = "Failed to undo";
const UNDO_TRANSPORT_FAILURE: &str = "Failed to undo. Please try again.";

/// Events triggered by user input, timers, or API responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The synchronizer processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Re-fetches the catalog.
    Refresh,

    /// Replaces the email field.
    SetEmail(String),

    /// Sets the select's value. Only an exact catalog key is kept; anything
    /// else returns the select to its placeholder.
    SetActivity(String),

    /// Selects the activity matching a name or fuzzy query.
    SelectActivity(String),

    /// Submits the signup form.
    SubmitSignup,

    /// A remove control was pressed; asks for confirmation first.
    RemoveParticipant {
        activity: String,
        email: String,
    },

    /// The user accepted the removal prompt.
    RemovalConfirmed {
        activity: String,
        email: String,
    },

    /// The undo button of the visible removal message was pressed.
    Undo,

    /// A scheduled auto-hide elapsed.
    HideTimerFired(super::state::TimerId),

    /// Wraps the outcome of a finished API request.
    ApiResponse(ApiResponse),
}

/// Processes an event, mutates view state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to view state
/// * `event` - Event to process
///
/// # Returns
///
/// Whether the screen must be re-rendered, and the actions to execute in
/// order. The action list is empty when the event needs no side effects.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event for debugging.
pub fn handle_event(state: &mut ViewState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Refresh => (false, vec![refresh(state)]),
        Event::SetEmail(email) => {
            state.form.set_email(email);
            (true, vec![])
        }
        Event::SetActivity(name) => {
            if state.catalog.get(name).is_some() {
                state.form.activity.clone_from(name);
            } else {
                tracing::debug!(activity = %name, "not an activity option, selecting placeholder");
                state.form.activity.clear();
            }
            state.form.hint = None;
            (true, vec![])
        }
        Event::SelectActivity(query) => {
            if let Some(name) = resolve_activity(&state.catalog, query) {
                tracing::debug!(activity = %name, "activity selected");
                state.form.activity = name;
                state.form.hint = None;
            } else {
                state.form.hint = Some(format!("No activity matches \"{}\".", query.trim()));
            }
            (true, vec![])
        }
        Event::SubmitSignup => match state.form.validate() {
            Ok(submission) => {
                state.form.hint = None;
                tracing::debug!(
                    activity = %submission.activity,
                    email = %submission.email,
                    "submitting signup"
                );
                (
                    true,
                    vec![Action::Request(ApiRequest::SignUp {
                        activity: submission.activity,
                        email: submission.email,
                        origin: SignupOrigin::Form,
                    })],
                )
            }
            Err(hint) => {
                tracing::debug!(hint = %hint, "signup blocked by form validation");
                state.form.hint = Some(hint);
                (true, vec![])
            }
        },
        Event::RemoveParticipant { activity, email } => (
            false,
            vec![Action::ConfirmRemoval {
                activity: activity.clone(),
                email: email.clone(),
                prompt: format!("Remove {email} from {activity}?"),
            }],
        ),
        Event::RemovalConfirmed { activity, email } => (
            false,
            vec![Action::Request(ApiRequest::RemoveParticipant {
                activity: activity.clone(),
                email: email.clone(),
            })],
        ),
        Event::Undo => {
            let Some(undo) = state.pending_undo() else {
                tracing::debug!("no undo available");
                return (false, vec![]);
            };

            tracing::debug!(token = %undo.token, email = %undo.email, "undoing removal");
            (
                false,
                vec![
                    Action::CancelHide(undo.timer),
                    Action::Request(ApiRequest::SignUp {
                        activity: undo.activity.clone(),
                        email: undo.email.clone(),
                        origin: SignupOrigin::Undo,
                    }),
                ],
            )
        }
        Event::HideTimerFired(timer) => {
            if !state.status.visible {
                return (false, vec![]);
            }
            tracing::debug!(timer = timer.0, "hiding status message");
            state.hide_status();
            (true, vec![])
        }
        Event::ApiResponse(response) => handle_response(state, response),
    }
}

fn handle_response(state: &mut ViewState, response: &ApiResponse) -> (bool, Vec<Action>) {
    match response {
        ApiResponse::ActivitiesLoaded { seq, catalog } => {
            if !state.accept_refresh(*seq) {
                return (false, vec![]);
            }
            tracing::debug!(seq, activities = catalog.len(), "catalog applied");
            state.catalog = catalog.clone();
            state.listing = Listing::Ready;
            // Rebuilding the select drops the selection.
            state.form.activity.clear();
            (true, vec![])
        }
        ApiResponse::ActivitiesFailed { seq, error } => {
            if !state.accept_refresh(*seq) {
                return (false, vec![]);
            }
            tracing::error!(seq, error = %error, "error fetching activities");
            state.listing = Listing::Failed;
            (true, vec![])
        }
        ApiResponse::SignedUp {
            email,
            origin: SignupOrigin::Form,
            message,
            ..
        } => {
            tracing::debug!(email = %email, "signup succeeded");
            state.show_status(message.clone(), StatusKind::Success);
            state.form.reset();
            (true, vec![refresh(state), schedule_hide(state, MESSAGE_HIDE_DELAY)])
        }
        ApiResponse::SignedUp {
            email,
            origin: SignupOrigin::Undo,
            ..
        } => {
            tracing::debug!(email = %email, "participant restored");
            state.show_status(format!("Restored {email}"), StatusKind::Success);
            (true, vec![refresh(state), schedule_hide(state, RESTORED_HIDE_DELAY)])
        }
        ApiResponse::SignupRejected { origin, detail, .. } => {
            let fallback = match origin {
                SignupOrigin::Form => SIGNUP_FALLBACK,
                SignupOrigin::Undo => UNDO_FALLBACK,
            };
            let text = detail.as_deref().unwrap_or(fallback);
            state.show_status(text, StatusKind::Error);
            (true, vec![schedule_hide(state, MESSAGE_HIDE_DELAY)])
        }
        ApiResponse::SignupFailed {
            activity,
            email,
            origin: SignupOrigin::Form,
            error,
        } => {
            tracing::error!(activity = %activity, email = %email, error = %error, "error signing up");
            state.show_status(SIGNUP_TRANSPORT_FAILURE, StatusKind::Error);
            (true, vec![])
        }
        ApiResponse::SignupFailed {
            activity,
            email,
            origin: SignupOrigin::Undo,
            error,
        } => {
            tracing::error!(activity = %activity, email = %email, error = %error, "error undoing removal");
            state.show_status(UNDO_TRANSPORT_FAILURE, StatusKind::Error);
            (true, vec![schedule_hide(state, MESSAGE_HIDE_DELAY)])
        }
        ApiResponse::ParticipantRemoved {
            activity,
            email,
            message,
        } => {
            let timer = state.next_timer_id();
            let undo = PendingUndo {
                token: format!("undo-{}", chrono::Utc::now().timestamp_millis()),
                activity: activity.clone(),
                email: email.clone(),
                timer,
            };
            tracing::debug!(token = %undo.token, email = %email, "participant removed");
            state.show_undoable(message.clone(), undo);
            (
                true,
                vec![
                    Action::ScheduleHide {
                        timer,
                        after: MESSAGE_HIDE_DELAY,
                    },
                    refresh(state),
                ],
            )
        }
        ApiResponse::RemovalRejected { detail, .. } => {
            state.show_status(detail.as_deref().unwrap_or(REMOVAL_FALLBACK), StatusKind::Error);
            (true, vec![schedule_hide(state, MESSAGE_HIDE_DELAY)])
        }
        ApiResponse::RemovalFailed {
            activity,
            email,
            error,
        } => {
            tracing::error!(activity = %activity, email = %email, error = %error, "error removing participant");
            state.show_status(REMOVAL_TRANSPORT_FAILURE, StatusKind::Error);
            (true, vec![])
        }
    }
}

fn refresh(state: &mut ViewState) -> Action {
    Action::Request(ApiRequest::FetchActivities {
        seq: state.issue_refresh(),
    })
}

fn schedule_hide(state: &mut ViewState, after: Duration) -> Action {
    Action::ScheduleHide {
        timer: state.next_timer_id(),
        after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::chess_club;
    use crate::app::TimerId;
    use crate::domain::ActivityCatalog;
    use crate::ui::theme::Theme;

    fn loaded(participants: &[&str]) -> ViewState {
        let mut state = ViewState::new(Theme::default());
        let (_, actions) = handle_event(&mut state, &Event::Refresh);
        let Action::Request(ApiRequest::FetchActivities { seq }) = actions[0] else {
            panic!("expected a fetch");
        };
        handle_event(
            &mut state,
            &Event::ApiResponse(ApiResponse::ActivitiesLoaded {
                seq,
                catalog: ActivityCatalog::new(vec![chess_club(10, participants)]),
            }),
        );
        state
    }

    fn has_refresh(actions: &[Action]) -> bool {
        actions
            .iter()
            .any(|a| matches!(a, Action::Request(ApiRequest::FetchActivities { .. })))
    }

    fn hide_delays(actions: &[Action]) -> Vec<Duration> {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::ScheduleHide { after, .. } => Some(*after),
                _ => None,
            })
            .collect()
    }

    fn removed(state: &mut ViewState) -> Vec<Action> {
        handle_event(
            state,
            &Event::ApiResponse(ApiResponse::ParticipantRemoved {
                activity: "Chess Club".to_string(),
                email: "a@x.com".to_string(),
                message: "Removed a@x.com from Chess Club".to_string(),
            }),
        )
        .1
    }

    #[test]
    fn invalid_form_issues_no_request() {
        let mut state = loaded(&[]);
        handle_event(&mut state, &Event::SetEmail("not-an-email".to_string()));
        handle_event(&mut state, &Event::SelectActivity("Chess Club".to_string()));

        let (render, actions) = handle_event(&mut state, &Event::SubmitSignup);
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(
            state.form.hint.as_deref(),
            Some("\"not-an-email\" is not a valid email address.")
        );
    }

    #[test]
    fn valid_form_sends_signup() {
        let mut state = loaded(&[]);
        handle_event(&mut state, &Event::SetEmail("b@x.com".to_string()));
        handle_event(&mut state, &Event::SelectActivity("chess".to_string()));

        let (_, actions) = handle_event(&mut state, &Event::SubmitSignup);
        assert_eq!(
            actions,
            vec![Action::Request(ApiRequest::SignUp {
                activity: "Chess Club".to_string(),
                email: "b@x.com".to_string(),
                origin: SignupOrigin::Form,
            })]
        );
    }

    #[test]
    fn unmatched_activity_query_leaves_selection() {
        let mut state = loaded(&[]);
        handle_event(&mut state, &Event::SelectActivity("Chess Club".to_string()));
        handle_event(&mut state, &Event::SelectActivity("zzz".to_string()));

        assert_eq!(state.form.activity, "Chess Club");
        assert_eq!(state.form.hint.as_deref(), Some("No activity matches \"zzz\"."));
    }

    #[test]
    fn set_activity_accepts_only_catalog_keys() {
        let mut state = loaded(&[]);
        handle_event(&mut state, &Event::SetEmail("b@x.com".to_string()));
        handle_event(&mut state, &Event::SetActivity("Chess Club".to_string()));
        assert_eq!(state.form.activity, "Chess Club");

        for name in ["chess", "Underwater Basket Weaving"] {
            handle_event(&mut state, &Event::SetActivity(name.to_string()));
            assert!(state.form.activity.is_empty(), "{name:?} should not be selectable");

            let (_, actions) = handle_event(&mut state, &Event::SubmitSignup);
            assert!(actions.is_empty());
            assert_eq!(state.form.hint.as_deref(), Some("Please select an activity."));
        }
    }

    #[test]
    fn signup_success_resets_form_and_refreshes() {
        let mut state = loaded(&[]);
        handle_event(&mut state, &Event::SetEmail("b@x.com".to_string()));
        handle_event(&mut state, &Event::SelectActivity("Chess Club".to_string()));

        let (_, actions) = handle_event(
            &mut state,
            &Event::ApiResponse(ApiResponse::SignedUp {
                activity: "Chess Club".to_string(),
                email: "b@x.com".to_string(),
                origin: SignupOrigin::Form,
                message: "Signed up b@x.com for Chess Club".to_string(),
            }),
        );

        assert_eq!(state.status.text, "Signed up b@x.com for Chess Club");
        assert_eq!(state.status.kind, StatusKind::Success);
        assert!(state.form.email.is_empty());
        assert!(state.form.activity.is_empty());
        assert!(has_refresh(&actions));
        assert_eq!(hide_delays(&actions), vec![MESSAGE_HIDE_DELAY]);
    }

    #[test]
    fn activity_full_keeps_form() {
        let mut state = loaded(&[]);
        handle_event(&mut state, &Event::SetEmail("b@x.com".to_string()));
        handle_event(&mut state, &Event::SelectActivity("Chess Club".to_string()));

        let (_, actions) = handle_event(
            &mut state,
            &Event::ApiResponse(ApiResponse::SignupRejected {
                activity: "Chess Club".to_string(),
                email: "b@x.com".to_string(),
                origin: SignupOrigin::Form,
                detail: Some("Activity full".to_string()),
            }),
        );

        assert_eq!(state.status.text, "Activity full");
        assert_eq!(state.status.kind, StatusKind::Error);
        assert_eq!(state.form.email, "b@x.com");
        assert_eq!(state.form.activity, "Chess Club");
        assert!(!has_refresh(&actions));
        assert_eq!(hide_delays(&actions), vec![MESSAGE_HIDE_DELAY]);
    }

    #[test]
    fn missing_detail_uses_fallbacks() {
        let mut state = loaded(&[]);
        for (origin, expected) in [
            (SignupOrigin::Form, "An error occurred"),
            (SignupOrigin::Undo, "Failed to undo"),
        ] {
            handle_event(
                &mut state,
                &Event::ApiResponse(ApiResponse::SignupRejected {
                    activity: "Chess Club".to_string(),
                    email: "b@x.com".to_string(),
                    origin,
                    detail: None,
                }),
            );
            assert_eq!(state.status.text, expected);
        }

        handle_event(
            &mut state,
            &Event::ApiResponse(ApiResponse::RemovalRejected {
                activity: "Chess Club".to_string(),
                email: "b@x.com".to_string(),
                detail: None,
            }),
        );
        assert_eq!(state.status.text, "Failed to remove participant");
    }

    #[test]
    fn transport_failures_do_not_auto_hide() {
        let mut state = loaded(&[]);
        let (_, signup) = handle_event(
            &mut state,
            &Event::ApiResponse(ApiResponse::SignupFailed {
                activity: "Chess Club".to_string(),
                email: "b@x.com".to_string(),
                origin: SignupOrigin::Form,
                error: "connection refused".to_string(),
            }),
        );
        assert_eq!(state.status.text, "Failed to sign up. Please try again.");
        assert!(signup.is_empty());

        let (_, removal) = handle_event(
            &mut state,
            &Event::ApiResponse(ApiResponse::RemovalFailed {
                activity: "Chess Club".to_string(),
                email: "a@x.com".to_string(),
                error: "connection refused".to_string(),
            }),
        );
        assert_eq!(state.status.text, "Failed to remove participant. Please try again.");
        assert!(removal.is_empty());

        let (_, undo) = handle_event(
            &mut state,
            &Event::ApiResponse(ApiResponse::SignupFailed {
                activity: "Chess Club".to_string(),
                email: "a@x.com".to_string(),
                origin: SignupOrigin::Undo,
                error: "connection refused".to_string(),
            }),
        );
        assert_eq!(state.status.text, "Failed to undo. Please try again.");
        assert_eq!(hide_delays(&undo), vec![MESSAGE_HIDE_DELAY]);
    }

    #[test]
    fn remove_asks_for_confirmation() {
        let mut state = loaded(&["a@x.com"]);
        let (render, actions) = handle_event(
            &mut state,
            &Event::RemoveParticipant {
                activity: "Chess Club".to_string(),
                email: "a@x.com".to_string(),
            },
        );
        assert!(!render);
        assert_eq!(
            actions,
            vec![Action::ConfirmRemoval {
                activity: "Chess Club".to_string(),
                email: "a@x.com".to_string(),
                prompt: "Remove a@x.com from Chess Club?".to_string(),
            }]
        );
    }

    #[test]
    fn removal_offers_undo_and_refreshes() {
        let mut state = loaded(&["a@x.com"]);
        let actions = removed(&mut state);

        let undo = state.pending_undo().cloned().unwrap();
        assert!(undo.token.starts_with("undo-"));
        assert_eq!(undo.email, "a@x.com");
        assert_eq!(state.status.kind, StatusKind::Info);
        assert!(has_refresh(&actions));
        assert!(actions.contains(&Action::ScheduleHide {
            timer: undo.timer,
            after: MESSAGE_HIDE_DELAY,
        }));
    }

    #[test]
    fn undo_cancels_removal_timer_and_signs_up_again() {
        let mut state = loaded(&["a@x.com"]);
        removed(&mut state);
        let timer = state.pending_undo().unwrap().timer;

        let (_, actions) = handle_event(&mut state, &Event::Undo);
        assert_eq!(
            actions,
            vec![
                Action::CancelHide(timer),
                Action::Request(ApiRequest::SignUp {
                    activity: "Chess Club".to_string(),
                    email: "a@x.com".to_string(),
                    origin: SignupOrigin::Undo,
                }),
            ]
        );

        // A second press before the response re-sends the request.
        let (_, again) = handle_event(&mut state, &Event::Undo);
        assert_eq!(again.len(), 2);

        let (_, restored) = handle_event(
            &mut state,
            &Event::ApiResponse(ApiResponse::SignedUp {
                activity: "Chess Club".to_string(),
                email: "a@x.com".to_string(),
                origin: SignupOrigin::Undo,
                message: "Signed up a@x.com for Chess Club".to_string(),
            }),
        );
        assert_eq!(state.status.text, "Restored a@x.com");
        assert!(state.pending_undo().is_none());
        assert!(has_refresh(&restored));
        assert_eq!(hide_delays(&restored), vec![RESTORED_HIDE_DELAY]);
    }

    #[test]
    fn undo_is_unavailable_after_hide() {
        let mut state = loaded(&["a@x.com"]);
        removed(&mut state);
        let timer = state.pending_undo().unwrap().timer;

        let (render, _) = handle_event(&mut state, &Event::HideTimerFired(timer));
        assert!(render);

        let (_, actions) = handle_event(&mut state, &Event::Undo);
        assert!(actions.is_empty());

        let (render, _) = handle_event(&mut state, &Event::HideTimerFired(TimerId(99)));
        assert!(!render);
    }

    #[test]
    fn stale_catalog_is_ignored() {
        let mut state = loaded(&["a@x.com"]);
        let (_, older) = handle_event(&mut state, &Event::Refresh);
        let (_, newer) = handle_event(&mut state, &Event::Refresh);
        let seq = |actions: &[Action]| match actions[0] {
            Action::Request(ApiRequest::FetchActivities { seq }) => seq,
            _ => panic!("expected a fetch"),
        };

        let (render, _) = handle_event(
            &mut state,
            &Event::ApiResponse(ApiResponse::ActivitiesLoaded {
                seq: seq(&newer),
                catalog: ActivityCatalog::new(vec![chess_club(10, &[])]),
            }),
        );
        assert!(render);

        let (render, _) = handle_event(
            &mut state,
            &Event::ApiResponse(ApiResponse::ActivitiesLoaded {
                seq: seq(&older),
                catalog: ActivityCatalog::new(vec![chess_club(10, &["a@x.com"])]),
            }),
        );
        assert!(!render);
        assert!(state.catalog.get("Chess Club").unwrap().participants.is_empty());
    }

    #[test]
    fn failed_refresh_shows_placeholder() {
        let mut state = loaded(&["a@x.com"]);
        handle_event(&mut state, &Event::SelectActivity("Chess Club".to_string()));
        let (_, actions) = handle_event(&mut state, &Event::Refresh);
        let Action::Request(ApiRequest::FetchActivities { seq }) = actions[0] else {
            panic!("expected a fetch");
        };

        handle_event(
            &mut state,
            &Event::ApiResponse(ApiResponse::ActivitiesFailed {
                seq,
                error: "Request rejected with status 500: no detail".to_string(),
            }),
        );
        assert_eq!(state.listing, Listing::Failed);
        assert_eq!(state.catalog.len(), 1);
        assert_eq!(state.form.activity, "Chess Club");
    }
}
