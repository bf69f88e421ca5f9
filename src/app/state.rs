//! Application state management and view model computation.
//!
//! This module defines [`ViewState`], the single owner of everything the
//! screen shows: the last catalog snapshot, the load status of the activities
//! container, the signup form, and the one status-message slot. The
//! synchronizer mutates it only through the event handler.
//!
//! # State Components
//!
//! - **Catalog**: last successfully fetched [`ActivityCatalog`]
//! - **Listing**: whether the activities container shows cards, a loading
//!   line, or the load-failure placeholder
//! - **Form**: email field and activity select
//! - **Status**: the message area, possibly carrying an undo affordance
//! - **Refresh sequence**: guards against stale catalog responses
//!
//! # View Model Computation
//!
//! [`ViewState::compute_viewmodel`] derives cards and select options from the
//! same catalog in one pass.

use super::form::SignupForm;
use crate::domain::{Activity, ActivityCatalog};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ActivitiesPanel, ActivityCard, FooterInfo, FormInfo, HeaderInfo, MessageInfo,
    ParticipantRow, ParticipantsBody, ParticipantsSection, SelectInfo, SelectOption, UIViewModel,
};

/// Maximum participant rows rendered per card.
pub const MAX_VISIBLE_PARTICIPANTS: usize = 5;

/// Shown in the activities container until the first response.
pub const LOADING_TEXT: &str = "Loading activities...";

/// Shown in place of the cards when a catalog fetch fails.
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// Label of the select's first, empty option.
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Identifier of a scheduled auto-hide timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Styling class of the status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    Success,
    Error,
    #[default]
    Info,
}

impl StatusKind {
    /// CSS-style class name of the message area.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// Undo affordance attached to a removal message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUndo {
    /// `undo-<unix millis>`, unique per removal message.
    pub token: String,
    pub activity: String,
    pub email: String,
    /// Auto-hide timer of the removal message, canceled when undo is pressed.
    pub timer: TimerId,
}

/// The single message-area slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub visible: bool,
    pub undo: Option<PendingUndo>,
}

/// What the activities container currently displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Loading,
    Ready,
    Failed,
}

/// Central view state container.
///
/// Mutated only by [`handle_event`](crate::app::handle_event). Rendering reads
/// it through [`compute_viewmodel`](Self::compute_viewmodel).
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Last catalog that was successfully fetched and applied.
    ///
    /// Kept when a later fetch fails, so the select keeps its options while
    /// the container shows the failure placeholder.
    pub catalog: ActivityCatalog,

    pub listing: Listing,

    pub form: SignupForm,

    pub status: StatusMessage,

    pub theme: Theme,

    refresh_issued: u64,
    refresh_applied: u64,
    next_timer: u64,
}

impl ViewState {
    /// Creates the initial state: loading, empty form, hidden message.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            catalog: ActivityCatalog::default(),
            listing: Listing::Loading,
            form: SignupForm::default(),
            status: StatusMessage::default(),
            theme,
            refresh_issued: 0,
            refresh_applied: 0,
            next_timer: 0,
        }
    }

    /// Allocates the sequence number of a new catalog fetch.
    pub fn issue_refresh(&mut self) -> u64 {
        self.refresh_issued += 1;
        self.refresh_issued
    }

    /// Records a catalog response, returning whether it may be applied.
    ///
    /// Responses older than the newest applied one are rejected, so the
    /// screen always reflects the most recently issued fetch that answered.
    pub fn accept_refresh(&mut self, seq: u64) -> bool {
        if seq <= self.refresh_applied {
            tracing::debug!(seq, applied = self.refresh_applied, "dropping stale catalog response");
            return false;
        }
        self.refresh_applied = seq;
        true
    }

    /// Allocates an identifier for a new hide timer.
    pub fn next_timer_id(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId(self.next_timer)
    }

    /// Replaces the status message and makes it visible.
    pub fn show_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = StatusMessage {
            text: text.into(),
            kind,
            visible: true,
            undo: None,
        };
    }

    /// Replaces the status message with an info message offering undo.
    pub fn show_undoable(&mut self, text: impl Into<String>, undo: PendingUndo) {
        self.status = StatusMessage {
            text: text.into(),
            kind: StatusKind::Info,
            visible: true,
            undo: Some(undo),
        };
    }

    pub fn hide_status(&mut self) {
        self.status.visible = false;
    }

    /// The undo affordance, if the visible message carries one.
    #[must_use]
    pub fn pending_undo(&self) -> Option<&PendingUndo> {
        if self.status.visible {
            self.status.undo.as_ref()
        } else {
            None
        }
    }

    /// Resolves a remove control by card and row position (both 0-based).
    ///
    /// Only rows that are actually rendered have a remove control, so rows
    /// past the fifth and cards hidden behind the failure placeholder yield
    /// `None`.
    #[must_use]
    pub fn visible_participant(&self, card: usize, row: usize) -> Option<(&str, &str)> {
        if self.listing != Listing::Ready || row >= MAX_VISIBLE_PARTICIPANTS {
            return None;
        }
        let activity = self.catalog.nth(card)?;
        let email = activity.participants.get(row)?;
        Some((activity.name.as_str(), email.as_str()))
    }

    /// Computes the renderable view model.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let activities = match self.listing {
            Listing::Loading => ActivitiesPanel::Loading {
                text: LOADING_TEXT.to_string(),
            },
            Listing::Failed => ActivitiesPanel::Failed {
                text: LOAD_FAILED_TEXT.to_string(),
            },
            Listing::Ready => ActivitiesPanel::Cards(
                self.catalog
                    .iter()
                    .enumerate()
                    .map(|(idx, activity)| Self::compute_card(idx + 1, activity))
                    .collect(),
            ),
        };

        UIViewModel {
            header: HeaderInfo {
                title: " Activity Board ".to_string(),
            },
            activities,
            select: self.compute_select(),
            form: FormInfo {
                email: self.form.email.clone(),
                hint: self.form.hint.clone(),
            },
            message: self.compute_message(),
            footer: self.compute_footer(),
        }
    }

    fn compute_card(number: usize, activity: &Activity) -> ActivityCard {
        let spots_left = activity.spots_left();

        let body = if activity.participants.is_empty() {
            ParticipantsBody::Empty("No participants yet".to_string())
        } else {
            let rows = activity
                .participants
                .iter()
                .take(MAX_VISIBLE_PARTICIPANTS)
                .enumerate()
                .map(|(idx, email)| ParticipantRow {
                    number: idx + 1,
                    email: email.clone(),
                    remove_glyph: "✖".to_string(),
                    remove_label: format!("Remove {email}"),
                })
                .collect();

            let hidden = activity.participants.len().saturating_sub(MAX_VISIBLE_PARTICIPANTS);
            let overflow = (hidden > 0).then(|| format!("+{hidden} more"));

            ParticipantsBody::List { rows, overflow }
        };

        ActivityCard {
            number,
            title: activity.name.clone(),
            description: activity.description.clone(),
            schedule: format!("Schedule: {}", activity.schedule),
            availability: format!("Availability: {spots_left} spots left"),
            spots_left,
            participants: ParticipantsSection {
                heading: "Participants".to_string(),
                body,
            },
        }
    }

    fn compute_select(&self) -> SelectInfo {
        let mut options = Vec::with_capacity(self.catalog.len() + 1);
        options.push(SelectOption {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        });
        options.extend(self.catalog.names().map(|name| SelectOption {
            value: name.to_string(),
            label: name.to_string(),
        }));

        let selected = options
            .iter()
            .position(|o| !self.form.activity.is_empty() && o.value == self.form.activity)
            .unwrap_or(0);

        SelectInfo { options, selected }
    }

    fn compute_message(&self) -> Option<MessageInfo> {
        if !self.status.visible {
            return None;
        }
        Some(MessageInfo {
            text: self.status.text.clone(),
            kind: self.status.kind,
            undo_label: self.status.undo.as_ref().map(|_| "Undo".to_string()),
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.pending_undo().is_some() {
            "undo: restore  email <addr>  activity <name>  submit  remove <card> <row>  refresh  quit"
        } else {
            "email <addr>  activity <name>  submit  remove <card> <row>  refresh  quit"
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
