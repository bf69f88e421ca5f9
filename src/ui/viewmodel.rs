//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from [`ViewState`],
//! following the MVVM pattern. They contain display-ready strings and no
//! business logic: the activity cards and the select options are computed in
//! one pass from the same catalog snapshot, so they can never disagree.
//!
//! # Example
//!
//! ```rust
//! use activity_board::app::ViewState;
//! use activity_board::ui::viewmodel::ActivitiesPanel;
//! use activity_board::Theme;
//!
//! let state = ViewState::new(Theme::default());
//! let vm = state.compute_viewmodel();
//! assert!(matches!(vm.activities, ActivitiesPanel::Loading { .. }));
//! assert_eq!(vm.select.options.len(), 1); // placeholder only
//! ```
//!
//! [`ViewState`]: crate::app::ViewState

use crate::app::StatusKind;

/// Complete UI view model for rendering one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Content of the activities container.
    pub activities: ActivitiesPanel,

    /// Options of the activity select in the signup form.
    pub select: SelectInfo,

    /// Signup form fields.
    pub form: FormInfo,

    /// Message area; `None` while the message is hidden.
    pub message: Option<MessageInfo>,

    pub footer: FooterInfo,
}

/// What the activities container shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivitiesPanel {
    /// Before the first catalog response.
    Loading { text: String },

    /// The last catalog request failed; a single placeholder line.
    Failed { text: String },

    /// One card per activity, in catalog order.
    Cards(Vec<ActivityCard>),
}

/// One activity card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    /// 1-based position, used to address the card from the shell.
    pub number: usize,
    pub title: String,
    pub description: String,
    /// `"Schedule: <schedule>"`.
    pub schedule: String,
    /// `"Availability: <n> spots left"`.
    pub availability: String,
    /// Raw spots-left value, negative when over-enrolled.
    pub spots_left: i64,
    pub participants: ParticipantsSection,
}

/// Participants block of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantsSection {
    pub heading: String,
    pub body: ParticipantsBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantsBody {
    /// `"No participants yet"`.
    Empty(String),

    /// Up to five rows, plus `"+N more"` when the roster is longer.
    List {
        rows: Vec<ParticipantRow>,
        overflow: Option<String>,
    },
}

/// A visible participant with its remove control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    /// 1-based row number within the card.
    pub number: usize,
    pub email: String,
    /// Glyph of the remove button.
    pub remove_glyph: String,
    /// Accessible label of the remove button, `"Remove <email>"`.
    pub remove_label: String,
}

/// Activity select: placeholder first, then one option per activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectInfo {
    pub options: Vec<SelectOption>,
    /// Index into `options` of the current selection.
    pub selected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value; empty for the placeholder.
    pub value: String,
    pub label: String,
}

/// Signup form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInfo {
    pub email: String,
    /// Inline validation hint from the last rejected submission attempt.
    pub hint: Option<String>,
}

/// Visible status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageInfo {
    pub text: String,
    pub kind: StatusKind,
    /// Label of the undo button, when the message offers one.
    pub undo_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
///
/// Contains the command hints shown at the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}
