//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `ViewState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! The frame is returned as a string instead of being printed, so the caller
//! decides when to clear the terminal and tests can inspect the output.
//!
//! # Example
//!
//! ```rust
//! use activity_board::app::ViewState;
//! use activity_board::ui::render;
//! use activity_board::Theme;
//!
//! let state = ViewState::new(Theme::default());
//! let frame = render(&state, 80);
//! assert!(frame.contains("Loading activities..."));
//! ```

use crate::app::ViewState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the whole screen for the current state.
///
/// # Parameters
///
/// * `state` - Current view state
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The ANSI-styled frame, one `\n`-terminated line per screen row. Does not
/// include screen clearing or cursor movement.
#[must_use]
pub fn render(state: &ViewState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme, cols)
}

/// Renders a pre-computed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let _span = tracing::trace_span!("render", cols).entered();
    let mut out = String::new();
    components::render_screen(&mut out, vm, theme, cols);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::chess_club;
    use crate::app::{Listing, StatusKind};
    use crate::domain::ActivityCatalog;

    /// Drops ANSI escape sequences so assertions can look at plain text.
    fn plain(frame: &str) -> String {
        let mut out = String::new();
        let mut chars = frame.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn with_catalog(participants: &[&str]) -> ViewState {
        let mut state = ViewState::new(Theme::default());
        state.catalog = ActivityCatalog::new(vec![chess_club(10, participants)]);
        state.listing = Listing::Ready;
        state
    }

    #[test]
    fn renders_loading_before_first_response() {
        let frame = plain(&render(&ViewState::new(Theme::default()), 80));
        assert!(frame.contains("Loading activities..."));
        assert!(frame.contains("-- Select an activity --"));
    }

    #[test]
    fn renders_card_contents() {
        let frame = plain(&render(&with_catalog(&["a@x.com"]), 80));

        assert!(frame.contains("[1] Chess Club"));
        assert!(frame.contains("Schedule: Mon"));
        assert!(frame.contains("Availability: 9 spots left"));
        assert!(frame.contains("Participants"));
        assert!(frame.contains("1. a@x.com  ✖"));
    }

    #[test]
    fn renders_overflow_and_empty_roster() {
        let many: Vec<String> = (0..7).map(|i| format!("s{i}@x.com")).collect();
        let refs: Vec<&str> = many.iter().map(String::as_str).collect();
        let frame = plain(&render(&with_catalog(&refs), 80));
        assert!(frame.contains("5. s4@x.com"));
        assert!(!frame.contains("s5@x.com"));
        assert!(frame.contains("+2 more"));

        let frame = plain(&render(&with_catalog(&[]), 80));
        assert!(frame.contains("No participants yet"));
    }

    #[test]
    fn renders_failure_placeholder() {
        let mut state = with_catalog(&["a@x.com"]);
        state.listing = Listing::Failed;

        let frame = plain(&render(&state, 80));
        assert!(frame.contains("Failed to load activities. Please try again later."));
        assert!(!frame.contains("a@x.com"));
    }

    #[test]
    fn renders_message_only_while_visible() {
        let mut state = with_catalog(&[]);
        state.show_status("Activity full", StatusKind::Error);
        assert!(plain(&render(&state, 80)).contains("Activity full"));

        state.hide_status();
        assert!(!plain(&render(&state, 80)).contains("Activity full"));
    }

    #[test]
    fn lines_fit_narrow_terminals() {
        let mut state = with_catalog(&["a-very-long-address@some-school.example.edu"]);
        state.form.hint = Some("Please select an activity.".to_string());

        for line in plain(&render(&state, 24)).lines() {
            assert!(line.chars().count() <= 24, "line too wide: {line:?}");
        }
    }
}
