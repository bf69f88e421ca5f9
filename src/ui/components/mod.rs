//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific region of the screen.
//!
//! # Components
//!
//! - `header`: Title bar with branding
//! - `cards`: Activities container (cards, loading line, failure placeholder)
//! - `form`: Signup form with email field and activity select
//! - `message`: Status message and undo button
//! - `footer`: Command hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Section title: Available Activities]
//! [Activity cards]
//! [Border]
//! [Section title: Sign Up for an Activity]
//! [Form]
//! [Message]
//! [Border]
//! [Footer]
//! ```

mod cards;
mod footer;
mod form;
mod header;
mod message;

use crate::ui::helpers::push_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use cards::render_activities;
use footer::render_footer;
use form::render_form;
use header::render_header;
use message::render_message;

/// Renders a horizontal border line spanning the terminal width.
fn render_border(out: &mut String, color: &str, cols: usize) {
    push_line(out, &format!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset()));
}

fn render_section_title(out: &mut String, title: &str, theme: &Theme) {
    push_line(
        out,
        &format!(" {}{}{title}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset()),
    );
}

/// Renders every region of the screen in document order.
pub fn render_screen(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize) {
    render_header(out, &vm.header, theme, cols);
    render_border(out, &theme.colors.border, cols);

    render_section_title(out, "Available Activities", theme);
    render_activities(out, &vm.activities, theme, cols);
    render_border(out, &theme.colors.border, cols);

    render_section_title(out, "Sign Up for an Activity", theme);
    render_form(out, &vm.form, &vm.select, theme, cols);
    render_message(out, vm.message.as_ref(), theme, cols);
    render_border(out, &theme.colors.border, cols);

    render_footer(out, &vm.footer, theme, cols);
}
