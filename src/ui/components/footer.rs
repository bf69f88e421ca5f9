//! Footer component renderer.
//!
//! This module renders the footer help bar with centered command hints.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar.
///
/// Displays command hints centered horizontally with dimmed styling.
///
/// # Truncation
///
/// If the help text exceeds terminal width, it is truncated to fit. This
/// prevents layout corruption on narrow terminals.
pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    push_centered(out, &footer.keybindings, &Theme::fg(&theme.colors.text_dim), cols);
}
