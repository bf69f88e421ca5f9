//! Shared rendering utilities and helpers.
//!
//! Components build the frame into a `String` line by line. These helpers
//! handle the pieces every component needs: fitting text to the terminal
//! width and wrapping a styled run in its escape sequences.
//!
//! Widths are counted in characters, not bytes, so emails and activity names
//! with non-ASCII letters keep their layout.

use crate::ui::theme::Theme;

/// Truncates `text` to at most `width` characters, ending in `…` when cut.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Wraps `text` in a foreground color and a trailing reset.
#[must_use]
pub fn paint(text: &str, hex: &str) -> String {
    format!("{}{text}{}", Theme::fg(hex), Theme::reset())
}

/// Appends one line of output.
pub fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

/// Appends a line of `text` centered within `cols`, padded to full width.
///
/// `style` is emitted before the padding so background colors span the line.
pub fn push_centered(out: &mut String, text: &str, style: &str, cols: usize) {
    let text = fit(text, cols);
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;

    out.push_str(style);
    out.push_str(&" ".repeat(padding));
    out.push_str(&text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + len)));
    out.push_str(Theme::reset());
    out.push('\n');
}
