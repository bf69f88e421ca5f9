//! Message area renderer.
//!
//! Nothing is drawn while the message is hidden. A removal message carries
//! its undo button on the same line.

use crate::ui::helpers::{fit, paint, push_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::MessageInfo;

pub fn render_message(out: &mut String, message: Option<&MessageInfo>, theme: &Theme, cols: usize) {
    let Some(message) = message else {
        return;
    };

    let button = message
        .undo_label
        .as_ref()
        .map(|label| format!("  {}[{label}]{}", Theme::bold(), Theme::reset()))
        .unwrap_or_default();
    let reserved = message.undo_label.as_ref().map_or(0, |l| l.chars().count() + 4);
    let text = fit(&message.text, cols.saturating_sub(1 + reserved));

    push_line(
        out,
        &format!(" {}{button}", paint(&text, theme.colors.status(message.kind))),
    );
}
