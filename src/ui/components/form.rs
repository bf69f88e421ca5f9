//! Signup form renderer: email field, activity select, validation hint.

use crate::ui::helpers::{fit, paint, push_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormInfo, SelectInfo};

pub fn render_form(out: &mut String, form: &FormInfo, select: &SelectInfo, theme: &Theme, cols: usize) {
    let colors = &theme.colors;
    let width = cols.saturating_sub(11);

    let email = if form.email.is_empty() {
        paint("(empty)", &colors.text_dim)
    } else {
        paint(&fit(&form.email, width), &colors.text_normal)
    };
    push_line(out, &format!(" {}Email:{}    {email}", Theme::bold(), Theme::reset()));
    push_line(out, &format!(" {}Activity:{}", Theme::bold(), Theme::reset()));

    for (idx, option) in select.options.iter().enumerate() {
        let label = fit(&option.label, width.saturating_sub(4));
        if idx == select.selected {
            push_line(
                out,
                &format!(
                    "   {}{} (•) {label} {}",
                    Theme::fg(&colors.selection_fg),
                    Theme::bg(&colors.selection_bg),
                    Theme::reset()
                ),
            );
        } else {
            push_line(out, &format!("    ( ) {}", paint(&label, &colors.text_normal)));
        }
    }

    if let Some(hint) = &form.hint {
        push_line(out, &format!(" {}", paint(&fit(hint, cols.saturating_sub(1)), &colors.hint_fg)));
    }
}
