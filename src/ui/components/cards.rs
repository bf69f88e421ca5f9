//! Activities container renderer.
//!
//! Renders either the loading line, the load-failure placeholder, or one
//! card per activity:
//!
//! ```text
//!  [1] Chess Club
//!      Learn strategies and compete in chess tournaments
//!      Schedule: Fridays, 3:30 PM - 5:00 PM
//!      Availability: 9 spots left
//!      Participants
//!        1. michael@mergington.edu  ✖
//!        +2 more
//! ```
//!
//! Row numbers double as the addresses of the `remove <card> <row>` command.

use crate::ui::helpers::{fit, paint, push_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ActivitiesPanel, ActivityCard, ParticipantsBody};

const INDENT: usize = 5;

pub fn render_activities(out: &mut String, panel: &ActivitiesPanel, theme: &Theme, cols: usize) {
    match panel {
        ActivitiesPanel::Loading { text } => {
            push_line(out, &paint(&fit(text, cols), &theme.colors.text_dim));
        }
        ActivitiesPanel::Failed { text } => {
            push_line(out, &paint(&fit(text, cols), &theme.colors.error_fg));
        }
        ActivitiesPanel::Cards(cards) => {
            for (idx, card) in cards.iter().enumerate() {
                if idx > 0 {
                    out.push('\n');
                }
                render_card(out, card, theme, cols);
            }
        }
    }
}

fn render_card(out: &mut String, card: &ActivityCard, theme: &Theme, cols: usize) {
    let width = cols.saturating_sub(INDENT);
    let indent = " ".repeat(INDENT);
    let colors = &theme.colors;

    let number = format!(" [{}] ", card.number);
    let title = fit(&card.title, cols.saturating_sub(number.len()));
    push_line(
        out,
        &format!(
            "{}{}{}{title}{}",
            paint(&number, &colors.text_dim),
            Theme::bold(),
            Theme::fg(&colors.card_title_fg),
            Theme::reset()
        ),
    );

    if !card.description.is_empty() {
        push_line(out, &format!("{indent}{}", paint(&fit(&card.description, width), &colors.text_normal)));
    }
    push_line(out, &format!("{indent}{}", paint(&fit(&card.schedule, width), &colors.text_normal)));

    let availability = if card.spots_left > 0 { &colors.spots_fg } else { &colors.no_spots_fg };
    push_line(out, &format!("{indent}{}", paint(&fit(&card.availability, width), availability)));

    push_line(
        out,
        &format!("{indent}{}{}{}", Theme::bold(), fit(&card.participants.heading, width), Theme::reset()),
    );

    let row_indent = " ".repeat(INDENT + 2);
    let row_width = width.saturating_sub(2);
    match &card.participants.body {
        ParticipantsBody::Empty(text) => {
            push_line(out, &format!("{row_indent}{}", paint(&fit(text, row_width), &colors.text_dim)));
        }
        ParticipantsBody::List { rows, overflow } => {
            for row in rows {
                let label = format!("{}. ", row.number);
                let email = fit(&row.email, row_width.saturating_sub(label.len() + 3));
                push_line(
                    out,
                    &format!(
                        "{row_indent}{}{}  {}",
                        paint(&label, &colors.text_dim),
                        paint(&email, &colors.text_normal),
                        paint(&row.remove_glyph, &colors.remove_fg),
                    ),
                );
            }
            if let Some(more) = overflow {
                push_line(out, &format!("{row_indent}{}", paint(&fit(more, row_width), &colors.text_dim)));
            }
        }
    }
}
