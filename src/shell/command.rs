//! Command parsing for the interactive shell.
//!
//! Each line typed at the prompt is one command. Commands stand in for the
//! gestures of a form-based page: typing into the email field, picking an
//! option of the activity select, pressing submit, pressing a participant's
//! remove button, or pressing undo.

use crate::app::{Event, ViewState};
use thiserror::Error;

/// Help text listing every command.
pub const HELP: &str = "commands: email <addr> | activity <name> | submit | remove <card> <row> | undo | refresh | quit";

/// One parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replaces the email field; no argument clears it.
    Email(String),
    /// Selects the activity matching a name or fuzzy query.
    Activity(String),
    Submit,
    /// Presses the remove button of a participant row (both 1-based).
    Remove { card: usize, row: usize },
    Undo,
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command {0:?}; {help}", help = HELP)]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("{0:?} is not a card or row number")]
    InvalidNumber(String),

    #[error("card {card} has no participant row {row} with a remove button")]
    NoSuchParticipant { card: usize, row: usize },
}

impl Command {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] describing why the line is not a command.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(name, rest)| (name, rest.trim()));

        match name.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "email" | "e" => Ok(Self::Email(rest.to_string())),
            "activity" | "a" => {
                if rest.is_empty() {
                    Err(CommandError::Usage("activity <name>"))
                } else {
                    Ok(Self::Activity(rest.to_string()))
                }
            }
            "submit" | "s" => Ok(Self::Submit),
            "remove" | "rm" => {
                let mut args = rest.split_whitespace();
                match (args.next(), args.next(), args.next()) {
                    (Some(card), Some(row), None) => Ok(Self::Remove {
                        card: position(card)?,
                        row: position(row)?,
                    }),
                    _ => Err(CommandError::Usage("remove <card> <row>")),
                }
            }
            "undo" | "u" => Ok(Self::Undo),
            "refresh" | "r" => Ok(Self::Refresh),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }

    /// Translates the command into the event it triggers.
    ///
    /// Returns `Ok(None)` for commands handled by the shell itself (`help`,
    /// `quit`).
    ///
    /// # Errors
    ///
    /// `remove` fails when the addressed row has no remove button on screen:
    /// the card does not exist, the row is past the fifth, or the list is not
    /// showing.
    pub fn to_event(&self, state: &ViewState) -> Result<Option<Event>, CommandError> {
        let event = match self {
            Self::Email(email) => Event::SetEmail(email.clone()),
            Self::Activity(query) => Event::SelectActivity(query.clone()),
            Self::Submit => Event::SubmitSignup,
            Self::Remove { card, row } => {
                let (activity, email) = card
                    .checked_sub(1)
                    .zip(row.checked_sub(1))
                    .and_then(|(c, r)| state.visible_participant(c, r))
                    .ok_or(CommandError::NoSuchParticipant {
                        card: *card,
                        row: *row,
                    })?;
                Event::RemoveParticipant {
                    activity: activity.to_string(),
                    email: email.to_string(),
                }
            }
            Self::Undo => Event::Undo,
            Self::Refresh => Event::Refresh,
            Self::Help | Self::Quit => return Ok(None),
        };
        Ok(Some(event))
    }
}

/// Parses a 1-based position.
fn position(arg: &str) -> Result<usize, CommandError> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidNumber(arg.to_string())),
    }
}
