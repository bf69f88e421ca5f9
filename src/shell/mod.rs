//! Interactive terminal shell.
//!
//! # Modules
//!
//! - `command`: Line-oriented [`Command`] parsing and translation to events
//! - `confirm`: Stdin line reader and [`TerminalConfirm`]

pub mod command;
pub mod confirm;

pub use command::{Command, CommandError, HELP};
pub use confirm::{accepts, spawn_stdin_reader, SharedLines, TerminalConfirm};
