//! Terminal entry point.
//!
//! This module provides the thin integration layer between the library and
//! the terminal: it parses flags, loads configuration, starts the
//! synchronizer, and maps typed lines to library events.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  lines   ┌────────────────────┐  requests  ┌──────────┐
//! │ stdin reader │ ───────► │   main loop        │ ─────────► │ API task │
//! └──────────────┘          │   (select!)        │ ◄───────── └──────────┘
//!                           │  ViewSynchronizer  │  responses
//!                           │                    │ ◄───────── hide timers
//!                           └────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Load**: Parse flags, load config, initialize tracing, create `ViewState`
//! 2. **Startup refresh**: Fetch the catalog once; there is no polling
//! 3. **Loop**: Handle typed commands and finished requests/timers, redraw
//!    whenever the view changed
//! 4. **Exit**: `quit` or end of input
//!
//! # Commands
//!
//! - `email <addr>`: Fill in the email field
//! - `activity <name>`: Pick an activity (exact name or fuzzy query)
//! - `submit`: Submit the signup form
//! - `remove <card> <row>`: Remove a participant (asks for confirmation)
//! - `undo`: Restore the participant just removed
//! - `refresh`: Re-fetch the catalog
//! - `quit`: Exit

use activity_board::api::HttpActivityApi;
use activity_board::observability::init_tracing;
use activity_board::shell::{spawn_stdin_reader, Command, CommandError, SharedLines, TerminalConfirm, HELP};
use activity_board::{initialize, Config, Result, ViewSynchronizer};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Terminal client for the school activities API.
#[derive(Debug, Parser)]
#[command(name = "activity-board", version, about)]
struct Cli {
    /// Base URL of the activities API.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Configuration file (default: ~/.config/activity-board/config.toml).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Built-in theme: catppuccin-mocha or catppuccin-latte.
    #[arg(long)]
    theme: Option<String>,

    /// Custom TOML theme file.
    #[arg(long, value_name = "FILE")]
    theme_file: Option<String>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log file path.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Overrides file values with the flags that were given.
    fn apply(self, mut config: Config) -> Config {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if self.theme.is_some() {
            config.theme = self.theme;
        }
        if self.theme_file.is_some() {
            config.theme_file = self.theme_file;
        }
        if self.log_level.is_some() {
            config.log_level = self.log_level;
        }
        if self.log_file.is_some() {
            config.log_file = self.log_file;
        }
        config
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("activity-board: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let config = cli.apply(config);

    init_tracing(&config);
    tracing::info!(base_url = %config.base_url, "starting activity board");

    let api = Arc::new(HttpActivityApi::new(&config)?);
    let lines = spawn_stdin_reader();
    let confirm = TerminalConfirm::new(Arc::clone(&lines));
    let mut sync = ViewSynchronizer::new(initialize(&config), api, Box::new(confirm));

    let mut notice: Option<String> = Some(HELP.to_string());
    sync.refresh().await;
    draw(&sync, notice.as_deref())?;

    loop {
        tokio::select! {
            line = next_line(&lines) => {
                let Some(line) = line else {
                    tracing::debug!("input closed, exiting");
                    break;
                };

                notice = None;
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => notice = Some(HELP.to_string()),
                    Ok(command) => match command.to_event(sync.state()) {
                        Ok(Some(event)) => {
                            sync.dispatch(event).await;
                        }
                        Ok(None) => {}
                        Err(e) => notice = Some(e.to_string()),
                    },
                    Err(CommandError::Empty) => {}
                    Err(e) => notice = Some(e.to_string()),
                }
                draw(&sync, notice.as_deref())?;
            }
            Some(event) = sync.next_event() => {
                if sync.dispatch(event).await {
                    draw(&sync, notice.as_deref())?;
                }
            }
        }
    }

    tracing::info!("activity board stopped");
    Ok(())
}

async fn next_line(lines: &SharedLines) -> Option<String> {
    lines.lock().await.recv().await
}

/// Terminal width from `COLUMNS`, defaulting to 80.
fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse().ok())
        .filter(|&c: &usize| c >= 20)
        .unwrap_or(80)
}

/// Clears the screen and prints the current frame plus the prompt.
fn draw(sync: &ViewSynchronizer, notice: Option<&str>) -> Result<()> {
    let frame = activity_board::ui::render(sync.state(), terminal_width());

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "\u{1b}[2J\u{1b}[H{frame}")?;
    if let Some(notice) = notice {
        writeln!(stdout, "{notice}")?;
    }
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}
