//! Terminal input and the terminal confirmation prompt.
//!
//! Stdin is read by one background task and shared as a line channel. The
//! main loop and [`TerminalConfirm`] both take lines from it; while a prompt
//! is open the main loop is suspended inside the synchronizer, so the prompt
//! gets the next line.

use crate::sync::Confirm;
use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, Mutex};

/// Stdin lines, shared between the shell loop and the confirmation prompt.
pub type SharedLines = Arc<Mutex<mpsc::Receiver<String>>>;

/// Spawns the task that forwards stdin lines. The channel closes on EOF.
#[must_use]
pub fn spawn_stdin_reader() -> SharedLines {
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if tx.send(line).await.is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = %e, "failed to read stdin");
                    break;
                }
            }
        }
        tracing::debug!("stdin closed");
    });

    Arc::new(Mutex::new(rx))
}

/// Whether an answer accepts the prompt: `y` or `yes`, any case.
#[must_use]
pub fn accepts(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Yes/no prompt on the terminal.
pub struct TerminalConfirm {
    lines: SharedLines,
    out: Box<dyn Write + Send>,
}

impl TerminalConfirm {
    #[must_use]
    pub fn new(lines: SharedLines) -> Self {
        Self::with_output(lines, Box::new(std::io::stdout()))
    }

    #[must_use]
    pub fn with_output(lines: SharedLines, out: Box<dyn Write + Send>) -> Self {
        Self { lines, out }
    }
}

#[async_trait]
impl Confirm for TerminalConfirm {
    async fn confirm(&mut self, prompt: &str) -> bool {
        if write!(self.out, "{prompt} [y/N] ").and_then(|()| self.out.flush()).is_err() {
            return false;
        }

        let answer = self.lines.lock().await.recv().await;
        let accepted = answer.as_deref().is_some_and(accepts);
        tracing::debug!(prompt = %prompt, accepted, "confirmation answered");
        accepted
    }
}
