//! Confirmation capability used before destructive requests.

use async_trait::async_trait;

/// Asks the user a yes/no question and waits for the answer.
///
/// Removing a participant is gated on this prompt. The synchronizer holds the
/// capability as a trait object so the terminal implementation can be swapped
/// for a scripted one in tests.
#[async_trait]
pub trait Confirm: Send {
    /// Shows `prompt` and returns `true` if the user accepted.
    async fn confirm(&mut self, prompt: &str) -> bool;
}
