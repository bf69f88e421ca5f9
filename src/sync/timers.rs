//! Auto-hide timers for the status message.
//!
//! Each timer is a tokio task that sleeps and then posts
//! [`Event::HideTimerFired`] back into the synchronizer's channel. Only the
//! undo path ever cancels a timer; every other timer runs to completion, even
//! if a newer message has replaced the one it was scheduled for.

use crate::app::{Event, TimerId};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;

/// Registry of pending hide timers.
#[derive(Debug, Default)]
pub struct HideTimers {
    pending: HashMap<TimerId, AbortHandle>,
}

impl HideTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a timer that fires `HideTimerFired(timer)` after `after`.
    pub fn schedule(&mut self, timer: TimerId, after: Duration, events: UnboundedSender<Event>) {
        tracing::debug!(timer = timer.0, after = ?after, "scheduling hide");

        let task = tokio::spawn(async move {
            tokio::time::sleep(after).await;
            // The receiver is gone only during shutdown.
            let _ = events.send(Event::HideTimerFired(timer));
        });

        self.pending.insert(timer, task.abort_handle());
    }

    /// Cancels a pending timer, returning whether it was still pending.
    ///
    /// Canceling a timer that already fired or was never scheduled is a no-op.
    pub fn cancel(&mut self, timer: TimerId) -> bool {
        match self.pending.remove(&timer) {
            Some(handle) => {
                handle.abort();
                tracing::debug!(timer = timer.0, "hide canceled");
                true
            }
            None => false,
        }
    }

    /// Marks a timer as fired. Returns `false` if it had been canceled in the
    /// meantime, in which case its event must be dropped.
    pub fn forget(&mut self, timer: TimerId) -> bool {
        self.pending.remove(&timer).is_some()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl Drop for HideTimers {
    fn drop(&mut self) {
        for handle in self.pending.values() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn timer_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = HideTimers::new();
        let start = Instant::now();

        timers.schedule(TimerId(1), Duration::from_millis(5000), tx);
        assert_eq!(rx.recv().await, Some(Event::HideTimerFired(TimerId(1))));
        assert!(start.elapsed() >= Duration::from_millis(5000));
        assert!(timers.forget(TimerId(1)));
        assert_eq!(timers.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn canceled_timer_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = HideTimers::new();

        timers.schedule(TimerId(1), Duration::from_millis(5000), tx.clone());
        timers.schedule(TimerId(2), Duration::from_millis(6000), tx);
        assert!(timers.cancel(TimerId(1)));
        assert!(!timers.cancel(TimerId(1)));

        assert_eq!(rx.recv().await, Some(Event::HideTimerFired(TimerId(2))));
    }
}
