//! Runtime that keeps the view in step with the activities server.
//!
//! # Modules
//!
//! - `confirm`: [`Confirm`] capability gating removals
//! - `synchronizer`: [`ViewSynchronizer`], owner of the view state
//! - `timers`: [`HideTimers`] for the status message

pub mod confirm;
pub mod synchronizer;
pub mod timers;

pub use confirm::Confirm;
pub use synchronizer::ViewSynchronizer;
pub use timers::HideTimers;
