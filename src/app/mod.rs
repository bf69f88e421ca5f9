//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! runtime (the [`sync`](crate::sync) synchronizer driven by main.rs) and the
//! domain/api layers. It implements the event-driven architecture that keeps
//! the screen in step with the activities server.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └───── API Responses / Timers ─────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`form`]: Signup form fields and native-control validation
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Central view state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use activity_board::app::{handle_event, Event, ViewState};
//! use activity_board::Theme;
//!
//! let mut state = ViewState::new(Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::SubmitSignup);
//! assert!(render);
//! assert!(actions.is_empty()); // empty form never reaches the network
//! ```

pub mod actions;
pub mod form;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use form::{SignupForm, Submission};
pub use handler::{handle_event, Event};
pub use state::{Listing, PendingUndo, StatusKind, StatusMessage, TimerId, ViewState};
