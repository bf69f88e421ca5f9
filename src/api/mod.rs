//! API layer for the external activities service.
//!
//! This module provides the abstraction over the REST collaborator that owns
//! all activity data, plus the message protocol the view logic uses to ask for
//! network work without awaiting it.
//!
//! # Modules
//!
//! - `backend`: [`ActivityApi`] trait abstraction
//! - `http`: `reqwest` implementation of the trait
//! - `messages`: Request/response protocol between handler and API tasks

pub mod backend;
pub mod http;
pub mod messages;

#[cfg(test)]
pub(crate) mod fake;

pub use backend::ActivityApi;
pub use http::HttpActivityApi;
pub use messages::{ApiRequest, ApiResponse, SignupOrigin};
