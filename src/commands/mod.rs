//! Frontend Commands
//!
//! Bindings from UI events to the REST API, organized by domain. Each
//! command runs the core state machine's begin step, sends the request in
//! the background and applies the response to the store.

mod auth;
mod task;

pub use auth::*;
pub use task::*;
