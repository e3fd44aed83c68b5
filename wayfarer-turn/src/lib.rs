#![deny(missing_docs)]
//! The turn orchestrator: one round trip to the backend per call.
//!
//! [`TurnRunner::run_turn`] reads the model log from the store, sends it
//! (prefixed with the system directive) to the backend's turn endpoint,
//! classifies the reply, and reconciles it into the two logs:
//! - a plain message is appended to both the model log and the display log
//! - a tool-call reply is appended to the model log only, and its first
//!   descriptor is handed to the tool dispatcher
//!
//! Every failure is a typed [`TurnError`](wayfarer_types::TurnError) or a
//! [`ToolError`](wayfarer_types::ToolError) riding on the outcome; nothing
//! is swallowed.

pub mod outcome;
pub mod runner;

pub use outcome::TurnOutcome;
pub use runner::{DEFAULT_DIRECTIVE, TurnRunner};
