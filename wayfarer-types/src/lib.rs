#![deny(missing_docs)]
//! Shared data model for the wayfarer turn loop.
//!
//! This crate holds the lingua franca of the client:
//! - [`Item`] — display-log entries rendered in the chat UI
//! - [`TurnRecord`] — backend-shaped records replayed on every model request
//! - [`ToolArguments`] — typed, per-tool argument payloads
//! - [`TurnError`] / [`ToolError`] — typed failures for the turn and for
//!   tool dispatch

pub mod args;
pub mod error;
pub mod item;
pub mod record;

pub use args::*;
pub use error::*;
pub use item::*;
pub use record::*;
