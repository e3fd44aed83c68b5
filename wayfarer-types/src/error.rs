//! Typed failures for the turn loop and tool dispatch.
//!
//! Nothing here is swallowed: every failure is returned to the caller, who
//! decides whether to surface it, log it, or try the turn again.

use thiserror::Error;

/// Errors from one turn round trip.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TurnError {
    /// A turn is already in flight; this one was rejected, not queued.
    #[error("a turn is already in flight")]
    TurnInFlight,

    /// The backend answered with a non-success HTTP status.
    #[error("turn request failed with status {status}: {body}")]
    RequestFailed {
        /// The HTTP status code.
        status: u16,
        /// The response body, for logging.
        body: String,
    },

    /// The request could not be sent or the reply never arrived.
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The reply body did not decode as a turn record.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors from dispatching a single tool call.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool name is not in the route table. No request was issued.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// The raw argument payload did not decode as the tool's typed shape.
    #[error("invalid arguments for {tool}: {message}")]
    InvalidArguments {
        /// The tool whose arguments were rejected.
        tool: String,
        /// The decode failure.
        message: String,
    },

    /// The backend answered with a non-success HTTP status.
    #[error("tool request failed with status {status}: {body}")]
    RequestFailed {
        /// The HTTP status code.
        status: u16,
        /// The response body, for logging.
        body: String,
    },

    /// The request could not be sent or the reply never arrived.
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The reply body was not valid JSON.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
