//! Per-turn outcomes surfaced to the caller.

use wayfarer_types::{FunctionCallItem, MessageItem, ToolError};

/// The result of one successful turn round trip.
#[derive(Debug)]
pub enum TurnOutcome {
    /// The reply was a plain message; both logs grew by one entry.
    Message(MessageItem),

    /// The reply directed a tool call; only the model log grew.
    ///
    /// The dispatch result lives on the item (`status`, `output`). It is not
    /// merged back into either log and no follow-up model request is made;
    /// closing that loop is a known gap, left to the caller for now.
    ToolCall {
        /// The finished call record, status machine already driven.
        item: FunctionCallItem,
        /// The dispatch error, when the call failed.
        error: Option<ToolError>,
    },
}

impl TurnOutcome {
    /// Whether this outcome is a display-worthy message.
    pub fn is_message(&self) -> bool {
        matches!(self, TurnOutcome::Message(_))
    }
}
