//! Display-log items: what the chat UI renders.

use serde::{Deserialize, Serialize};

use crate::args::ToolArguments;

/// The role of a message participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A human user.
    User,
    /// The assistant (model).
    Assistant,
    /// A system message.
    System,
}

/// Lifecycle of a single tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    /// The call has been issued but has not finished.
    InProgress,
    /// The call finished and produced a result.
    Completed,
    /// The call failed at some point in its lifecycle.
    Failed,
}

/// A plain utterance shown in the chat UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageItem {
    /// Who said it.
    pub role: Role,
    /// The message text.
    pub content: String,
}

/// A record of one tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCallItem {
    /// Where the call is in its lifecycle.
    pub status: CallStatus,
    /// Opaque call identifier assigned by the backend.
    pub id: String,
    /// Name of the tool being invoked.
    pub name: String,
    /// Raw serialized argument payload, exactly as the model emitted it.
    pub arguments: String,
    /// Arguments decoded into the tool's typed shape, once decoding succeeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_arguments: Option<ToolArguments>,
    /// Text result of the call; absent until the call completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// An entry in the display log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Item {
    /// A plain utterance.
    Message(MessageItem),
    /// A tool invocation record.
    FunctionCall(FunctionCallItem),
}
