//! Backend-shaped turn records: the model log's replayable transcript.

use serde::{Deserialize, Serialize};

use crate::item::Role;

/// One replayable turn record in the model log.
///
/// Round-trips the backend's chat-completions message shape. Fields the
/// client does not interpret (`refusal`, `audio`, ...) are carried in
/// `extra` so a replayed record echoes what the backend emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Author of the turn.
    pub role: Role,
    /// Message text; null on tool-call replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Tool-call descriptors attached to an assistant reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCallRecord>>,
    /// Backend fields passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TurnRecord {
    /// A bare text record (a new user turn, or the system directive).
    pub fn text(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            tool_calls: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Whether this record directs the client to invoke a tool.
    pub fn has_tool_calls(&self) -> bool {
        self.tool_calls.as_deref().is_some_and(|calls| !calls.is_empty())
    }

    /// The first tool-call descriptor, if this record carries any.
    ///
    /// Only the first descriptor is ever dispatched; multi-call replies are
    /// a deliberate scope limit of the client.
    pub fn first_tool_call(&self) -> Option<&ToolCallRecord> {
        self.tool_calls.as_deref().and_then(|calls| calls.first())
    }
}

/// One tool-call descriptor on an assistant reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCallRecord {
    /// Opaque call identifier.
    pub id: String,
    /// Descriptor type; the backend always sends `"function"`.
    #[serde(rename = "type")]
    pub call_type: String,
    /// The function to call.
    pub function: FunctionCallRecord,
}

/// The function half of a tool-call descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCallRecord {
    /// Tool name.
    pub name: String,
    /// Arguments as a JSON-encoded string (parsed by the dispatcher).
    pub arguments: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_record_has_no_tool_calls() {
        let record = TurnRecord::text(Role::User, "Hi");
        assert!(!record.has_tool_calls());
        assert!(record.first_tool_call().is_none());
        assert_eq!(record.content.as_deref(), Some("Hi"));
    }

    #[test]
    fn decodes_plain_backend_reply() {
        let record: TurnRecord = serde_json::from_value(serde_json::json!({
            "role": "assistant",
            "content": "Hello! How can I assist you today?",
            "tool_calls": null,
            "refusal": null,
            "audio": null
        }))
        .unwrap();
        assert_eq!(record.role, Role::Assistant);
        assert!(!record.has_tool_calls());
        // Unknown fields survive for replay.
        assert!(record.extra.contains_key("refusal"));
        assert!(record.extra.contains_key("audio"));
    }

    #[test]
    fn decodes_tool_call_reply_and_keeps_order() {
        let record: TurnRecord = serde_json::from_value(serde_json::json!({
            "role": "assistant",
            "content": null,
            "tool_calls": [
                {
                    "id": "call_a",
                    "type": "function",
                    "function": { "name": "search_location", "arguments": "{\"location\":\"Paris\"}" }
                },
                {
                    "id": "call_b",
                    "type": "function",
                    "function": { "name": "search_location", "arguments": "{\"location\":\"Lyon\"}" }
                }
            ]
        }))
        .unwrap();
        assert!(record.has_tool_calls());
        let first = record.first_tool_call().unwrap();
        assert_eq!(first.id, "call_a");
        assert_eq!(first.function.name, "search_location");
    }

    #[test]
    fn replay_keeps_backend_shape() {
        let body = serde_json::json!({
            "role": "assistant",
            "content": "Sure thing.",
            "refusal": null
        });
        let record: TurnRecord = serde_json::from_value(body).unwrap();
        let replayed = serde_json::to_value(&record).unwrap();
        assert_eq!(replayed["role"], "assistant");
        assert_eq!(replayed["content"], "Sure thing.");
        assert_eq!(replayed["refusal"], serde_json::Value::Null);
        // tool_calls was absent and stays absent.
        assert!(replayed.get("tool_calls").is_none());
    }
}
