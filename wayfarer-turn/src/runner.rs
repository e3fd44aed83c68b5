//! The [`TurnRunner`]: builds the request, classifies the reply, commits the logs.

use std::sync::Arc;

use tokio::sync::Mutex;
use wayfarer_store::ConversationStore;
use wayfarer_tools::ToolDispatcher;
use wayfarer_types::{
    CallStatus, FunctionCallItem, Item, MessageItem, Role, ToolCallRecord, ToolError, TurnError,
    TurnRecord,
};

use crate::outcome::TurnOutcome;

/// System directive prepended to every backend request.
///
/// Never persisted in the model log; it exists only in outbound payloads.
pub const DEFAULT_DIRECTIVE: &str = "You are a helpful travel assistant.";

/// Default backend base URL (the local development server).
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Drives one conversation turn at a time.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use wayfarer_store::ConversationStore;
/// use wayfarer_turn::TurnRunner;
///
/// let store = Arc::new(ConversationStore::new());
/// let runner = TurnRunner::new(store).base_url("http://localhost:8000");
/// ```
pub struct TurnRunner {
    store: Arc<ConversationStore>,
    dispatcher: ToolDispatcher,
    base_url: String,
    directive: String,
    client: reqwest::Client,
    /// Single-flight guard: two concurrent turns would race the logs.
    turn_lock: Mutex<()>,
}

impl TurnRunner {
    /// Create a runner over the given store with default backend settings.
    pub fn new(store: Arc<ConversationStore>) -> Self {
        Self {
            store,
            dispatcher: ToolDispatcher::new(),
            base_url: DEFAULT_BASE_URL.into(),
            directive: DEFAULT_DIRECTIVE.into(),
            client: reqwest::Client::new(),
            turn_lock: Mutex::new(()),
        }
    }

    /// Override the backend base URL.
    ///
    /// Useful for testing with a local mock server or an API proxy.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the system directive.
    pub fn directive(mut self, directive: impl Into<String>) -> Self {
        self.directive = directive.into();
        self
    }

    /// Replace the tool dispatcher (to point it at a different backend).
    pub fn dispatcher(mut self, dispatcher: ToolDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Build the turn endpoint URL.
    fn turn_url(&self) -> String {
        format!("{}/get_response", self.base_url)
    }

    /// Run one turn against the current store state.
    ///
    /// Reads both logs, POSTs `[directive, ...model log]` to the backend,
    /// appends the reply to the model log, and either appends a plain
    /// message to the display log or dispatches the reply's first tool-call
    /// descriptor. On any failure before the reply is decoded, neither log
    /// is mutated.
    ///
    /// # Errors
    ///
    /// [`TurnError::TurnInFlight`] when another turn holds the guard;
    /// [`TurnError::RequestFailed`] on a non-success status;
    /// [`TurnError::Network`] / [`TurnError::InvalidResponse`] on transport
    /// or decode faults. A failed tool call does NOT fail the turn; it is
    /// reported on the [`TurnOutcome::ToolCall`] it produced.
    pub async fn run_turn(&self) -> Result<TurnOutcome, TurnError> {
        let _guard = self
            .turn_lock
            .try_lock()
            .map_err(|_| TurnError::TurnInFlight)?;

        let snapshot = self.store.read_logs().await;

        // [directive, ...model log]; the directive itself is never committed.
        let mut messages = Vec::with_capacity(snapshot.model.len() + 1);
        messages.push(TurnRecord::text(Role::System, self.directive.clone()));
        messages.extend(snapshot.model.iter().cloned());

        let url = self.turn_url();
        tracing::debug!(url = %url, prior_turns = snapshot.model.len(), "requesting model turn");

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "messages": messages }))
            .send()
            .await
            .map_err(|e| TurnError::Network(Box::new(e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TurnError::Network(Box::new(e)))?;

        if !status.is_success() {
            tracing::warn!(status = %status, "model turn failed");
            return Err(TurnError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let reply: TurnRecord =
            serde_json::from_str(&body).map_err(|e| TurnError::InvalidResponse(e.to_string()))?;

        let mut display = snapshot.display;
        let mut model = snapshot.model;
        model.push(reply.clone());

        if let Some(call) = reply.first_tool_call() {
            // Tool-call turn: the model log gets the reply, the display log
            // stays untouched. Commit before dispatching so a failed tool
            // does not lose the replayable record.
            self.store.commit_logs(display, model).await;
            let (item, error) = self.dispatch_call(call).await;
            return Ok(TurnOutcome::ToolCall { item, error });
        }

        let message = MessageItem {
            role: reply.role,
            content: reply.content.clone().unwrap_or_default(),
        };
        display.push(Item::Message(message.clone()));
        self.store.commit_logs(display, model).await;
        Ok(TurnOutcome::Message(message))
    }

    /// Dispatch one tool-call descriptor and drive the item's status machine:
    /// `in_progress → completed` on success, `in_progress → failed` on any
    /// error path.
    async fn dispatch_call(&self, call: &ToolCallRecord) -> (FunctionCallItem, Option<ToolError>) {
        let mut item = FunctionCallItem {
            status: CallStatus::InProgress,
            id: call.id.clone(),
            name: call.function.name.clone(),
            arguments: call.function.arguments.clone(),
            parsed_arguments: None,
            output: None,
        };

        // Typed decode before dispatch; a rejected payload never hits the wire.
        match wayfarer_tools::parse_arguments(&item.name, &item.arguments) {
            Ok(parsed) => item.parsed_arguments = Some(parsed),
            Err(e) => {
                tracing::warn!(tool = %item.name, error = %e, "tool arguments rejected");
                item.status = CallStatus::Failed;
                return (item, Some(e));
            }
        }

        match self.dispatcher.invoke(&item.name, &item.arguments).await {
            Ok(result) => {
                item.status = CallStatus::Completed;
                item.output = Some(result.to_string());
                (item, None)
            }
            Err(e) => {
                tracing::warn!(tool = %item.name, error = %e, "tool dispatch failed");
                item.status = CallStatus::Failed;
                (item, Some(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_runner() -> TurnRunner {
        TurnRunner::new(Arc::new(ConversationStore::new()))
    }

    #[test]
    fn default_base_url_is_set() {
        let runner = test_runner();
        assert_eq!(runner.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn default_directive_is_set() {
        let runner = test_runner();
        assert_eq!(runner.directive, DEFAULT_DIRECTIVE);
    }

    #[test]
    fn builder_overrides_base_url() {
        let runner = test_runner().base_url("http://localhost:9999");
        assert_eq!(runner.base_url, "http://localhost:9999");
    }

    #[test]
    fn builder_overrides_directive() {
        let runner = test_runner().directive("You are terse.");
        assert_eq!(runner.directive, "You are terse.");
    }

    #[test]
    fn turn_url_includes_endpoint() {
        let runner = test_runner().base_url("http://localhost:9999");
        assert_eq!(runner.turn_url(), "http://localhost:9999/get_response");
    }
}
