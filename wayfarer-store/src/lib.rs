#![deny(missing_docs)]
//! In-memory conversation store: the single owner of both chat logs.
//!
//! The store holds two ordered sequences that grow over the life of a
//! session:
//! - the *display log* ([`Item`]s rendered to the user)
//! - the *model log* ([`TurnRecord`]s replayed verbatim to the backend)
//!
//! The logs may diverge: a tool-call turn lands in the model log only.
//! All mutation goes through [`ConversationStore::commit_logs`], which
//! replaces both sequences in one call, so observers never see one log
//! updated without the other.

use tokio::sync::RwLock;
use wayfarer_types::{Item, TurnRecord};

/// A point-in-time copy of both logs.
#[derive(Debug, Clone, Default)]
pub struct LogSnapshot {
    /// Items rendered to the user.
    pub display: Vec<Item>,
    /// Backend-shaped records replayed on every model request.
    pub model: Vec<TurnRecord>,
}

/// Owns the display log and the model log.
///
/// Both logs start empty at conversation start and are discarded with the
/// store. The system directive is never committed here; it exists only in
/// outbound request payloads.
#[derive(Debug, Default)]
pub struct ConversationStore {
    logs: RwLock<LogSnapshot>,
}

impl ConversationStore {
    /// Create an empty store (conversation start).
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot both logs.
    pub async fn read_logs(&self) -> LogSnapshot {
        self.logs.read().await.clone()
    }

    /// Replace both logs in one atomic call.
    ///
    /// Callers pass the full updated sequences; the store never mutates a
    /// log in place.
    pub async fn commit_logs(&self, display: Vec<Item>, model: Vec<TurnRecord>) {
        let mut logs = self.logs.write().await;
        *logs = LogSnapshot { display, model };
    }
}
