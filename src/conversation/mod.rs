//! Conversation types and state management

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single transcript entry. Immutable once appended; display order and the
/// order sent to the backend are both append order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: &str) -> Self {
        Self {
            role: Role::User,
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn assistant(content: &str) -> Self {
        Self {
            role: Role::Assistant,
            content: content.to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Wire projection of a [`Message`] sent to the backend as conversation
/// history. Timestamps are client-side only and never leave the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: Role,
    pub content: String,
}

impl From<&Message> for HistoryEntry {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
        }
    }
}

/// In-memory state of the single chat session: the append-only message log,
/// the not-yet-submitted draft, and the one-request-in-flight flag.
#[derive(Debug, Default)]
pub struct ConversationState {
    pub(crate) messages: Vec<Message>,
    pub(crate) draft: String,
    pub(crate) awaiting_reply: bool,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current log as wire history entries.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.messages.iter().map(HistoryEntry::from).collect()
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }
}
