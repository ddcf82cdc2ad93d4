//! Conversation controller
//!
//! Owns all session state: the append-only message log, the pending-input
//! draft, and the single-request-in-flight flag. Every accepted submission
//! issues exactly one backend request and applies exactly one of two outcomes
//! to the log: the assistant's reply, or an inline error message carrying the
//! warning prefix.

use crate::backend::{BackendError, ChatBackend};
use crate::conversation::{ConversationState, HistoryEntry, Message};

/// Prefix marking assistant messages that carry an error instead of a reply.
pub const WARNING_PREFIX: &str = "⚠️ ";

/// Outcome of a single [`ConversationController::submit`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Input was empty or a request was already in flight; nothing changed.
    Ignored,
    /// The backend replied and the reply was appended.
    Replied,
    /// The request failed and an error message was appended.
    Failed,
}

pub struct ConversationController<B> {
    state: ConversationState,
    backend: B,
}

impl<B: ChatBackend> ConversationController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            state: ConversationState::new(),
            backend,
        }
    }

    /// Read-only view of the transcript.
    pub fn messages(&self) -> &[Message] {
        &self.state.messages
    }

    pub fn draft(&self) -> &str {
        &self.state.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.state.draft = draft.into();
    }

    pub fn awaiting_reply(&self) -> bool {
        self.state.awaiting_reply
    }

    /// Submit user text to the backend and append the outcome to the log.
    ///
    /// A no-op while a request is outstanding or when the trimmed text is
    /// empty. The history snapshot is taken before the user message is
    /// appended; the submitted text travels in the request's `message` field,
    /// never duplicated into the history.
    pub async fn submit(&mut self, text: &str) -> Submission {
        let text = text.trim();
        if text.is_empty() || self.state.awaiting_reply {
            return Submission::Ignored;
        }

        let history: Vec<HistoryEntry> = self.state.history();

        self.state.push(Message::user(text));
        self.state.draft.clear();
        self.state.awaiting_reply = true;

        tracing::debug!(history_len = history.len(), "submitting message");

        let outcome = match self.backend.chat(text, &history).await {
            Ok(reply) => {
                self.state.push(Message::assistant(&reply));
                Submission::Replied
            }
            Err(err) => {
                tracing::warn!(error = %err, "chat request failed");
                let content = format!("{WARNING_PREFIX}{}", err.user_message());
                self.state.push(Message::assistant(&content));
                Submission::Failed
            }
        };

        self.state.awaiting_reply = false;
        outcome
    }
}
