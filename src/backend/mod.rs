//! Chat backend integrations

mod http;

use async_trait::async_trait;
use thiserror::Error;

pub use http::HttpBackend;

use crate::conversation::HistoryEntry;

/// Shown when a failure carries no usable message of its own.
pub const FALLBACK_ERROR: &str = "Sorry, I encountered an error. Please try again later.";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Server { status: u16, detail: Option<String> },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl BackendError {
    /// The human-readable string rendered in the transcript for this failure.
    ///
    /// A structured `detail` from the server wins over the generic status
    /// line; transport errors surface their own message; anything else falls
    /// back to [`FALLBACK_ERROR`].
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            BackendError::Server { status, .. } => format!("HTTP error! status: {status}"),
            BackendError::RequestFailed(err) => err.to_string(),
            BackendError::InvalidResponse(_) => FALLBACK_ERROR.to_string(),
        }
    }
}

/// A conversational backend the controller can submit a message to.
///
/// `message` is the text being submitted; `history` is the prior transcript,
/// excluding that message.
#[async_trait]
pub trait ChatBackend {
    async fn chat(&self, message: &str, history: &[HistoryEntry])
        -> Result<String, BackendError>;
}
