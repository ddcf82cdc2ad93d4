//! HTTP implementation of the chat backend

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::conversation::HistoryEntry;

use super::{BackendError, ChatBackend};

/// Talks to the coach backend over `POST {base}/api/chat`.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    conversation_history: &'a [HistoryEntry],
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    reply: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// An empty base means same-origin relative routing.
    fn endpoint(&self) -> String {
        if self.base_url.is_empty() {
            "/api/chat".to_string()
        } else {
            format!("{}/api/chat", self.base_url)
        }
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn chat(
        &self,
        message: &str,
        history: &[HistoryEntry],
    ) -> Result<String, BackendError> {
        let request = ChatRequest {
            message,
            conversation_history: history,
        };

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(parsed) => Some(parsed.detail),
                Err(err) => {
                    tracing::debug!(%status, %err, "error body is not structured JSON");
                    None
                }
            };
            return Err(BackendError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        Ok(reply.reply)
    }
}
