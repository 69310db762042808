// src/client/http.rs — HTTP chat client (JSON over POST)

use async_trait::async_trait;

use super::{ChatClient, ChatReply, ChatRequest};
use crate::infra::errors::FrontDeskError;
use crate::util::truncate_str;

pub struct HttpChatClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpChatClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatClient for HttpChatClient {
    async fn send(&self, request: ChatRequest) -> Result<ChatReply, FrontDeskError> {
        tracing::debug!(
            "POST {} (session {}, {} bytes)",
            self.endpoint,
            request.session_id,
            request.message.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(
                "user-agent",
                format!("frontdesk/{}", env!("CARGO_PKG_VERSION")),
            )
            .json(&request)
            .send()
            .await
            .map_err(|e| FrontDeskError::Transport {
                endpoint: self.endpoint.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FrontDeskError::Transport {
                endpoint: self.endpoint.clone(),
                message: e.to_string(),
            })?;

        if !status.is_success() {
            return Err(FrontDeskError::Status {
                status: status.as_u16(),
                body: truncate_str(&body, 200).to_string(),
            });
        }

        serde_json::from_str::<ChatReply>(&body).map_err(|e| FrontDeskError::Decode(e.to_string()))
    }
}
