// src/client/mod.rs — Chat service client layer

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::infra::errors::FrontDeskError;
use crate::infra::session::SessionId;

pub use http::HttpChatClient;

/// One request/response round trip to the reply service.
///
/// Implementations deliver the request once and resolve exactly once. They do
/// not retry; callers treat every `Err` the same way.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn send(&self, request: ChatRequest) -> Result<ChatReply, FrontDeskError>;
}

/// Wire body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: SessionId,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, session_id: SessionId) -> Self {
        Self {
            message: message.into(),
            session_id,
        }
    }
}

/// Successful reply. Fields other than `reply` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}
