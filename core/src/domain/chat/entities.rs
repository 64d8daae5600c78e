use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NO_INFO_REPLY: &str = "No specific info available.";
pub const REQUEST_FAILED_REPLY: &str = "⚠️ AI request failed. Please try again.";
pub const UPSTREAM_ERROR_PREFIX: &str = "⚠️ AI Error: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChatOrigin {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatMessage {
    pub text: String,
    pub origin: ChatOrigin,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text.into(), ChatOrigin::User)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text.into(), ChatOrigin::Assistant)
    }

    fn new(text: String, origin: ChatOrigin) -> Self {
        Self {
            text,
            origin,
            sent_at: Utc::now(),
        }
    }
}

/// What the generative-language service answered, before it is turned into
/// text for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LLMReply {
    Text(String),
    UpstreamError(String),
    Empty,
}

impl LLMReply {
    pub fn into_message_text(self) -> String {
        match self {
            LLMReply::Text(text) => text,
            LLMReply::UpstreamError(message) => format!("{UPSTREAM_ERROR_PREFIX}{message}"),
            LLMReply::Empty => NO_INFO_REPLY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChatExchange {
    pub reply: ChatMessage,
    pub transcript: Vec<ChatMessage>,
}
