use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    chat::entities::{ChatExchange, ChatMessage, LLMReply},
    common::entities::app_errors::CoreError,
};

/// LLM Client trait for calling the generative-language service
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends one prompt. Transport and decoding problems are errors; an
    /// error object in the response body is a successful `UpstreamError`.
    fn generate_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<LLMReply, CoreError>> + Send;
}

/// Service trait for the chat assistant
#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    fn ask(
        &self,
        session_id: Uuid,
        question: String,
    ) -> impl Future<Output = Result<ChatExchange, CoreError>> + Send;

    /// Shortcut used when an ingredient card is selected.
    fn ask_about_ingredient(
        &self,
        session_id: Uuid,
        index: usize,
    ) -> impl Future<Output = Result<ChatExchange, CoreError>> + Send;

    fn transcript(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Vec<ChatMessage>, CoreError>> + Send;
}
