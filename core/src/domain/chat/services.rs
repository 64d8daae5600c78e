use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    chat::{
        entities::{ChatExchange, ChatMessage, REQUEST_FAILED_REPLY},
        ports::{ChatService, LLMClient},
    },
    common::{entities::app_errors::CoreError, services::Service},
    history::ports::HistoryRepository,
    ingredient::entities::{Ingredient, join_ingredients},
    ocr::ports::{LocalOcrEngine, RemoteOcrProvider},
    profile::{entities::UserProfile, ports::ProfileRepository},
    risk::ports::NutritionLookup,
    session::{ports::SessionStore, services::load_session},
};

pub fn build_prompt(question: &str, context: &[Ingredient], health_profile: &str) -> String {
    format!(
        "You are LabelGuard AI. Only answer questions about the scanned food and ingredients. User health: {health_profile}. \nScanned ingredients: {}. \nUser asked: \"{question}\".",
        join_ingredients(context)
    )
}

/// One stateless round trip to the model. Never fails: upstream errors are
/// surfaced in the reply and transport failures become a fixed apology.
#[instrument(skip(llm, context), fields(context = context.len()))]
pub async fn ask_assistant<LLM>(
    llm: &LLM,
    question: &str,
    context: &[Ingredient],
    health_profile: &str,
) -> String
where
    LLM: LLMClient,
{
    let prompt = build_prompt(question, context, health_profile);

    match llm.generate_text(prompt).await {
        Ok(reply) => reply.into_message_text(),
        Err(e) => {
            tracing::error!("Chat request failed: {}", e);
            REQUEST_FAILED_REPLY.to_string()
        }
    }
}

impl<O, L, N, LLM, H, P, S> Service<O, L, N, LLM, H, P, S>
where
    O: RemoteOcrProvider,
    L: LocalOcrEngine,
    N: NutritionLookup,
    LLM: LLMClient,
    H: HistoryRepository,
    P: ProfileRepository,
    S: SessionStore,
{
    async fn exchange(&self, session_id: Uuid, question: String) -> Result<ChatExchange, CoreError> {
        let question = question.trim().to_string();
        if question.is_empty() {
            return Err(CoreError::Invalid);
        }

        let session = load_session(&self.session_store, session_id).await?;
        let profile = UserProfile::from(self.profile_repository.fetch().await?);

        let reply_text = ask_assistant(
            &self.llm_client,
            &question,
            &session.ingredients,
            &profile.health_profile,
        )
        .await;

        // re-read so a scan that finished meanwhile is not overwritten
        let mut session = load_session(&self.session_store, session_id).await?;
        let reply = ChatMessage::assistant(reply_text);
        session.transcript.push(ChatMessage::user(question));
        session.transcript.push(reply.clone());
        session.touch();

        let transcript = session.transcript.clone();
        self.session_store.update(session).await?;

        Ok(ChatExchange { reply, transcript })
    }
}

impl<O, L, N, LLM, H, P, S> ChatService for Service<O, L, N, LLM, H, P, S>
where
    O: RemoteOcrProvider,
    L: LocalOcrEngine,
    N: NutritionLookup,
    LLM: LLMClient,
    H: HistoryRepository,
    P: ProfileRepository,
    S: SessionStore,
{
    #[instrument(skip(self, question))]
    async fn ask(&self, session_id: Uuid, question: String) -> Result<ChatExchange, CoreError> {
        self.exchange(session_id, question).await
    }

    #[instrument(skip(self))]
    async fn ask_about_ingredient(
        &self,
        session_id: Uuid,
        index: usize,
    ) -> Result<ChatExchange, CoreError> {
        let session = load_session(&self.session_store, session_id).await?;
        let ingredient = session.ingredients.get(index).ok_or(CoreError::NotFound)?;

        self.exchange(session_id, format!("Tell me about {ingredient}"))
            .await
    }

    async fn transcript(&self, session_id: Uuid) -> Result<Vec<ChatMessage>, CoreError> {
        let session = load_session(&self.session_store, session_id).await?;
        Ok(session.transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::{
        entities::{LLMReply, NO_INFO_REPLY},
        ports::MockLLMClient,
    };

    fn context() -> Vec<Ingredient> {
        vec![
            Ingredient::parse("Sugar").unwrap(),
            Ingredient::parse("Salt").unwrap(),
        ]
    }

    #[test]
    fn test_prompt_embeds_profile_context_and_question() {
        let prompt = build_prompt("Is this safe?", &context(), "diabetes");
        assert!(prompt.starts_with("You are LabelGuard AI."));
        assert!(prompt.contains("User health: diabetes."));
        assert!(prompt.contains("Scanned ingredients: Sugar, Salt."));
        assert!(prompt.ends_with("User asked: \"Is this safe?\"."));
    }

    #[tokio::test]
    async fn test_reply_text_is_returned() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .withf(|prompt| prompt.contains("Sugar, Salt"))
            .returning(|_| Box::pin(async { Ok(LLMReply::Text("Limit sugar.".into())) }));

        let reply = ask_assistant(&llm, "Is this safe?", &context(), "general health").await;
        assert_eq!(reply, "Limit sugar.");
    }

    #[tokio::test]
    async fn test_upstream_error_message_is_surfaced() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text().returning(|_| {
            Box::pin(async { Ok(LLMReply::UpstreamError("API key not valid".into())) })
        });

        let reply = ask_assistant(&llm, "hi", &context(), "general health").await;
        assert!(reply.contains("API key not valid"));
        assert_ne!(reply, REQUEST_FAILED_REPLY);
    }

    #[tokio::test]
    async fn test_empty_reply_uses_placeholder() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text()
            .returning(|_| Box::pin(async { Ok(LLMReply::Empty) }));

        let reply = ask_assistant(&llm, "hi", &[], "general health").await;
        assert_eq!(reply, NO_INFO_REPLY);
    }

    #[tokio::test]
    async fn test_transport_failure_yields_apology() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_text().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("timeout".into())) })
        });

        let reply = ask_assistant(&llm, "hi", &context(), "general health").await;
        assert_eq!(reply, REQUEST_FAILED_REPLY);
    }
}
