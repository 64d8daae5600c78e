use tracing::instrument;

use crate::domain::{
    chat::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    history::ports::HistoryRepository,
    ocr::ports::{LocalOcrEngine, RemoteOcrProvider},
    profile::{
        entities::{ProfileRecord, UpdateProfileInput, UserProfile},
        ports::{ProfileRepository, ProfileService},
    },
    risk::ports::NutritionLookup,
    session::ports::SessionStore,
};

/// Applies the provided fields on top of the stored record. An empty string
/// removes the stored value so the default shows again.
pub fn merge_profile(mut record: ProfileRecord, input: UpdateProfileInput) -> ProfileRecord {
    fn apply(slot: &mut Option<String>, value: Option<String>) {
        if let Some(value) = value {
            let value = value.trim().to_string();
            *slot = if value.is_empty() { None } else { Some(value) };
        }
    }

    apply(&mut record.display_name, input.display_name);
    apply(&mut record.health_profile, input.health_profile);
    apply(&mut record.avatar_url, input.avatar_url);
    record
}

impl<O, L, N, LLM, H, P, S> ProfileService for Service<O, L, N, LLM, H, P, S>
where
    O: RemoteOcrProvider,
    L: LocalOcrEngine,
    N: NutritionLookup,
    LLM: LLMClient,
    H: HistoryRepository,
    P: ProfileRepository,
    S: SessionStore,
{
    async fn get_profile(&self) -> Result<UserProfile, CoreError> {
        let record = self.profile_repository.fetch().await?;
        Ok(UserProfile::from(record))
    }

    #[instrument(skip(self, input))]
    async fn update_profile(&self, input: UpdateProfileInput) -> Result<UserProfile, CoreError> {
        let record = self.profile_repository.fetch().await?;
        let record = merge_profile(record, input);
        self.profile_repository.store(record.clone()).await?;

        Ok(UserProfile::from(record))
    }

    #[instrument(skip(self))]
    async fn logout(&self) -> Result<(), CoreError> {
        self.profile_repository.clear().await?;
        self.history_repository.clear().await?;
        self.session_store.clear().await?;

        tracing::info!("Durable state cleared");
        Ok(())
    }
}
