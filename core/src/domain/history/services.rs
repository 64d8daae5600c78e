use tracing::instrument;

use crate::domain::{
    chat::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    history::{
        entities::{HistoryEntry, ScanHistory},
        ports::{HistoryRepository, HistoryService},
    },
    ocr::ports::{LocalOcrEngine, RemoteOcrProvider},
    profile::ports::ProfileRepository,
    risk::ports::NutritionLookup,
    session::ports::SessionStore,
};

/// Prepends the entry, persists the whole capped list and returns it.
/// Entries without an image are ignored and the stored list is returned.
#[instrument(skip_all)]
pub async fn record_history<H>(repository: &H, entry: HistoryEntry) -> Result<ScanHistory, CoreError>
where
    H: HistoryRepository,
{
    if entry.image.is_empty() {
        tracing::debug!("Scan has no image, history left unchanged");
        return repository.load().await;
    }

    let history = repository.record(entry).await?;

    tracing::info!(entries = history.len(), "Scan recorded in history");
    Ok(history)
}

impl<O, L, N, LLM, H, P, S> HistoryService for Service<O, L, N, LLM, H, P, S>
where
    O: RemoteOcrProvider,
    L: LocalOcrEngine,
    N: NutritionLookup,
    LLM: LLMClient,
    H: HistoryRepository,
    P: ProfileRepository,
    S: SessionStore,
{
    async fn record_scan(&self, entry: HistoryEntry) -> Result<ScanHistory, CoreError> {
        record_history(&self.history_repository, entry).await
    }

    async fn get_history(&self) -> Result<ScanHistory, CoreError> {
        self.history_repository.load().await
    }
}
