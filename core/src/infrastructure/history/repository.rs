use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        history::{
            entities::{HistoryEntry, ScanHistory},
            ports::HistoryRepository,
        },
    },
    infrastructure::storage::local_store::{LocalStore, SCAN_HISTORY_KEY},
};

/// History file shared by every session. Writers take `write_lock` so two
/// scans finishing together cannot overwrite each other's entry.
#[derive(Debug, Clone)]
pub struct FileHistoryRepository {
    store: LocalStore,
    write_lock: Arc<Mutex<()>>,
}

impl FileHistoryRepository {
    pub fn new(store: LocalStore) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

impl HistoryRepository for FileHistoryRepository {
    async fn load(&self) -> Result<ScanHistory, CoreError> {
        match self.store.get::<Vec<HistoryEntry>>(SCAN_HISTORY_KEY).await {
            Ok(entries) => Ok(ScanHistory::from_entries(entries.unwrap_or_default())),
            Err(CoreError::StorageError(message)) => {
                tracing::warn!("Scan history unreadable, starting empty: {}", message);
                Ok(ScanHistory::default())
            }
            Err(e) => Err(e),
        }
    }

    async fn save(&self, history: ScanHistory) -> Result<(), CoreError> {
        self.store.set(SCAN_HISTORY_KEY, history.entries()).await
    }

    async fn clear(&self) -> Result<(), CoreError> {
        let _guard = self.write_lock.lock().await;
        self.store.remove(SCAN_HISTORY_KEY).await
    }

    async fn record(&self, entry: HistoryEntry) -> Result<ScanHistory, CoreError> {
        let _guard = self.write_lock.lock().await;

        let mut history = self.load().await?;
        history.record(entry);
        self.save(history.clone()).await?;

        Ok(history)
    }
}
