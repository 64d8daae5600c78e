use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    history::entities::{HistoryEntry, ScanHistory},
};

/// Durable storage for the scan history, kept under a single key.
#[cfg_attr(test, mockall::automock)]
pub trait HistoryRepository: Send + Sync {
    fn load(&self) -> impl Future<Output = Result<ScanHistory, CoreError>> + Send;

    fn save(&self, history: ScanHistory) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear(&self) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Prepends one entry to the persisted list and returns the new list.
    /// Implementations shared between concurrent scans must run the whole
    /// load and save as one step.
    fn record(
        &self,
        entry: HistoryEntry,
    ) -> impl Future<Output = Result<ScanHistory, CoreError>> + Send {
        async move {
            let mut history = self.load().await?;
            history.record(entry);
            self.save(history.clone()).await?;
            Ok(history)
        }
    }
}

/// Service trait for scan history
#[cfg_attr(test, mockall::automock)]
pub trait HistoryService: Send + Sync {
    fn record_scan(
        &self,
        entry: HistoryEntry,
    ) -> impl Future<Output = Result<ScanHistory, CoreError>> + Send;

    fn get_history(&self) -> impl Future<Output = Result<ScanHistory, CoreError>> + Send;
}
