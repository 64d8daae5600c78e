use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum number of scans kept.
pub const HISTORY_CAPACITY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    /// Data URL of the scanned image.
    pub image: String,
    pub summary: String,
    pub date: String,
}

impl HistoryEntry {
    pub fn new(image: String, summary: String, date: String) -> Self {
        Self {
            image,
            summary,
            date,
        }
    }
}

/// Most-recent-first list capped at [`HISTORY_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct ScanHistory(Vec<HistoryEntry>);

impl ScanHistory {
    /// Loaded lists are re-capped in case the stored file was edited by hand.
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_CAPACITY);
        Self(entries)
    }

    /// Prepends and evicts the oldest entries beyond capacity.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.0.insert(0, entry);
        self.0.truncate(HISTORY_CAPACITY);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.0
    }

    pub fn into_entries(self) -> Vec<HistoryEntry> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
