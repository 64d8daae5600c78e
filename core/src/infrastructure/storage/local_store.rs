use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use tracing::instrument;

use crate::domain::common::{entities::app_errors::CoreError, generate_uuid_v7};

pub const SCAN_HISTORY_KEY: &str = "scan_history";
pub const USER_NAME_KEY: &str = "user_name";
pub const USER_HEALTH_KEY: &str = "user_health";
pub const USER_PICTURE_KEY: &str = "user_picture";

/// Durable key/value storage: one JSON document per key in a directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await.map_err(|e| {
            tracing::error!(path = %root.display(), "Failed to create data directory: {}", e);
            CoreError::StorageError(format!("Failed to create data directory: {}", e))
        })?;

        tracing::info!(path = %root.display(), "Local store ready");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    #[instrument(skip(self))]
    pub async fn get<T>(&self, key: &str) -> Result<Option<T>, CoreError>
    where
        T: DeserializeOwned,
    {
        let bytes = match tokio::fs::read(self.path(key)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CoreError::StorageError(format!(
                    "Failed to read {}: {}",
                    key, e
                )));
            }
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| CoreError::StorageError(format!("Corrupt value for {}: {}", key, e)))
    }

    /// Writes to a temporary file first and renames it over the old value.
    #[instrument(skip(self, value))]
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CoreError>
    where
        T: Serialize + Sync + ?Sized,
    {
        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|e| CoreError::StorageError(format!("Failed to encode {}: {}", key, e)))?;

        let target = self.path(key);
        let staging = self.root.join(format!(".{key}.{}.tmp", generate_uuid_v7()));

        tokio::fs::write(&staging, &bytes)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to write {}: {}", key, e)))?;

        tokio::fs::rename(&staging, &target).await.map_err(|e| {
            CoreError::StorageError(format!("Failed to replace {}: {}", key, e))
        })
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, key: &str) -> Result<(), CoreError> {
        match tokio::fs::remove_file(self.path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::StorageError(format!(
                "Failed to remove {}: {}",
                key, e
            ))),
        }
    }
}
