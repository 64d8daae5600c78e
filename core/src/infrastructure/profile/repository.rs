use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        profile::{entities::ProfileRecord, ports::ProfileRepository},
    },
    infrastructure::storage::local_store::{
        LocalStore, USER_HEALTH_KEY, USER_NAME_KEY, USER_PICTURE_KEY,
    },
};

/// Keeps each profile field under its own durable key.
#[derive(Debug, Clone)]
pub struct FileProfileRepository {
    store: LocalStore,
}

impl FileProfileRepository {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    async fn put(&self, key: &str, value: Option<String>) -> Result<(), CoreError> {
        match value {
            Some(value) => self.store.set(key, &value).await,
            None => self.store.remove(key).await,
        }
    }
}

impl ProfileRepository for FileProfileRepository {
    async fn fetch(&self) -> Result<ProfileRecord, CoreError> {
        Ok(ProfileRecord {
            display_name: self.store.get(USER_NAME_KEY).await?,
            health_profile: self.store.get(USER_HEALTH_KEY).await?,
            avatar_url: self.store.get(USER_PICTURE_KEY).await?,
        })
    }

    async fn store(&self, record: ProfileRecord) -> Result<(), CoreError> {
        self.put(USER_NAME_KEY, record.display_name).await?;
        self.put(USER_HEALTH_KEY, record.health_profile).await?;
        self.put(USER_PICTURE_KEY, record.avatar_url).await
    }

    async fn clear(&self) -> Result<(), CoreError> {
        for key in [USER_NAME_KEY, USER_HEALTH_KEY, USER_PICTURE_KEY] {
            self.store.remove(key).await?;
        }
        Ok(())
    }
}
