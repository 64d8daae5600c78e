use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::{entities::ScanSession, ports::SessionStore},
};

pub const DEFAULT_MAX_SESSIONS: usize = 64;

/// Process-local session table. Sessions are cloned in and out, so the lock
/// is only held for the map operation itself.
///
/// Every session may hold a full image, so the table is capped: inserting
/// into a full table evicts the session that was updated least recently.
#[derive(Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, ScanSession>>>,
    max_sessions: usize,
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SESSIONS)
    }
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
        }
    }
}

fn evict_stalest(sessions: &mut HashMap<Uuid, ScanSession>) {
    let stalest = sessions
        .values()
        .min_by_key(|session| session.updated_at)
        .map(|session| session.id);

    if let Some(id) = stalest {
        sessions.remove(&id);
        tracing::info!(session_id = %id, "Session evicted, table full");
    }
}

impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: ScanSession) -> Result<(), CoreError> {
        let mut w = self.sessions.write().await;
        while !w.contains_key(&session.id) && w.len() >= self.max_sessions {
            evict_stalest(&mut w);
        }
        w.insert(session.id, session);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<ScanSession>, CoreError> {
        let r = self.sessions.read().await;
        Ok(r.get(&id).cloned())
    }

    async fn update(&self, session: ScanSession) -> Result<(), CoreError> {
        let mut w = self.sessions.write().await;
        match w.get_mut(&session.id) {
            Some(slot) => {
                *slot = session;
                Ok(())
            }
            None => Err(CoreError::NotFound),
        }
    }

    async fn remove(&self, id: Uuid) -> Result<(), CoreError> {
        let mut w = self.sessions.write().await;
        w.remove(&id);
        Ok(())
    }

    async fn clear(&self) -> Result<(), CoreError> {
        let mut w = self.sessions.write().await;
        w.clear();
        Ok(())
    }
}
