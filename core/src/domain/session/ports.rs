use std::future::Future;

use bytes::Bytes;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::entities::ImageSource,
    session::entities::{ScanSession, SessionSnapshot},
};

/// Holds live sessions. Implementations must not keep a lock across the
/// returned futures so a slow scan never blocks other sessions.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    fn insert(&self, session: ScanSession) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get(&self, id: Uuid) -> impl Future<Output = Result<Option<ScanSession>, CoreError>> + Send;

    /// Replaces the stored session with the same id. Last write wins.
    fn update(&self, session: ScanSession) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn remove(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[derive(Debug, Clone)]
pub struct AttachImageInput {
    pub session_id: Uuid,
    pub bytes: Bytes,
    pub mime_type: Option<String>,
    pub source: ImageSource,
}

/// Service trait for session lifecycle
#[cfg_attr(test, mockall::automock)]
pub trait SessionService: Send + Sync {
    fn create_session(&self) -> impl Future<Output = Result<SessionSnapshot, CoreError>> + Send;

    fn get_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<SessionSnapshot, CoreError>> + Send;

    fn attach_image(
        &self,
        input: AttachImageInput,
    ) -> impl Future<Output = Result<SessionSnapshot, CoreError>> + Send;

    /// Drops the session and its image. `NotFound` if it is already gone.
    fn close_session(&self, session_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
