use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    chat::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    history::ports::HistoryRepository,
    image::entities::ImagePayload,
    ocr::ports::{LocalOcrEngine, RemoteOcrProvider},
    profile::ports::ProfileRepository,
    risk::ports::NutritionLookup,
    session::{
        entities::{ScanSession, SessionSnapshot},
        ports::{AttachImageInput, SessionService, SessionStore},
    },
};

/// Loads a session or fails with `NotFound`.
pub async fn load_session<S: SessionStore>(
    store: &S,
    session_id: Uuid,
) -> Result<ScanSession, CoreError> {
    store.get(session_id).await?.ok_or(CoreError::NotFound)
}

impl<O, L, N, LLM, H, P, S> SessionService for Service<O, L, N, LLM, H, P, S>
where
    O: RemoteOcrProvider,
    L: LocalOcrEngine,
    N: NutritionLookup,
    LLM: LLMClient,
    H: HistoryRepository,
    P: ProfileRepository,
    S: SessionStore,
{
    #[instrument(skip(self))]
    async fn create_session(&self) -> Result<SessionSnapshot, CoreError> {
        let session = ScanSession::new();
        let snapshot = SessionSnapshot::from(&session);
        self.session_store.insert(session).await?;

        tracing::info!(session_id = %snapshot.id, "Session created");
        Ok(snapshot)
    }

    async fn get_session(&self, session_id: Uuid) -> Result<SessionSnapshot, CoreError> {
        let session = load_session(&self.session_store, session_id).await?;
        Ok(SessionSnapshot::from(&session))
    }

    #[instrument(skip(self, input), fields(session_id = %input.session_id, source = ?input.source))]
    async fn attach_image(&self, input: AttachImageInput) -> Result<SessionSnapshot, CoreError> {
        let mut session = load_session(&self.session_store, input.session_id).await?;

        let image = ImagePayload::new(input.bytes, input.mime_type.as_deref(), input.source)?;
        tracing::debug!(mime_type = %image.mime_type, bytes = image.bytes.len(), "Image attached");

        session.attach_image(image);
        let snapshot = SessionSnapshot::from(&session);
        self.session_store.update(session).await?;

        Ok(snapshot)
    }

    #[instrument(skip(self))]
    async fn close_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        load_session(&self.session_store, session_id).await?;
        self.session_store.remove(session_id).await?;

        tracing::info!(%session_id, "Session closed");
        Ok(())
    }
}
