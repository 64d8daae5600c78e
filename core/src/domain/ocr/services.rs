use tracing::instrument;

use crate::domain::{
    chat::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    history::ports::HistoryRepository,
    image::entities::ImagePayload,
    ocr::{
        entities::{OcrProgressSink, OcrProvider, ResolvedText},
        ports::{LocalOcrEngine, OcrService, RemoteOcrProvider},
    },
    profile::ports::ProfileRepository,
    risk::ports::NutritionLookup,
    session::ports::SessionStore,
};

/// Tries the remote provider once, then the local engine once. Only a
/// failure of both is reported to the caller.
#[instrument(skip_all, fields(image_bytes = image.bytes.len()))]
pub async fn resolve_text<O, L>(
    primary: &O,
    fallback: &L,
    image: &ImagePayload,
    progress: OcrProgressSink,
) -> Result<ResolvedText, CoreError>
where
    O: RemoteOcrProvider,
    L: LocalOcrEngine,
{
    match primary.recognize(image).await {
        Ok(text) if !text.is_empty() => {
            tracing::info!(chars = text.len(), "Primary OCR returned text");
            return Ok(ResolvedText {
                text,
                provider: OcrProvider::Primary,
            });
        }
        Ok(_) => tracing::warn!("Primary OCR returned no text, using local fallback"),
        Err(e) => tracing::warn!("Primary OCR failed, using local fallback: {}", e),
    }

    match fallback.recognize(image, progress).await {
        Ok(text) => {
            tracing::info!(chars = text.len(), "Fallback OCR returned text");
            Ok(ResolvedText {
                text,
                provider: OcrProvider::Fallback,
            })
        }
        Err(e) => {
            tracing::error!("Fallback OCR also failed: {}", e);
            Err(CoreError::OcrFailed)
        }
    }
}

impl<O, L, N, LLM, H, P, S> OcrService for Service<O, L, N, LLM, H, P, S>
where
    O: RemoteOcrProvider,
    L: LocalOcrEngine,
    N: NutritionLookup,
    LLM: LLMClient,
    H: HistoryRepository,
    P: ProfileRepository,
    S: SessionStore,
{
    async fn resolve_text(
        &self,
        image: ImagePayload,
        progress: OcrProgressSink,
    ) -> Result<ResolvedText, CoreError> {
        resolve_text(&self.ocr_provider, &self.local_ocr, &image, progress).await
    }
}
