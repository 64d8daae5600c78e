use crate::{
    domain::common::{LabelGuardConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        history::FileHistoryRepository,
        llm::GeminiLLMClient,
        nutrition::OpenFoodFactsClient,
        ocr::{OcrSpaceClient, TesseractEngine},
        profile::FileProfileRepository,
        session::InMemorySessionStore,
        storage::LocalStore,
    },
};

pub type LabelGuardService = Service<
    OcrSpaceClient,
    TesseractEngine,
    OpenFoodFactsClient,
    GeminiLLMClient,
    FileHistoryRepository,
    FileProfileRepository,
    InMemorySessionStore,
>;

/// Wires every production adapter from configuration.
pub async fn create_service(config: LabelGuardConfig) -> Result<LabelGuardService, CoreError> {
    let store = LocalStore::open(config.storage.data_dir.clone()).await?;

    if config.ocr.api_key.is_empty() {
        tracing::warn!("No OCR API key configured, scans will rely on the local engine");
    }
    if config.llm.gemini_api_key.is_empty() {
        tracing::warn!("No Gemini API key configured, chat replies will report upstream errors");
    }

    Ok(Service::new(
        OcrSpaceClient::new(config.ocr.api_key, config.ocr.endpoint),
        TesseractEngine::new(config.fallback_ocr.tesseract_path),
        OpenFoodFactsClient::new(config.nutrition.base_url),
        GeminiLLMClient::new(
            config.llm.gemini_api_key,
            config.llm.gemini_model,
            config.llm.base_url,
        ),
        FileHistoryRepository::new(store.clone()),
        FileProfileRepository::new(store),
        InMemorySessionStore::with_capacity(config.session.max_sessions),
    ))
}
