use std::path::PathBuf;

use chrono::{DateTime, Local, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

/// Language code sent to both OCR providers.
pub const OCR_LANGUAGE: &str = "eng";

#[derive(Clone, Debug)]
pub struct LabelGuardConfig {
    pub ocr: OcrConfig,
    pub fallback_ocr: FallbackOcrConfig,
    pub nutrition: NutritionConfig,
    pub llm: LLMConfig,
    pub storage: StorageConfig,
    pub session: SessionConfig,
}

#[derive(Clone, Debug)]
pub struct OcrConfig {
    pub api_key: String,
    pub endpoint: String,
}

#[derive(Clone, Debug)]
pub struct FallbackOcrConfig {
    pub tesseract_path: String,
}

#[derive(Clone, Debug)]
pub struct NutritionConfig {
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Live sessions kept in memory before the stalest one is evicted.
    pub max_sessions: usize,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Human readable local time used for history entries.
pub fn human_readable_now() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
