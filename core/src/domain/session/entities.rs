use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    chat::entities::ChatMessage,
    common::generate_timestamp,
    image::entities::ImagePayload,
    ingredient::entities::Ingredient,
    risk::entities::RiskResult,
};

/// Progress marker shown to the user: image picked, scanning, done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScanStep {
    #[default]
    AwaitingImage,
    ImageSelected,
    Scanning,
    ResultsReady,
}

impl ScanStep {
    pub fn index(&self) -> u8 {
        match self {
            ScanStep::AwaitingImage => 0,
            ScanStep::ImageSelected => 1,
            ScanStep::Scanning => 2,
            ScanStep::ResultsReady => 3,
        }
    }
}

/// Everything one user works on between two scans. Replaces page-level
/// globals: every service entry point receives the session id and reads or
/// writes this record explicitly.
#[derive(Debug, Clone)]
pub struct ScanSession {
    pub id: Uuid,
    pub image: Option<ImagePayload>,
    pub raw_text: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub results: Vec<RiskResult>,
    pub transcript: Vec<ChatMessage>,
    pub step: ScanStep,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScanSession {
    pub fn new() -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            image: None,
            raw_text: None,
            ingredients: Vec::new(),
            results: Vec::new(),
            transcript: Vec::new(),
            step: ScanStep::AwaitingImage,
            created_at: now,
            updated_at: now,
        }
    }

    /// A new image replaces the previous one; earlier results stay visible
    /// until the next scan overwrites them.
    pub fn attach_image(&mut self, image: ImagePayload) {
        self.image = Some(image);
        self.step = ScanStep::ImageSelected;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub step: ScanStep,
    pub step_index: u8,
    pub has_image: bool,
    pub image_data_url: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub ingredients: Vec<Ingredient>,
    pub results: Vec<RiskResult>,
    pub transcript: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ScanSession> for SessionSnapshot {
    fn from(session: &ScanSession) -> Self {
        Self {
            id: session.id,
            step: session.step,
            step_index: session.step.index(),
            has_image: session.image.is_some(),
            image_data_url: session.image.as_ref().map(|image| image.data_url.clone()),
            ingredients: session.ingredients.clone(),
            results: session.results.clone(),
            transcript: session.transcript.clone(),
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}
