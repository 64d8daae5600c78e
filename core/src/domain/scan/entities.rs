use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    history::entities::HistoryEntry,
    ingredient::{
        entities::Ingredient,
        notes::{DEFAULT_NOTE, ingredient_note},
    },
    ocr::entities::OcrProvider,
    risk::entities::{RiskResult, RiskTier},
};

/// Risk result enriched with the built-in note shown on the ingredient card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientCard {
    pub ingredient: String,
    pub tier: RiskTier,
    pub note: String,
}

impl From<&RiskResult> for IngredientCard {
    fn from(result: &RiskResult) -> Self {
        Self {
            ingredient: result.ingredient.to_string(),
            tier: result.tier,
            note: ingredient_note(result.ingredient.as_str())
                .unwrap_or(DEFAULT_NOTE)
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScanReport {
    pub session_id: Uuid,
    pub banner: String,
    pub provider: OcrProvider,
    /// OCR text with the ingredient label removed.
    pub extracted_text: String,
    #[schema(value_type = Vec<String>)]
    pub ingredients: Vec<Ingredient>,
    pub cards: Vec<IngredientCard>,
    pub history: Vec<HistoryEntry>,
}
