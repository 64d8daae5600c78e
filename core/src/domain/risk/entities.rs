use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ingredient::entities::Ingredient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Good,
    #[default]
    Moderate,
    Bad,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Good => "good",
            RiskTier::Moderate => "moderate",
            RiskTier::Bad => "bad",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RiskResult {
    #[schema(value_type = String)]
    pub ingredient: Ingredient,
    pub tier: RiskTier,
}

impl RiskResult {
    pub fn new(ingredient: Ingredient, tier: RiskTier) -> Self {
        Self { ingredient, tier }
    }
}

/// Fields of the first product returned by the nutrition database.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductFacts {
    pub nutriscore_grade: Option<String>,
    pub nova_group: Option<u8>,
    pub additives_tags: Vec<String>,
}
