use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{common::entities::app_errors::CoreError, risk::entities::RiskTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskFilter {
    #[default]
    All,
    Good,
    Moderate,
    Bad,
}

impl RiskFilter {
    pub fn matches(&self, tier: RiskTier) -> bool {
        match self {
            RiskFilter::All => true,
            RiskFilter::Good => tier == RiskTier::Good,
            RiskFilter::Moderate => tier == RiskTier::Moderate,
            RiskFilter::Bad => tier == RiskTier::Bad,
        }
    }
}

impl std::str::FromStr for RiskFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Ok(RiskFilter::All),
            "good" => Ok(RiskFilter::Good),
            "moderate" => Ok(RiskFilter::Moderate),
            "bad" => Ok(RiskFilter::Bad),
            _ => Err(CoreError::Invalid),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterResultsInput {
    pub search: Option<String>,
    pub risk: RiskFilter,
}
