use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::entities::Ingredient,
    risk::{
        entities::{ProductFacts, RiskResult},
        value_objects::FilterResultsInput,
    },
};

/// External food database queried once per ingredient.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionLookup: Send + Sync {
    /// Returns the first matching product, or `None` when the database knows
    /// no product for this ingredient.
    fn lookup(
        &self,
        ingredient: &Ingredient,
    ) -> impl Future<Output = Result<Option<ProductFacts>, CoreError>> + Send;
}

/// Service trait for ingredient risk classification
#[cfg_attr(test, mockall::automock)]
pub trait RiskService: Send + Sync {
    fn classify(
        &self,
        ingredients: Vec<Ingredient>,
    ) -> impl Future<Output = Vec<RiskResult>> + Send;

    fn filter_session_results(
        &self,
        session_id: Uuid,
        input: FilterResultsInput,
    ) -> impl Future<Output = Result<Vec<RiskResult>, CoreError>> + Send;
}
