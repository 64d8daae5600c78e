use futures::future::join_all;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    chat::ports::LLMClient,
    common::{entities::app_errors::CoreError, services::Service},
    history::ports::HistoryRepository,
    ingredient::entities::Ingredient,
    ocr::ports::{LocalOcrEngine, RemoteOcrProvider},
    profile::ports::ProfileRepository,
    risk::{
        entities::{RiskResult, RiskTier},
        policies::classify_product,
        ports::{NutritionLookup, RiskService},
        value_objects::FilterResultsInput,
    },
    session::ports::SessionStore,
};

/// Looks up every ingredient concurrently and waits for all of them. A failed
/// lookup degrades that ingredient to the default tier instead of failing the
/// batch. Output order matches input order.
#[instrument(skip_all, fields(ingredients = ingredients.len()))]
pub async fn classify_ingredients<N>(lookup: &N, ingredients: &[Ingredient]) -> Vec<RiskResult>
where
    N: NutritionLookup,
{
    let lookups = ingredients.iter().map(|ingredient| async move {
        let tier = match lookup.lookup(ingredient).await {
            Ok(product) => classify_product(product.as_ref()),
            Err(e) => {
                tracing::error!(ingredient = %ingredient, "Nutrition lookup failed: {}", e);
                RiskTier::default()
            }
        };
        RiskResult::new(ingredient.clone(), tier)
    });

    join_all(lookups).await
}

/// Case-insensitive substring search combined with a tier filter. Only the
/// ingredient name is searched; card notes are not.
pub fn filter_results(results: &[RiskResult], input: &FilterResultsInput) -> Vec<RiskResult> {
    let needle = input
        .search
        .as_deref()
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_default();

    results
        .iter()
        .filter(|result| {
            result.ingredient.as_str().to_lowercase().contains(&needle)
                && input.risk.matches(result.tier)
        })
        .cloned()
        .collect()
}

impl<O, L, N, LLM, H, P, S> RiskService for Service<O, L, N, LLM, H, P, S>
where
    O: RemoteOcrProvider,
    L: LocalOcrEngine,
    N: NutritionLookup,
    LLM: LLMClient,
    H: HistoryRepository,
    P: ProfileRepository,
    S: SessionStore,
{
    async fn classify(&self, ingredients: Vec<Ingredient>) -> Vec<RiskResult> {
        classify_ingredients(&self.nutrition_lookup, &ingredients).await
    }

    async fn filter_session_results(
        &self,
        session_id: Uuid,
        input: FilterResultsInput,
    ) -> Result<Vec<RiskResult>, CoreError> {
        let session = self
            .session_store
            .get(session_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        Ok(filter_results(&session.results, &input))
    }
}
