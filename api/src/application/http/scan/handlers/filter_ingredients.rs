use axum::extract::{Path, Query, State};
use labelguard_core::domain::{
    risk::{
        ports::RiskService,
        value_objects::{FilterResultsInput, RiskFilter},
    },
    scan::entities::IngredientCard,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    scan::validators::FilterIngredientsQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct FilterIngredientsResponse {
    pub data: Vec<IngredientCard>,
}

#[utoipa::path(
    get,
    path = "/{session_id}/ingredients",
    tag = "scan",
    summary = "Filter scanned ingredients",
    description = "Keeps results whose ingredient contains `search` (case-insensitive) and whose tier matches `risk`",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
        FilterIngredientsQuery,
    ),
    responses(
        (status = 200, body = FilterIngredientsResponse),
        (status = 400, description = "Unknown risk filter"),
        (status = 404, description = "Session not found")
    )
)]
pub async fn filter_ingredients(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    Query(query): Query<FilterIngredientsQuery>,
) -> Result<Response<FilterIngredientsResponse>, ApiError> {
    let risk: RiskFilter = query
        .risk
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|_| ApiError::BadRequest("risk must be one of all, good, moderate, bad".into()))?;

    let results = state
        .service
        .filter_session_results(
            session_id,
            FilterResultsInput {
                search: query.search,
                risk,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FilterIngredientsResponse {
        data: results.iter().map(IngredientCard::from).collect(),
    }))
}
