use axum::extract::State;
use labelguard_core::domain::history::{entities::HistoryEntry, ports::HistoryService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HistoryResponse {
    /// Newest first, at most five entries.
    pub data: Vec<HistoryEntry>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "history",
    summary = "Recent scans",
    responses(
        (status = 200, body = HistoryResponse)
    )
)]
pub async fn get_history(
    State(state): State<AppState>,
) -> Result<Response<HistoryResponse>, ApiError> {
    let history = state.service.get_history().await.map_err(ApiError::from)?;

    Ok(Response::OK(HistoryResponse {
        data: history.into_entries(),
    }))
}
