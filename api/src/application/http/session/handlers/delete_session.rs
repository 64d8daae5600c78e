use axum::extract::{Path, State};
use labelguard_core::domain::session::ports::SessionService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteSessionResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{session_id}",
    tag = "session",
    summary = "Close a scan session",
    description = "Frees the session image and transcript. History is kept.",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = DeleteSessionResponse),
        (status = 404, description = "Session not found")
    )
)]
pub async fn delete_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteSessionResponse>, ApiError> {
    state
        .service
        .close_session(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteSessionResponse {
        message: "Session closed".to_string(),
    }))
}
