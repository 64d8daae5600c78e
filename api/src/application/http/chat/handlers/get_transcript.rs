use axum::extract::{Path, State};
use labelguard_core::domain::chat::{entities::ChatMessage, ports::ChatService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TranscriptResponse {
    pub data: Vec<ChatMessage>,
}

#[utoipa::path(
    get,
    path = "/{session_id}/chat",
    tag = "chat",
    summary = "Get the chat transcript",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = TranscriptResponse),
        (status = 404, description = "Session not found")
    )
)]
pub async fn get_transcript(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<TranscriptResponse>, ApiError> {
    let data = state
        .service
        .transcript(session_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(TranscriptResponse { data }))
}
