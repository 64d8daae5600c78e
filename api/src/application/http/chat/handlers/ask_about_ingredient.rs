use axum::extract::{Path, State};
use labelguard_core::domain::chat::{entities::ChatExchange, ports::ChatService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "/{session_id}/ingredients/{index}/chat",
    tag = "chat",
    summary = "Ask about one scanned ingredient",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
        ("index" = usize, Path, description = "Position of the ingredient in the scan results"),
    ),
    responses(
        (status = 200, body = ChatExchange),
        (status = 404, description = "Session or ingredient not found")
    )
)]
pub async fn ask_about_ingredient(
    Path((session_id, index)): Path<(Uuid, usize)>,
    State(state): State<AppState>,
) -> Result<Response<ChatExchange>, ApiError> {
    state
        .service
        .ask_about_ingredient(session_id, index)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
