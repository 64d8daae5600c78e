use axum::extract::{Path, State};
use labelguard_core::domain::session::{entities::SessionSnapshot, ports::SessionService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{session_id}",
    tag = "session",
    summary = "Get a scan session",
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    responses(
        (status = 200, body = SessionSnapshot),
        (status = 404, description = "Session not found")
    )
)]
pub async fn get_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<SessionSnapshot>, ApiError> {
    state
        .service
        .get_session(session_id)
        .await
        .map(Response::OK)
        .map_err(ApiError::from)
}
