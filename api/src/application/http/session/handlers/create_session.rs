use axum::extract::State;
use labelguard_core::domain::session::{entities::SessionSnapshot, ports::SessionService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    post,
    path = "",
    tag = "session",
    summary = "Start a scan session",
    description = "Creates an empty session waiting for an image",
    responses(
        (status = 201, body = SessionSnapshot, description = "Session created")
    )
)]
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Response<SessionSnapshot>, ApiError> {
    let session = state
        .service
        .create_session()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(session))
}
