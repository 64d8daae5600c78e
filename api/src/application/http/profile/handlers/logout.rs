use axum::extract::State;
use labelguard_core::domain::profile::ports::ProfileService;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LogoutResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/logout",
    tag = "profile",
    summary = "Forget the user",
    description = "Clears the stored profile and scan history and drops live sessions",
    responses(
        (status = 200, body = LogoutResponse)
    )
)]
pub async fn logout(State(state): State<AppState>) -> Result<Response<LogoutResponse>, ApiError> {
    state.service.logout().await.map_err(ApiError::from)?;
    info!("user logged out, local data cleared");

    Ok(Response::OK(LogoutResponse {
        message: "Logged out".to_string(),
    }))
}
