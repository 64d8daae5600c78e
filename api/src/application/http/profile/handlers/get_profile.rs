use axum::extract::State;
use labelguard_core::domain::profile::{entities::UserProfile, ports::ProfileService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub greeting: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            greeting: profile.greeting(),
            profile,
        }
    }
}

#[utoipa::path(
    get,
    path = "/profile",
    tag = "profile",
    summary = "Get the user profile",
    description = "Missing values fall back to `User` and `general health`",
    responses(
        (status = 200, body = ProfileResponse)
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
) -> Result<Response<ProfileResponse>, ApiError> {
    let profile = state.service.get_profile().await.map_err(ApiError::from)?;

    Ok(Response::OK(profile.into()))
}
