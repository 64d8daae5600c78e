use axum::extract::State;
use labelguard_core::domain::profile::{entities::UpdateProfileInput, ports::ProfileService};

use crate::application::http::{
    profile::{handlers::get_profile::ProfileResponse, validators::UpdateProfileValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    put,
    path = "/profile",
    tag = "profile",
    summary = "Update the user profile",
    description = "Only the provided fields change. An empty string removes the stored value.",
    request_body = UpdateProfileValidator,
    responses(
        (status = 200, body = ProfileResponse),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn update_profile(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateProfileValidator>,
) -> Result<Response<ProfileResponse>, ApiError> {
    let profile = state
        .service
        .update_profile(UpdateProfileInput {
            display_name: payload.display_name,
            health_profile: payload.health_profile,
            avatar_url: payload.avatar_url,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(profile.into()))
}
