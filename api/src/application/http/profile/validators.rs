use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileValidator {
    #[serde(default)]
    #[validate(length(max = 64, message = "display_name is too long"))]
    pub display_name: Option<String>,

    #[serde(default)]
    #[validate(length(max = 256, message = "health_profile is too long"))]
    pub health_profile: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2048, message = "avatar_url is too long"))]
    pub avatar_url: Option<String>,
}
