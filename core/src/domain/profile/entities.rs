use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_DISPLAY_NAME: &str = "User";
pub const DEFAULT_HEALTH_PROFILE: &str = "general health";

/// Raw values as they sit in durable storage, one key per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileRecord {
    pub display_name: Option<String>,
    pub health_profile: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub display_name: String,
    pub health_profile: String,
    pub avatar_url: Option<String>,
}

impl From<ProfileRecord> for UserProfile {
    fn from(record: ProfileRecord) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Self {
            display_name: non_empty(record.display_name)
                .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()),
            health_profile: non_empty(record.health_profile)
                .unwrap_or_else(|| DEFAULT_HEALTH_PROFILE.to_string()),
            avatar_url: non_empty(record.avatar_url),
        }
    }
}

impl UserProfile {
    pub fn greeting(&self) -> String {
        format!("Hello, {}!", self.display_name)
    }

    /// Line shown while a scan is running.
    pub fn scan_banner(&self) -> String {
        format!(
            "{}, analyzing ingredients for your health condition: {}",
            self.display_name, self.health_profile
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileInput {
    pub display_name: Option<String>,
    pub health_profile: Option<String>,
    pub avatar_url: Option<String>,
}
