use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ProfileDto {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub onboarded: bool,
    pub updated_at: DateTime<Utc>,
}

/// Request body for completing onboarding or editing the profile afterwards.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UpsertProfileDto {
    pub display_name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}
