use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for the Discord connect endpoint: the authorize URL the client
/// should redirect the browser to.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct DiscordConnectDto {
    pub url: String,
}

/// The caller's Discord link snapshot.
///
/// When `linked` is false every other field is absent or false.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct DiscordStatusDto {
    pub linked: bool,
    pub discord_id: Option<String>,
    pub username: Option<String>,
    pub in_guild: bool,
    pub has_required_role: bool,
    pub is_owner: bool,
    pub verified_at: Option<DateTime<Utc>>,
}

impl DiscordStatusDto {
    /// Status shape for a user with no Discord link.
    pub fn unlinked() -> Self {
        Self {
            linked: false,
            discord_id: None,
            username: None,
            in_guild: false,
            has_required_role: false,
            is_owner: false,
            verified_at: None,
        }
    }
}
