use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateTeamRequestDto {
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct TeamRequestDto {
    pub id: i32,
    pub user_id: String,
    pub message: String,
    pub status: String,
    /// Discord username from the requester's link, for admin display.
    pub discord_username: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedTeamRequestsDto {
    pub requests: Vec<TeamRequestDto>,
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
}
