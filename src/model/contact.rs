use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for the public contact form.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct SubmitContactDto {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ContactMessageDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// One page of contact messages for the admin inbox, newest first.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedContactMessagesDto {
    pub messages: Vec<ContactMessageDto>,
    pub total_items: u64,
    pub total_pages: u64,
    pub page: u64,
}
