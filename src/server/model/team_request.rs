//! Team request domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::team_request::TeamRequestDto;

/// Lifecycle state of a team request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl TeamRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// A team request with the linked Discord username (when present) for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRequest {
    pub id: i32,
    pub user_id: String,
    pub message: String,
    pub status: String,
    pub discord_username: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TeamRequest {
    /// Converts an entity model plus its optionally joined Discord link.
    pub fn from_entity(
        entity: entity::team_request::Model,
        link: Option<entity::discord_link::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            message: entity.message,
            status: entity.status,
            discord_username: link.map(|l| l.username),
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TeamRequestDto {
        TeamRequestDto {
            id: self.id,
            user_id: self.user_id,
            message: self.message,
            status: self.status,
            discord_username: self.discord_username,
            created_at: self.created_at,
        }
    }
}
