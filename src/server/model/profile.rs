//! Profile domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::profile::{ProfileDto, UpsertProfileDto};

/// An application user's profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub onboarded: bool,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn from_entity(entity: entity::profile::Model) -> Self {
        Self {
            user_id: entity.user_id,
            email: entity.email,
            display_name: entity.display_name,
            bio: entity.bio,
            avatar_url: entity.avatar_url,
            onboarded: entity.onboarded,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            user_id: self.user_id,
            email: self.email,
            display_name: self.display_name,
            bio: self.bio,
            avatar_url: self.avatar_url,
            onboarded: self.onboarded,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for upserting a profile during onboarding or later edits.
#[derive(Debug, Clone)]
pub struct UpsertProfileParams {
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl UpsertProfileParams {
    pub fn from_dto(dto: UpsertProfileDto) -> Self {
        Self {
            display_name: dto.display_name,
            bio: dto.bio,
            avatar_url: dto.avatar_url,
        }
    }
}
