//! Contact message domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::contact::{ContactMessageDto, SubmitContactDto};

#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn from_entity(entity: entity::contact_message::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            subject: entity.subject,
            message: entity.message,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ContactMessageDto {
        ContactMessageDto {
            id: self.id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            created_at: self.created_at,
        }
    }
}

/// Parameters for storing a contact form submission.
#[derive(Debug, Clone)]
pub struct NewContactMessageParams {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl NewContactMessageParams {
    pub fn from_dto(dto: SubmitContactDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            subject: dto.subject,
            message: dto.message,
        }
    }
}
