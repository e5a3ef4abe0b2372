//! Contact form business logic.
//!
//! Validates public contact submissions before they reach the database and
//! serves the admin inbox. Abuse deterrence (per-IP rate limiting) is applied
//! at the router layer, not here.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::contact::{ContactMessageRepository, PaginatedContactMessages},
    error::AppError,
    model::contact::{ContactMessage, NewContactMessageParams},
};

const MAX_MESSAGE_LEN: usize = 5000;
const MAX_FIELD_LEN: usize = 200;

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a contact form submission.
    ///
    /// # Returns
    /// - `Ok(ContactMessage)` - The stored message
    /// - `Err(AppError::BadRequest)` - Validation failure
    pub async fn submit(
        &self,
        mut params: NewContactMessageParams,
    ) -> Result<ContactMessage, AppError> {
        params.name = params.name.trim().to_string();
        params.email = params.email.trim().to_string();
        params.message = params.message.trim().to_string();

        if params.name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }
        if params.name.len() > MAX_FIELD_LEN {
            return Err(AppError::BadRequest("Name is too long".to_string()));
        }
        if !looks_like_email(&params.email) {
            return Err(AppError::BadRequest(
                "A valid email address is required".to_string(),
            ));
        }
        if params.message.is_empty() {
            return Err(AppError::BadRequest("Message is required".to_string()));
        }
        if params.message.len() > MAX_MESSAGE_LEN {
            return Err(AppError::BadRequest(format!(
                "Message must be at most {} characters",
                MAX_MESSAGE_LEN
            )));
        }

        let repo = ContactMessageRepository::new(self.db);
        let message = repo.create(params).await?;

        tracing::info!("Stored contact message {} from {}", message.id, message.email);

        Ok(message)
    }

    /// Gets a page of contact messages for the admin inbox.
    pub async fn list(&self, page: u64, entries: u64) -> Result<PaginatedContactMessages, AppError> {
        let repo = ContactMessageRepository::new(self.db);
        let messages = repo.get_paginated(page, entries).await?;

        Ok(messages)
    }
}

/// Minimal shape check, not RFC validation. The stored address is only ever
/// displayed to the admin.
fn looks_like_email(value: &str) -> bool {
    if value.is_empty() || value.len() > MAX_FIELD_LEN {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_utils::builder::TestBuilder;

    fn valid_params() -> NewContactMessageParams {
        NewContactMessageParams {
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            subject: None,
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("a@b.com"));
        assert!(looks_like_email("first.last@sub.domain.org"));
        assert!(!looks_like_email(""));
        assert!(!looks_like_email("no-at-sign"));
        assert!(!looks_like_email("@missing-local.com"));
        assert!(!looks_like_email("user@nodot"));
        assert!(!looks_like_email("user@.com"));
    }

    /// Tests that a valid submission is stored.
    ///
    /// Expected: Ok(ContactMessage)
    #[tokio::test]
    async fn stores_valid_submission() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::ContactMessage)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ContactService::new(db);
        let message = service.submit(valid_params()).await?;

        assert_eq!(message.name, "Visitor");
        Ok(())
    }

    /// Tests rejection of an invalid email.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn rejects_bad_email() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::ContactMessage)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ContactService::new(db);
        let result = service
            .submit(NewContactMessageParams {
                email: "not-an-email".to_string(),
                ..valid_params()
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests rejection of an over-long message.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn rejects_oversized_message() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::ContactMessage)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ContactService::new(db);
        let result = service
            .submit(NewContactMessageParams {
                message: "x".repeat(MAX_MESSAGE_LEN + 1),
                ..valid_params()
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests rejection of a whitespace-only message.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn rejects_blank_message() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::ContactMessage)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ContactService::new(db);
        let result = service
            .submit(NewContactMessageParams {
                message: "   \n  ".to_string(),
                ..valid_params()
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
