//! Contact message repository for database operations.
//!
//! This module provides the `ContactMessageRepository` for storing contact
//! form submissions and paging through them in the admin inbox. Messages are
//! append-only; the application never updates or deletes them.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::contact::{ContactMessage, NewContactMessageParams};

/// One page of contact messages plus pagination totals.
pub struct PaginatedContactMessages {
    pub messages: Vec<ContactMessage>,
    pub total_items: u64,
    pub total_pages: u64,
}

/// Repository providing database operations for contact messages.
pub struct ContactMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactMessageRepository<'a> {
    /// Creates a new ContactMessageRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a contact form submission.
    ///
    /// # Arguments
    /// - `params` - Validated contact message fields
    ///
    /// # Returns
    /// - `Ok(ContactMessage)` - The stored message with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: NewContactMessageParams) -> Result<ContactMessage, DbErr> {
        let entity = entity::contact_message::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            subject: ActiveValue::Set(params.subject),
            message: ActiveValue::Set(params.message),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ContactMessage::from_entity(entity))
    }

    /// Gets a page of contact messages, newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-based page number
    /// - `entries` - Page size
    ///
    /// # Returns
    /// - `Ok(PaginatedContactMessages)` - Messages and pagination totals
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedContactMessages, DbErr> {
        let paginator = entity::prelude::ContactMessage::find()
            .order_by_desc(entity::contact_message::Column::CreatedAt)
            .paginate(self.db, entries);

        let totals = paginator.num_items_and_pages().await?;
        let messages = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(ContactMessage::from_entity)
            .collect();

        Ok(PaginatedContactMessages {
            messages,
            total_items: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }
}
