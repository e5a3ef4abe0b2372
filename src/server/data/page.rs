//! Page content repository for database operations.
//!
//! This module provides the `PageContentRepository` for managing per-page JSON
//! content blobs. Each page has up to two rows, keyed by (page, revision):
//! the published `default` row and the admin's `draft` row. Rows are created
//! on first save and only ever upserted afterwards.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};

use crate::server::{
    error::AppError,
    model::page::{PageContent, PageKind, Revision},
};

/// Repository providing database operations for page content blobs.
pub struct PageContentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageContentRepository<'a> {
    /// Creates a new PageContentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the content blob for a page revision.
    ///
    /// # Arguments
    /// - `page` - The page key
    /// - `revision` - The revision row to read (`default` or `draft`)
    ///
    /// # Returns
    /// - `Ok(Some(PageContent))` - The stored blob
    /// - `Ok(None)` - The page revision was never saved
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find(
        &self,
        page: PageKind,
        revision: Revision,
    ) -> Result<Option<PageContent>, AppError> {
        let entity = entity::prelude::PageContent::find_by_id((
            page.as_str().to_string(),
            revision.as_str().to_string(),
        ))
        .one(self.db)
        .await?;

        entity.map(PageContent::from_entity).transpose()
    }

    /// Upserts the content blob for a page revision.
    ///
    /// Inserts the row on first save, otherwise replaces the body and bumps
    /// `updated_at`. The blob itself is opaque to the data layer; body
    /// validation happens in the service layer.
    ///
    /// # Arguments
    /// - `page` - The page key
    /// - `revision` - The revision row to write
    /// - `body` - The full JSON document to store
    ///
    /// # Returns
    /// - `Ok(PageContent)` - The stored blob after the write
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        page: PageKind,
        revision: Revision,
        body: serde_json::Value,
    ) -> Result<PageContent, AppError> {
        let entity = entity::prelude::PageContent::insert(entity::page_content::ActiveModel {
            page: ActiveValue::Set(page.as_str().to_string()),
            revision: ActiveValue::Set(revision.as_str().to_string()),
            body: ActiveValue::Set(body),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::page_content::Column::Page,
                entity::page_content::Column::Revision,
            ])
            .update_columns([
                entity::page_content::Column::Body,
                entity::page_content::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        PageContent::from_entity(entity)
    }
}
