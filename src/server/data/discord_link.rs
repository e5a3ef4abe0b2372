//! Discord link repository for database operations.
//!
//! This module provides the `DiscordLinkRepository` for managing Discord
//! account links and their denormalized membership snapshots. A user has at
//! most one link; re-linking or re-verifying replaces the snapshot in place
//! while preserving the original `linked_at` timestamp.
//!
//! All methods return domain models at the repository boundary, converting
//! SeaORM entity models internally to prevent database-specific structures
//! from leaking into service and controller layers.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::server::{
    error::AppError,
    model::discord::{DiscordLink, UpsertDiscordLinkParams},
};

/// Repository for Discord link database operations.
pub struct DiscordLinkRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> DiscordLinkRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a Discord link by the auth provider user id.
    ///
    /// # Arguments
    /// - `user_id` - Auth provider user id
    ///
    /// # Returns
    /// - `Ok(Some(DiscordLink))` - Link found with its membership snapshot
    /// - `Ok(None)` - The user has not linked a Discord account
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<DiscordLink>, AppError> {
        let entity = entity::prelude::DiscordLink::find()
            .filter(entity::discord_link::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        entity.map(DiscordLink::from_entity).transpose()
    }

    /// Upserts a Discord link with a fresh membership snapshot.
    ///
    /// Inserts a new link on first connect, or replaces the Discord identity
    /// and snapshot for an existing one. `verified_at` is always set to now;
    /// `linked_at` keeps its original value on update.
    ///
    /// # Arguments
    /// - `params` - Link identity and resolved membership snapshot
    ///
    /// # Returns
    /// - `Ok(DiscordLink)` - The created or updated link
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert(&self, params: UpsertDiscordLinkParams) -> Result<DiscordLink, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::DiscordLink::insert(entity::discord_link::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            discord_id: ActiveValue::Set(params.discord_id.to_string()),
            username: ActiveValue::Set(params.username),
            in_guild: ActiveValue::Set(params.membership.in_guild),
            has_required_role: ActiveValue::Set(params.membership.has_required_role),
            is_owner: ActiveValue::Set(params.membership.is_owner),
            linked_at: ActiveValue::Set(now),
            verified_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::discord_link::Column::UserId)
                .update_columns([
                    entity::discord_link::Column::DiscordId,
                    entity::discord_link::Column::Username,
                    entity::discord_link::Column::InGuild,
                    entity::discord_link::Column::HasRequiredRole,
                    entity::discord_link::Column::IsOwner,
                    entity::discord_link::Column::VerifiedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        DiscordLink::from_entity(entity)
    }
}
