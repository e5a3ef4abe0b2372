//! Profile repository for database operations.
//!
//! This module provides the `ProfileRepository` for managing user profile rows.
//! Profiles are keyed by the hosted auth provider's user id and upserted when
//! the user completes onboarding or edits their profile afterwards.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::{
    auth::AuthUser,
    profile::{Profile, UpsertProfileParams},
};

/// Repository providing database operations for user profiles.
pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    /// Creates a new ProfileRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a profile by the auth provider user id.
    ///
    /// # Arguments
    /// - `user_id` - Auth provider user id
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - Profile found
    /// - `Ok(None)` - The user has not completed onboarding
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>, DbErr> {
        let entity = entity::prelude::Profile::find()
            .filter(entity::profile::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Profile::from_entity))
    }

    /// Upserts a profile for the authenticated user.
    ///
    /// Inserts a new profile on onboarding completion or updates the editable
    /// fields for an existing one. The email always tracks the verified email
    /// from the auth provider, and `onboarded` is set on every save.
    ///
    /// # Arguments
    /// - `user` - The verified auth identity (id and email)
    /// - `params` - Profile fields being saved
    ///
    /// # Returns
    /// - `Ok(Profile)` - The created or updated profile
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(
        &self,
        user: &AuthUser,
        params: UpsertProfileParams,
    ) -> Result<Profile, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::Profile::insert(entity::profile::ActiveModel {
            user_id: ActiveValue::Set(user.id.clone()),
            email: ActiveValue::Set(user.email.clone()),
            display_name: ActiveValue::Set(params.display_name),
            bio: ActiveValue::Set(params.bio),
            avatar_url: ActiveValue::Set(params.avatar_url),
            onboarded: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::profile::Column::UserId)
                .update_columns([
                    entity::profile::Column::Email,
                    entity::profile::Column::DisplayName,
                    entity::profile::Column::Bio,
                    entity::profile::Column::AvatarUrl,
                    entity::profile::Column::Onboarded,
                    entity::profile::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Profile::from_entity(entity))
    }
}
