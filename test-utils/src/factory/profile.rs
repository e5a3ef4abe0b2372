//! Profile factory for creating test profile entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test profiles with customizable fields.
///
/// Provides a builder pattern for creating profile entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::profile::ProfileFactory;
///
/// let profile = ProfileFactory::new(&db)
///     .user_id("user-1")
///     .display_name("Custom Name")
///     .build()
///     .await?;
/// ```
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    email: String,
    display_name: String,
    bio: Option<String>,
    avatar_url: Option<String>,
    onboarded: bool,
}

impl<'a> ProfileFactory<'a> {
    /// Creates a new ProfileFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `"user-{id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - display_name: `"User {id}"`
    /// - bio / avatar_url: `None`
    /// - onboarded: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ProfileFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: format!("user-{}", id),
            email: format!("user{}@example.com", id),
            display_name: format!("User {}", id),
            bio: None,
            avatar_url: None,
            onboarded: true,
        }
    }

    /// Sets the auth provider user id for the profile.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the email for the profile.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the display name for the profile.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the bio for the profile.
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Sets the onboarded flag for the profile.
    pub fn onboarded(mut self, onboarded: bool) -> Self {
        self.onboarded = onboarded;
        self
    }

    /// Builds and inserts the profile entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::profile::Model)` - Created profile entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        let now = Utc::now();
        entity::profile::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            email: ActiveValue::Set(self.email),
            display_name: ActiveValue::Set(self.display_name),
            bio: ActiveValue::Set(self.bio),
            avatar_url: ActiveValue::Set(self.avatar_url),
            onboarded: ActiveValue::Set(self.onboarded),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a profile with default values.
///
/// Shorthand for `ProfileFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::profile::Model)` - Created profile entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_profile(db: &DatabaseConnection) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db).build().await
}
