//! Discord link factory for creating test link entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test Discord links with customizable fields.
///
/// Provides a builder pattern for creating Discord link entities with default
/// values that can be overridden as needed for specific test scenarios. The
/// defaults describe a guild member who holds the required role.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::discord_link::DiscordLinkFactory;
///
/// let link = DiscordLinkFactory::new(&db)
///     .user_id("user-1")
///     .in_guild(true)
///     .has_required_role(false)
///     .build()
///     .await?;
/// ```
pub struct DiscordLinkFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    discord_id: String,
    username: String,
    in_guild: bool,
    has_required_role: bool,
    is_owner: bool,
}

impl<'a> DiscordLinkFactory<'a> {
    /// Creates a new DiscordLinkFactory with default values.
    ///
    /// Defaults:
    /// - user_id: `"user-{id}"` where id is auto-incremented
    /// - discord_id: a unique numeric string
    /// - username: `"discord_user_{id}"`
    /// - in_guild: `true`
    /// - has_required_role: `false`
    /// - is_owner: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DiscordLinkFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: format!("user-{}", id),
            discord_id: (100000000000000000 + id).to_string(),
            username: format!("discord_user_{}", id),
            in_guild: true,
            has_required_role: false,
            is_owner: false,
        }
    }

    /// Sets the auth provider user id for the link.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the Discord user id for the link.
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Sets the Discord username for the link.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets whether the linked account is a guild member.
    pub fn in_guild(mut self, in_guild: bool) -> Self {
        self.in_guild = in_guild;
        self
    }

    /// Sets whether the linked account holds the required role.
    pub fn has_required_role(mut self, has_required_role: bool) -> Self {
        self.has_required_role = has_required_role;
        self
    }

    /// Sets whether the linked account owns the guild.
    pub fn is_owner(mut self, is_owner: bool) -> Self {
        self.is_owner = is_owner;
        self
    }

    /// Builds and inserts the Discord link entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::discord_link::Model)` - Created link entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::discord_link::Model, DbErr> {
        let now = Utc::now();
        entity::discord_link::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            discord_id: ActiveValue::Set(self.discord_id),
            username: ActiveValue::Set(self.username),
            in_guild: ActiveValue::Set(self.in_guild),
            has_required_role: ActiveValue::Set(self.has_required_role),
            is_owner: ActiveValue::Set(self.is_owner),
            linked_at: ActiveValue::Set(now),
            verified_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Discord link with default values.
///
/// Shorthand for `DiscordLinkFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::discord_link::Model)` - Created link entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_discord_link(
    db: &DatabaseConnection,
) -> Result<entity::discord_link::Model, DbErr> {
    DiscordLinkFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_link_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(DiscordLink)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let link = create_discord_link(db).await?;

        assert!(link.in_guild);
        assert!(!link.has_required_role);
        assert!(!link.is_owner);

        Ok(())
    }

    #[tokio::test]
    async fn creates_link_with_custom_flags() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(DiscordLink)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let link = DiscordLinkFactory::new(db)
            .user_id("user-1")
            .username("gamer")
            .has_required_role(true)
            .build()
            .await?;

        assert_eq!(link.user_id, "user-1");
        assert_eq!(link.username, "gamer");
        assert!(link.has_required_role);

        Ok(())
    }
}
