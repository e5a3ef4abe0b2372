//! Guild role gate for the gaming page.
//!
//! The gaming content blob is never served through the public page endpoint.
//! It is only reachable here, after checking the caller's stored Discord link
//! snapshot against the gate: in the guild, and holding the required role or
//! owning the guild.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::discord_link::DiscordLinkRepository,
    error::{auth::AuthError, AppError},
    model::page::{PageContent, PageKind},
    service::page::PageService,
};

pub struct GamingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GamingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the published gaming blob for a caller who passes the role gate.
    ///
    /// # Arguments
    /// - `user_id` - Auth provider user id of the caller
    ///
    /// # Returns
    /// - `Ok(PageContent)` - The published gaming content
    /// - `Err(AppError::AuthErr(DiscordNotLinked))` - No Discord link
    /// - `Err(AppError::AuthErr(GuildMembershipRequired))` - Linked but not in the guild
    /// - `Err(AppError::AuthErr(GuildRoleRequired))` - In the guild without the role
    /// - `Err(AppError::NotFound)` - Gate passed but nothing published yet
    pub async fn live_content(&self, user_id: &str) -> Result<PageContent, AppError> {
        let link_repo = DiscordLinkRepository::new(self.db);

        let Some(link) = link_repo.find_by_user_id(user_id).await? else {
            return Err(AuthError::DiscordNotLinked(user_id.to_string()).into());
        };

        if !link.membership.in_guild {
            return Err(AuthError::GuildMembershipRequired(user_id.to_string()).into());
        }
        if !link.membership.passes_role_gate() {
            return Err(AuthError::GuildRoleRequired(user_id.to_string()).into());
        }

        let page_service = PageService::new(self.db);
        page_service.get_published(PageKind::Gaming).await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::server::model::page::Revision;
    use test_utils::builder::TestBuilder;
    use test_utils::factory::discord_link::DiscordLinkFactory;

    async fn publish_gaming(db: &sea_orm::DatabaseConnection) {
        crate::server::data::page::PageContentRepository::new(db)
            .upsert(
                PageKind::Gaming,
                Revision::Default,
                serde_json::json!({ "roster": [] }),
            )
            .await
            .unwrap();
    }

    /// Tests the gate with no Discord link.
    ///
    /// Expected: Err(AuthError::DiscordNotLinked)
    #[tokio::test]
    async fn unlinked_caller_is_rejected() {
        let test = TestBuilder::new()
            .with_content_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        publish_gaming(db).await;

        let result = GamingService::new(db).live_content("user-1").await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::DiscordNotLinked(_)))
        ));
    }

    /// Tests the gate with a link outside the guild.
    ///
    /// Expected: Err(AuthError::GuildMembershipRequired)
    #[tokio::test]
    async fn non_member_is_rejected() {
        let test = TestBuilder::new()
            .with_content_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        publish_gaming(db).await;

        DiscordLinkFactory::new(db)
            .user_id("user-1")
            .in_guild(false)
            .build()
            .await
            .unwrap();

        let result = GamingService::new(db).live_content("user-1").await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::GuildMembershipRequired(_)))
        ));
    }

    /// Tests the gate with a member lacking the role.
    ///
    /// Expected: Err(AuthError::GuildRoleRequired)
    #[tokio::test]
    async fn member_without_role_is_rejected() {
        let test = TestBuilder::new()
            .with_content_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        publish_gaming(db).await;

        DiscordLinkFactory::new(db)
            .user_id("user-1")
            .in_guild(true)
            .has_required_role(false)
            .build()
            .await
            .unwrap();

        let result = GamingService::new(db).live_content("user-1").await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::GuildRoleRequired(_)))
        ));
    }

    /// Tests that the guild owner passes without the role.
    ///
    /// Expected: Ok(PageContent)
    #[tokio::test]
    async fn owner_passes_without_role() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_content_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        publish_gaming(db).await;

        DiscordLinkFactory::new(db)
            .user_id("user-1")
            .in_guild(true)
            .has_required_role(false)
            .is_owner(true)
            .build()
            .await
            .unwrap();

        let content = GamingService::new(db).live_content("user-1").await?;
        assert_eq!(content.page, PageKind::Gaming);

        Ok(())
    }

    /// Tests a member with the role but no published content.
    ///
    /// Expected: Err(AppError::NotFound)
    #[tokio::test]
    async fn gate_passed_but_nothing_published() {
        let test = TestBuilder::new()
            .with_content_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        DiscordLinkFactory::new(db)
            .user_id("user-1")
            .in_guild(true)
            .has_required_role(true)
            .build()
            .await
            .unwrap();

        let result = GamingService::new(db).live_content("user-1").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
