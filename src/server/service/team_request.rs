//! Team request business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        discord_link::DiscordLinkRepository,
        team_request::{PaginatedTeamRequests, TeamRequestRepository},
    },
    error::AppError,
    model::team_request::TeamRequest,
};

const MAX_MESSAGE_LEN: usize = 1000;

pub struct TeamRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team request for the caller.
    ///
    /// A request must reference a Discord link, so a caller without one is
    /// rejected before anything is written. Duplicate pending requests are
    /// also rejected.
    ///
    /// # Returns
    /// - `Ok(TeamRequest)` - The created pending request
    /// - `Err(AppError::BadRequest)` - No Discord link, duplicate pending
    ///   request, or invalid message
    pub async fn create(&self, user_id: &str, message: String) -> Result<TeamRequest, AppError> {
        let message = message.trim().to_string();

        if message.is_empty() {
            return Err(AppError::BadRequest(
                "A message is required for a team request".to_string(),
            ));
        }
        if message.len() > MAX_MESSAGE_LEN {
            return Err(AppError::BadRequest(format!(
                "Message must be at most {} characters",
                MAX_MESSAGE_LEN
            )));
        }

        let link_repo = DiscordLinkRepository::new(self.db);
        if link_repo.find_by_user_id(user_id).await?.is_none() {
            return Err(AppError::BadRequest(
                "Link your Discord account before requesting to join the team".to_string(),
            ));
        }

        let repo = TeamRequestRepository::new(self.db);
        if repo.has_pending(user_id).await? {
            return Err(AppError::BadRequest(
                "You already have a pending team request".to_string(),
            ));
        }

        let request = repo.create(user_id, message).await?;

        tracing::info!("Created team request {} for user {}", request.id, user_id);

        Ok(request)
    }

    /// Gets a page of team requests for the admin view.
    pub async fn list(&self, page: u64, entries: u64) -> Result<PaginatedTeamRequests, AppError> {
        let repo = TeamRequestRepository::new(self.db);
        let requests = repo.get_paginated(page, entries).await?;

        Ok(requests)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_utils::builder::TestBuilder;
    use test_utils::factory::discord_link::DiscordLinkFactory;

    /// Tests that a caller without a Discord link cannot request.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn requires_discord_link() {
        let test = TestBuilder::new()
            .with_team_request_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = TeamRequestService::new(db);
        let result = service.create("user-1", "Let me in".to_string()).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests the happy path with a linked caller.
    ///
    /// Expected: Ok(TeamRequest) with pending status
    #[tokio::test]
    async fn creates_request_for_linked_user() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_team_request_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        DiscordLinkFactory::new(db)
            .user_id("user-1")
            .build()
            .await
            .unwrap();

        let service = TeamRequestService::new(db);
        let request = service.create("user-1", "Let me in".to_string()).await?;

        assert_eq!(request.status, "pending");
        Ok(())
    }

    /// Tests that a second pending request is rejected.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn rejects_duplicate_pending_request() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_team_request_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        DiscordLinkFactory::new(db)
            .user_id("user-1")
            .build()
            .await
            .unwrap();

        let service = TeamRequestService::new(db);
        service.create("user-1", "First".to_string()).await?;

        let result = service.create("user-1", "Second".to_string()).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }
}
