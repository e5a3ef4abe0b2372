use super::*;

/// Tests that the admin listing joins the requester's Discord username.
///
/// Expected: request row carries the linked username
#[tokio::test]
async fn joins_discord_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let link = test_utils::factory::discord_link::DiscordLinkFactory::new(db)
        .user_id("user-1")
        .username("gamer")
        .build()
        .await?;

    let repo = TeamRequestRepository::new(db);
    repo.create(&link.user_id, "Request".to_string()).await?;

    let page = repo.get_paginated(0, 10).await?;

    assert_eq!(page.requests.len(), 1);
    assert_eq!(page.requests[0].discord_username.as_deref(), Some("gamer"));

    Ok(())
}

/// Tests that a request whose link row is gone still lists.
///
/// The join is by user id with no enforced foreign key, so a missing link
/// simply yields no username.
///
/// Expected: request row with no username
#[tokio::test]
async fn lists_request_without_link() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRequestRepository::new(db);
    repo.create("user-orphan", "Request".to_string()).await?;

    let page = repo.get_paginated(0, 10).await?;

    assert_eq!(page.requests.len(), 1);
    assert!(page.requests[0].discord_username.is_none());

    Ok(())
}
