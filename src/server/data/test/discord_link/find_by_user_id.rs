use super::*;

/// Tests finding an existing link by user id.
///
/// Expected: Ok(Some(DiscordLink))
#[tokio::test]
async fn finds_existing_link() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = test_utils::factory::discord_link::create_discord_link(db)
        .await
        .unwrap();

    let repo = DiscordLinkRepository::new(db);
    let found = repo.find_by_user_id(&created.user_id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().username, created.username);

    Ok(())
}

/// Tests querying a user with no link.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unlinked_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordLinkRepository::new(db);
    let found = repo.find_by_user_id("nobody").await?;

    assert!(found.is_none());

    Ok(())
}
