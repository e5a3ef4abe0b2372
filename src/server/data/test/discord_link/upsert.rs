use super::*;

/// Tests creating a link on first connect.
///
/// Expected: Ok(DiscordLink) carrying the snapshot
#[tokio::test]
async fn creates_link_on_first_connect() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordLinkRepository::new(db);

    let link = repo
        .upsert(UpsertDiscordLinkParams {
            user_id: "user-1".to_string(),
            discord_id: 123456789012345678,
            username: "gamer".to_string(),
            membership: MembershipSnapshot {
                in_guild: true,
                has_required_role: true,
                is_owner: false,
            },
        })
        .await?;

    assert_eq!(link.user_id, "user-1");
    assert_eq!(link.discord_id, 123456789012345678);
    assert!(link.membership.in_guild);
    assert!(link.membership.has_required_role);

    Ok(())
}

/// Tests re-verifying an existing link.
///
/// Verifies that upserting for the same user id replaces the snapshot and
/// identity without creating a second row, and advances `verified_at` while
/// keeping `linked_at`.
///
/// Expected: single row with the refreshed snapshot
#[tokio::test]
async fn replaces_snapshot_on_reverify() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordLink)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordLinkRepository::new(db);

    let first = repo
        .upsert(UpsertDiscordLinkParams {
            user_id: "user-2".to_string(),
            discord_id: 42,
            username: "old-name".to_string(),
            membership: MembershipSnapshot {
                in_guild: true,
                has_required_role: true,
                is_owner: false,
            },
        })
        .await?;

    // Role was removed on Discord's side between verifications.
    let second = repo
        .upsert(UpsertDiscordLinkParams {
            user_id: "user-2".to_string(),
            discord_id: 42,
            username: "new-name".to_string(),
            membership: MembershipSnapshot {
                in_guild: true,
                has_required_role: false,
                is_owner: false,
            },
        })
        .await?;

    assert_eq!(second.username, "new-name");
    assert!(!second.membership.has_required_role);
    assert_eq!(second.linked_at, first.linked_at);
    assert!(second.verified_at >= first.verified_at);

    let found = repo.find_by_user_id("user-2").await?;
    assert_eq!(found.unwrap().username, "new-name");

    Ok(())
}
