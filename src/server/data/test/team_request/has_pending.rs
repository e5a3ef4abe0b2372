use super::*;

/// Tests pending detection for a user with an open request.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRequestRepository::new(db);
    repo.create("user-1", "First request".to_string()).await?;

    assert!(repo.has_pending("user-1").await?);
    assert!(!repo.has_pending("user-2").await?);

    Ok(())
}
