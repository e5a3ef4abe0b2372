use super::*;

/// Tests creating a pending team request.
///
/// Expected: Ok(TeamRequest) with pending status
#[tokio::test]
async fn creates_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_team_request_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRequestRepository::new(db);
    let request = repo.create("user-1", "Let me in".to_string()).await?;

    assert!(request.id > 0);
    assert_eq!(request.status, "pending");
    assert_eq!(request.user_id, "user-1");

    Ok(())
}
