use super::*;

/// Tests finding an existing profile by auth provider user id.
///
/// Expected: Ok(Some(Profile)) with matching data
#[tokio::test]
async fn finds_existing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = test_utils::factory::profile::create_profile(db).await?;

    let repo = ProfileRepository::new(db);
    let found = repo.find_by_user_id(&created.user_id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().user_id, created.user_id);

    Ok(())
}

/// Tests querying for a user who never completed onboarding.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    let found = repo.find_by_user_id("missing-user").await?;

    assert!(found.is_none());

    Ok(())
}
