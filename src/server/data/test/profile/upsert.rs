use super::*;

fn test_user() -> AuthUser {
    AuthUser {
        id: "7f3b2a9c-user".to_string(),
        email: "person@example.com".to_string(),
    }
}

/// Tests creating a profile on onboarding completion.
///
/// Expected: Ok(Profile) with onboarded set
#[tokio::test]
async fn creates_profile_on_first_save() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);

    let profile = repo
        .upsert(
            &test_user(),
            UpsertProfileParams {
                display_name: "Person".to_string(),
                bio: Some("Hello".to_string()),
                avatar_url: None,
            },
        )
        .await?;

    assert_eq!(profile.user_id, "7f3b2a9c-user");
    assert_eq!(profile.email, "person@example.com");
    assert_eq!(profile.display_name, "Person");
    assert!(profile.onboarded);

    Ok(())
}

/// Tests updating an existing profile.
///
/// Verifies that a second upsert for the same user id updates the editable
/// fields instead of creating a second row.
///
/// Expected: Ok(Profile) with the new display name
#[tokio::test]
async fn updates_existing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    let user = test_user();

    repo.upsert(
        &user,
        UpsertProfileParams {
            display_name: "Old Name".to_string(),
            bio: None,
            avatar_url: None,
        },
    )
    .await?;

    let updated = repo
        .upsert(
            &user,
            UpsertProfileParams {
                display_name: "New Name".to_string(),
                bio: Some("Updated".to_string()),
                avatar_url: Some("https://cdn.example.com/avatar.png".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.display_name, "New Name");
    assert_eq!(updated.bio.as_deref(), Some("Updated"));

    let found = repo.find_by_user_id(&user.id).await?;
    assert_eq!(found.unwrap().display_name, "New Name");

    Ok(())
}
