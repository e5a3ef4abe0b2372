use super::*;

/// Tests creating a page blob on first save.
///
/// Verifies that upserting a page revision that was never saved creates the
/// row with the provided body.
///
/// Expected: Ok(PageContent) with the stored body
#[tokio::test]
async fn creates_row_on_first_save() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PageContent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageContentRepository::new(db);
    let body = serde_json::json!({ "title": "About me", "sections": [] });

    let content = repo
        .upsert(PageKind::About, Revision::Draft, body.clone())
        .await?;

    assert_eq!(content.page, PageKind::About);
    assert_eq!(content.revision, Revision::Draft);
    assert_eq!(content.body, body);

    Ok(())
}

/// Tests replacing the body of an existing page revision.
///
/// Verifies that a second upsert for the same (page, revision) key replaces
/// the body rather than creating another row.
///
/// Expected: Ok(PageContent) with the new body on read-back
#[tokio::test]
async fn replaces_existing_body() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PageContent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageContentRepository::new(db);

    repo.upsert(
        PageKind::Projects,
        Revision::Draft,
        serde_json::json!({ "projects": ["first"] }),
    )
    .await?;

    let updated_body = serde_json::json!({ "projects": ["first", "second"] });
    repo.upsert(PageKind::Projects, Revision::Draft, updated_body.clone())
        .await?;

    let stored = repo.find(PageKind::Projects, Revision::Draft).await?;
    assert_eq!(stored.unwrap().body, updated_body);

    Ok(())
}

/// Tests that revisions of the same page are independent rows.
///
/// Verifies that writing the draft revision leaves the published revision
/// untouched.
///
/// Expected: draft holds the new body, default still absent
#[tokio::test]
async fn revisions_are_independent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PageContent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageContentRepository::new(db);

    repo.upsert(
        PageKind::Gaming,
        Revision::Draft,
        serde_json::json!({ "live": true }),
    )
    .await?;

    assert!(repo.find(PageKind::Gaming, Revision::Draft).await?.is_some());
    assert!(repo
        .find(PageKind::Gaming, Revision::Default)
        .await?
        .is_none());

    Ok(())
}
