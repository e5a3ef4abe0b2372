use super::*;

/// Tests reading back a stored page revision.
///
/// Expected: Ok(Some(PageContent)) matching what was written
#[tokio::test]
async fn finds_existing_revision() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PageContent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageContentRepository::new(db);
    let body = serde_json::json!({ "heading": "Documentation" });

    repo.upsert(PageKind::Documentation, Revision::Default, body.clone())
        .await?;

    let found = repo.find(PageKind::Documentation, Revision::Default).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().body, body);

    Ok(())
}

/// Tests querying a page that was never saved.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unsaved_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PageContent)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PageContentRepository::new(db);
    let found = repo.find(PageKind::Contact, Revision::Default).await?;

    assert!(found.is_none());

    Ok(())
}
