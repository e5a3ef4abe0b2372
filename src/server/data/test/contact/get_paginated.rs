use super::*;

async fn submit(repo: &ContactMessageRepository<'_>, n: usize) -> Result<(), DbErr> {
    for i in 0..n {
        repo.create(NewContactMessageParams {
            name: format!("Visitor {}", i),
            email: format!("visitor{}@example.com", i),
            subject: None,
            message: format!("Message {}", i),
        })
        .await?;
    }
    Ok(())
}

/// Tests paging through the admin inbox.
///
/// Expected: first page holds the page size, totals reflect all rows
#[tokio::test]
async fn pages_through_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContactMessageRepository::new(db);
    submit(&repo, 7).await?;

    let first = repo.get_paginated(0, 5).await?;
    assert_eq!(first.messages.len(), 5);
    assert_eq!(first.total_items, 7);
    assert_eq!(first.total_pages, 2);

    let second = repo.get_paginated(1, 5).await?;
    assert_eq!(second.messages.len(), 2);

    Ok(())
}

/// Tests that an empty inbox returns an empty page.
///
/// Expected: Ok with no messages and zero totals
#[tokio::test]
async fn empty_inbox_returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContactMessageRepository::new(db);
    let page = repo.get_paginated(0, 10).await?;

    assert!(page.messages.is_empty());
    assert_eq!(page.total_items, 0);

    Ok(())
}
