use super::*;

/// Tests storing a contact form submission.
///
/// Expected: Ok(ContactMessage) with an assigned id
#[tokio::test]
async fn stores_submission() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ContactMessage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContactMessageRepository::new(db);

    let message = repo
        .create(NewContactMessageParams {
            name: "Visitor".to_string(),
            email: "visitor@example.com".to_string(),
            subject: Some("Hi".to_string()),
            message: "I like your projects page.".to_string(),
        })
        .await?;

    assert!(message.id > 0);
    assert_eq!(message.email, "visitor@example.com");
    assert_eq!(message.subject.as_deref(), Some("Hi"));

    Ok(())
}
