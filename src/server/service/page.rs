//! Page content business logic.
//!
//! Handles the draft/publish cycle for content-managed pages and the direct
//! upsert path for site settings. Blobs are opaque JSON documents; the only
//! structural requirement enforced here is that the top level is an object.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::page::PageContentRepository,
    error::AppError,
    model::page::{PageContent, PageKind, Revision},
};

pub struct PageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the blob for a page revision.
    ///
    /// # Returns
    /// - `Ok(PageContent)` - The stored blob
    /// - `Err(AppError::NotFound)` - The revision was never saved
    pub async fn get(&self, page: PageKind, revision: Revision) -> Result<PageContent, AppError> {
        let repo = PageContentRepository::new(self.db);

        let Some(content) = repo.find(page, revision).await? else {
            return Err(AppError::NotFound(format!(
                "Page '{}' has no {} content",
                page.as_str(),
                revision.as_str()
            )));
        };

        Ok(content)
    }

    /// Gets the published blob for a page.
    pub async fn get_published(&self, page: PageKind) -> Result<PageContent, AppError> {
        self.get(page, Revision::Default).await
    }

    /// Saves the draft revision of a page.
    ///
    /// # Arguments
    /// - `page` - The page being edited
    /// - `body` - The full JSON document; must be a JSON object
    ///
    /// # Returns
    /// - `Ok(PageContent)` - The stored draft
    /// - `Err(AppError::BadRequest)` - Body is not a JSON object
    pub async fn save_draft(
        &self,
        page: PageKind,
        body: serde_json::Value,
    ) -> Result<PageContent, AppError> {
        require_object(&body)?;

        let repo = PageContentRepository::new(self.db);
        repo.upsert(page, Revision::Draft, body).await
    }

    /// Publishes a page by copying its draft over the published revision.
    ///
    /// The draft row is left in place so the admin can keep editing it.
    ///
    /// # Returns
    /// - `Ok(PageContent)` - The newly published blob
    /// - `Err(AppError::NotFound)` - The page has no draft to publish
    pub async fn publish(&self, page: PageKind) -> Result<PageContent, AppError> {
        let repo = PageContentRepository::new(self.db);

        let Some(draft) = repo.find(page, Revision::Draft).await? else {
            return Err(AppError::NotFound(format!(
                "Page '{}' has no draft to publish",
                page.as_str()
            )));
        };

        repo.upsert(page, Revision::Default, draft.body).await
    }

    /// Gets the published site settings blob.
    ///
    /// Settings that were never saved render with client-side defaults, so
    /// this returns an empty object rather than 404.
    pub async fn get_site_settings(&self) -> Result<serde_json::Value, AppError> {
        let repo = PageContentRepository::new(self.db);

        let content = repo.find(PageKind::SiteSettings, Revision::Default).await?;

        Ok(content
            .map(|c| c.body)
            .unwrap_or_else(|| serde_json::json!({})))
    }

    /// Saves the site settings blob directly to the published revision.
    ///
    /// Site settings have no draft cycle; admin saves take effect immediately.
    pub async fn save_site_settings(
        &self,
        body: serde_json::Value,
    ) -> Result<PageContent, AppError> {
        require_object(&body)?;

        let repo = PageContentRepository::new(self.db);
        repo.upsert(PageKind::SiteSettings, Revision::Default, body)
            .await
    }
}

fn require_object(body: &serde_json::Value) -> Result<(), AppError> {
    if !body.is_object() {
        return Err(AppError::BadRequest(
            "Page content must be a JSON object".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use test_utils::builder::TestBuilder;

    /// Tests the full draft/publish cycle.
    ///
    /// Expected: published blob matches the draft, draft still editable
    #[tokio::test]
    async fn publish_copies_draft_over_default() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::PageContent)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = PageService::new(db);
        let body = serde_json::json!({ "title": "About", "blurb": "Hello" });

        service.save_draft(PageKind::About, body.clone()).await?;
        let published = service.publish(PageKind::About).await?;

        assert_eq!(published.revision, Revision::Default);
        assert_eq!(published.body, body);

        let still_there = service.get(PageKind::About, Revision::Draft).await?;
        assert_eq!(still_there.body, body);

        Ok(())
    }

    /// Tests publishing a page that has no draft.
    ///
    /// Expected: Err(AppError::NotFound)
    #[tokio::test]
    async fn publish_without_draft_is_not_found() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::PageContent)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = PageService::new(db);
        let result = service.publish(PageKind::Projects).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    /// Tests that non-object bodies are rejected before hitting the database.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn rejects_non_object_body() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::PageContent)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = PageService::new(db);

        let result = service
            .save_draft(PageKind::About, serde_json::json!([1, 2, 3]))
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        let result = service
            .save_site_settings(serde_json::json!("just a string"))
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests that unsaved site settings come back as an empty object.
    ///
    /// Expected: Ok({})
    #[tokio::test]
    async fn unsaved_site_settings_default_to_empty() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::PageContent)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = PageService::new(db);
        let settings = service.get_site_settings().await?;

        assert_eq!(settings, serde_json::json!({}));
        Ok(())
    }

    /// Tests that a draft stays editable after publishing.
    ///
    /// Expected: a second draft save does not affect the published revision
    #[tokio::test]
    async fn draft_remains_independent_after_publish() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::PageContent)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = PageService::new(db);
        let v1 = serde_json::json!({ "version": 1 });
        let v2 = serde_json::json!({ "version": 2 });

        service.save_draft(PageKind::Documentation, v1.clone()).await?;
        service.publish(PageKind::Documentation).await?;
        service.save_draft(PageKind::Documentation, v2.clone()).await?;

        let published = service.get_published(PageKind::Documentation).await?;
        assert_eq!(published.body, v1);

        let draft = service.get(PageKind::Documentation, Revision::Draft).await?;
        assert_eq!(draft.body, v2);

        Ok(())
    }
}
