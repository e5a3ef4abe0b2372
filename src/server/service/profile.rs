//! Profile business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::profile::ProfileRepository,
    error::AppError,
    model::{
        auth::AuthUser,
        profile::{Profile, UpsertProfileParams},
    },
};

const MAX_DISPLAY_NAME_LEN: usize = 64;
const MAX_BIO_LEN: usize = 2000;

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the caller's profile.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The stored profile
    /// - `Err(AppError::NotFound)` - The user has not completed onboarding
    pub async fn get(&self, user_id: &str) -> Result<Profile, AppError> {
        let repo = ProfileRepository::new(self.db);

        let Some(profile) = repo.find_by_user_id(user_id).await? else {
            return Err(AppError::NotFound(
                "Profile not found, complete onboarding first".to_string(),
            ));
        };

        Ok(profile)
    }

    /// Upserts the caller's profile, validating the editable fields.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The created or updated profile
    /// - `Err(AppError::BadRequest)` - Validation failure
    pub async fn upsert(
        &self,
        user: &AuthUser,
        mut params: UpsertProfileParams,
    ) -> Result<Profile, AppError> {
        params.display_name = params.display_name.trim().to_string();

        if params.display_name.is_empty() {
            return Err(AppError::BadRequest(
                "Display name must not be empty".to_string(),
            ));
        }
        if params.display_name.len() > MAX_DISPLAY_NAME_LEN {
            return Err(AppError::BadRequest(format!(
                "Display name must be at most {} characters",
                MAX_DISPLAY_NAME_LEN
            )));
        }
        if let Some(bio) = &params.bio {
            if bio.len() > MAX_BIO_LEN {
                return Err(AppError::BadRequest(format!(
                    "Bio must be at most {} characters",
                    MAX_BIO_LEN
                )));
            }
        }

        let repo = ProfileRepository::new(self.db);
        let profile = repo.upsert(user, params).await?;

        Ok(profile)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_utils::builder::TestBuilder;

    fn user() -> AuthUser {
        AuthUser {
            id: "user-1".to_string(),
            email: "person@example.com".to_string(),
        }
    }

    /// Tests that display names are trimmed before validation and storage.
    ///
    /// Expected: stored name has no surrounding whitespace
    #[tokio::test]
    async fn trims_display_name() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Profile)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ProfileService::new(db);
        let profile = service
            .upsert(
                &user(),
                UpsertProfileParams {
                    display_name: "  Person  ".to_string(),
                    bio: None,
                    avatar_url: None,
                },
            )
            .await?;

        assert_eq!(profile.display_name, "Person");
        Ok(())
    }

    /// Tests that a whitespace-only display name is rejected.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn rejects_blank_display_name() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Profile)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ProfileService::new(db);
        let result = service
            .upsert(
                &user(),
                UpsertProfileParams {
                    display_name: "   ".to_string(),
                    bio: None,
                    avatar_url: None,
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests fetching a profile before onboarding.
    ///
    /// Expected: Err(AppError::NotFound)
    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Profile)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = ProfileService::new(db);
        let result = service.get("user-never-onboarded").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
