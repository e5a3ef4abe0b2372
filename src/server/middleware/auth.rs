//! Bearer token verification and permission guards.
//!
//! Every protected endpoint constructs an `AuthGuard` and calls `require()`
//! with the permissions it needs. The guard extracts the bearer token from the
//! request headers, verifies it against the hosted auth provider, and checks
//! the requested permissions against the verified identity.

use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::AuthUser,
    service::auth::AuthProviderService,
    state::AppState,
};

pub enum Permission {
    /// Requires the verified email to exactly match the admin allow-list.
    Admin,
}

pub struct AuthGuard<'a> {
    state: &'a AppState,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Verifies the caller's bearer token and checks the given permissions.
    ///
    /// # Arguments
    /// - `headers` - Request headers carrying `Authorization: Bearer <token>`
    /// - `permissions` - Permissions the endpoint requires (may be empty)
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Verified identity from the auth provider
    /// - `Err(AppError::AuthErr)` - Missing/rejected token or permission failure
    pub async fn require(
        &self,
        headers: &HeaderMap,
        permissions: &[Permission],
    ) -> Result<AuthUser, AppError> {
        let token = bearer_token(headers)?;

        let provider = AuthProviderService::new(
            &self.state.http_client,
            &self.state.config.auth_api_url,
            &self.state.config.auth_api_key,
        );
        let user = provider.verify_token(token).await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.email != self.state.config.admin_email {
                        return Err(AuthError::AccessDenied(user.email).into());
                    }
                }
            }
        }

        Ok(user)
    }
}

/// Extracts the bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingBearerToken)
}
