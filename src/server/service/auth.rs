//! Bearer token verification against the hosted auth provider.

use reqwest::StatusCode;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::AuthUser,
};

/// Verifies bearer tokens by calling the auth provider's user endpoint.
///
/// The provider owns session issuance entirely; this service only asks it
/// "who does this token belong to" on every protected request.
pub struct AuthProviderService<'a> {
    http_client: &'a reqwest::Client,
    api_url: &'a str,
    api_key: &'a str,
}

impl<'a> AuthProviderService<'a> {
    pub fn new(http_client: &'a reqwest::Client, api_url: &'a str, api_key: &'a str) -> Self {
        Self {
            http_client,
            api_url,
            api_key,
        }
    }

    /// Verifies a bearer token and returns the identity it belongs to.
    ///
    /// # Arguments
    /// - `token` - The bearer token from the Authorization header
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - The provider confirmed the token and returned the identity
    /// - `Err(AppError::AuthErr(TokenRejected))` - The provider rejected the token
    /// - `Err(AppError::ReqwestErr)` - The provider could not be reached
    pub async fn verify_token(&self, token: &str) -> Result<AuthUser, AppError> {
        let response = self
            .http_client
            .get(format!("{}/user", self.api_url.trim_end_matches('/')))
            .header("Authorization", format!("Bearer {}", token))
            .header("apikey", self.api_key)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(AuthError::TokenRejected.into())
            }
            status if status.is_success() => {
                let user = response.json::<AuthUser>().await?;
                Ok(user)
            }
            status => Err(AppError::InternalError(format!(
                "Auth provider returned unexpected status {}",
                status
            ))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Tests verifying a token the provider accepts.
    ///
    /// Expected: Ok(AuthUser) with the provider's identity
    #[tokio::test]
    async fn accepts_valid_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header("Authorization", "Bearer good-token"))
            .and(header("apikey", "service-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "user-1",
                "email": "person@example.com"
            })))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let uri = server.uri();
        let service = AuthProviderService::new(&client, &uri, "service-key");

        let user = service.verify_token("good-token").await.unwrap();
        assert_eq!(user.id, "user-1");
        assert_eq!(user.email, "person@example.com");
    }

    /// Tests verifying a token the provider rejects.
    ///
    /// Expected: Err(AuthError::TokenRejected)
    #[tokio::test]
    async fn rejects_invalid_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let uri = server.uri();
        let service = AuthProviderService::new(&client, &uri, "service-key");

        let result = service.verify_token("bad-token").await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::TokenRejected))
        ));
    }

    /// Tests an unexpected provider response.
    ///
    /// Expected: Err(AppError::InternalError)
    #[tokio::test]
    async fn surfaces_unexpected_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let uri = server.uri();
        let service = AuthProviderService::new(&client, &uri, "service-key");

        let result = service.verify_token("any-token").await;
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }
}
