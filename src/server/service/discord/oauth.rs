use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use serenity::all::User as DiscordUser;
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    service::discord::{state::sign_state, DiscordLinkService},
};

impl<'a> DiscordLinkService<'a> {
    /// Builds the Discord authorization URL for the given user.
    ///
    /// The `state` parameter carries a signed token binding the flow to the
    /// initiating user, so the callback can recover who started it without
    /// server-side session state.
    ///
    /// # Returns
    /// - `Ok(Url)` - Authorization URL to redirect the user to
    /// - `Err(AppError)` - State token signing failure
    pub fn connect_url(&self, user_id: &str) -> Result<Url, AppError> {
        let signed_state = sign_state(user_id, &self.state.config.state_signing_secret)?;

        let (authorize_url, _csrf_state) = self
            .state
            .oauth_client
            .authorize_url(|| CsrfToken::new(signed_state))
            // Only user identity is needed, guild checks use the bot token
            .add_scope(Scope::new("identify".to_string()))
            .url();

        Ok(authorize_url)
    }

    /// Exchanges an authorization code and fetches the Discord identity.
    pub(super) async fn exchange_and_fetch_user(
        &self,
        authorization_code: String,
    ) -> Result<DiscordUser, AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .state
            .oauth_client
            .exchange_code(auth_code)
            .request_async(&self.state.http_client)
            .await
            .map_err(|error| AuthError::TokenExchangeFailed(error.to_string()))?;

        self.fetch_discord_user(&token).await
    }

    /// Retrieves the Discord user's identity using the provided access token
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .state
            .http_client
            .get("https://discord.com/api/users/@me")
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }
}
