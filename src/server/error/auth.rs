use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header was supplied on an endpoint
    /// that requires authentication. Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingBearerToken,

    /// The hosted auth provider rejected the supplied bearer token.
    ///
    /// The token is expired, revoked, or was never issued by the provider.
    /// Results in a 401 Unauthorized response.
    #[error("Auth provider rejected the supplied bearer token")]
    TokenRejected,

    /// The authenticated user's email does not match the admin allow-list.
    ///
    /// Results in a 403 Forbidden response. The offending email is logged but
    /// never echoed back to the client.
    #[error("User '{0}' attempted an admin operation without admin access")]
    AccessDenied(String),

    /// Signed OAuth state validation failed during the Discord callback.
    ///
    /// The state token in the callback URL has a bad signature, expired, or
    /// does not decode, indicating a potential CSRF attack or a stale callback.
    /// Results in a 400 Bad Request response.
    #[error("State token validation failed: {0}")]
    InvalidStateToken(String),

    /// The Discord authorization code exchange failed.
    ///
    /// Usually a reused or expired authorization code. Results in a
    /// 400 Bad Request response.
    #[error("Discord token exchange failed: {0}")]
    TokenExchangeFailed(String),

    /// A gated page was requested through the public page endpoint.
    ///
    /// The gaming page is only served through its verified endpoint, in every
    /// state. Results in a 403 Forbidden response.
    #[error("Page '{0}' is gated behind Discord verification")]
    GatedContent(String),

    /// The caller has no linked Discord account.
    ///
    /// Results in a 403 Forbidden response telling the user to connect
    /// their Discord account first.
    #[error("User '{0}' has no linked Discord account")]
    DiscordNotLinked(String),

    /// The caller's linked Discord account is not a member of the guild.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User '{0}' is not a member of the configured guild")]
    GuildMembershipRequired(String),

    /// The caller is in the guild but lacks the required role.
    ///
    /// Guild owners are exempt from this check. Results in a 403 Forbidden
    /// response.
    #[error("User '{0}' does not have the required guild role")]
    GuildRoleRequired(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-facing
/// error messages. All errors are logged at debug level for diagnostics while
/// keeping client-facing messages generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For state token and code exchange failures
/// - 401 Unauthorized - For missing or rejected bearer tokens
/// - 403 Forbidden - For admin allow-list and guild role gate failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth failure: {}", self);

        let (status, message) = match self {
            Self::MissingBearerToken | Self::TokenRejected => (
                StatusCode::UNAUTHORIZED,
                "You must be logged in to do that.",
            ),
            Self::AccessDenied(_) => (
                StatusCode::FORBIDDEN,
                "You don't have permission to do that.",
            ),
            Self::InvalidStateToken(_) | Self::TokenExchangeFailed(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue linking your Discord account, please try again.",
            ),
            Self::GatedContent(_) => (
                StatusCode::FORBIDDEN,
                "This content requires Discord verification.",
            ),
            Self::DiscordNotLinked(_) => (
                StatusCode::FORBIDDEN,
                "Connect your Discord account to access this content.",
            ),
            Self::GuildMembershipRequired(_) => (
                StatusCode::FORBIDDEN,
                "You must be a member of the Discord server to access this content.",
            ),
            Self::GuildRoleRequired(_) => (
                StatusCode::FORBIDDEN,
                "You don't have the required Discord role to access this content.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
