use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        discord::{DiscordConnectDto, DiscordStatusDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::auth::AuthGuard,
        service::discord::{state::verify_state, DiscordLinkService},
        state::AppState,
    },
};

/// Tag for grouping Discord link endpoints in OpenAPI documentation
pub static DISCORD_TAG: &str = "discord";

#[derive(Deserialize)]
pub struct CallbackParams {
    pub code: String,
    pub state: String,
}

#[derive(Deserialize)]
pub struct StatusParams {
    #[serde(default)]
    pub refresh: bool,
}

/// Get the Discord authorization URL for the caller.
///
/// The returned URL carries a signed state token bound to the caller, so the
/// callback can be completed without a bearer token.
///
/// # Access Control
/// Requires a valid bearer token (no admin permission required)
///
/// # Returns
/// - `200 OK` - Authorization URL to redirect the user to
/// - `401 Unauthorized` - Missing or rejected bearer token
#[utoipa::path(
    get,
    path = "/api/discord/connect",
    tag = DISCORD_TAG,
    responses(
        (status = 200, description = "Discord authorization URL", body = DiscordConnectDto),
        (status = 401, description = "Missing or rejected bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn connect(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers, &[]).await?;

    let url = DiscordLinkService::new(&state).connect_url(&user.id)?;

    Ok((
        StatusCode::OK,
        Json(DiscordConnectDto {
            url: url.to_string(),
        }),
    ))
}

/// Complete the Discord OAuth callback.
///
/// This endpoint is hit by a browser redirect from Discord, so it carries no
/// bearer token; the signed state token identifies and authenticates the flow
/// instead. On success the browser is redirected back into the app.
///
/// # Returns
/// - `307 Temporary Redirect` - Link stored, redirecting into the app
/// - `400 Bad Request` - Invalid or expired state, or code exchange failure
/// - `502 Bad Gateway` - Discord API failure
#[utoipa::path(
    get,
    path = "/api/discord/callback",
    tag = DISCORD_TAG,
    params(
        ("code" = String, Query, description = "Discord authorization code"),
        ("state" = String, Query, description = "Signed state token from the connect step")
    ),
    responses(
        (status = 307, description = "Link stored, redirecting into the app"),
        (status = 400, description = "Invalid state or code exchange failure", body = ErrorDto),
        (status = 502, description = "Discord API failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let claims = verify_state(&params.state, &state.config.state_signing_secret)?;

    DiscordLinkService::new(&state)
        .complete_callback(claims.sub, params.code)
        .await?;

    Ok(Redirect::temporary(&state.config.app_url))
}

/// Get the caller's Discord link status.
///
/// Returns a `linked: false` shape when no link exists. With `?refresh=true`
/// the membership snapshot is re-resolved against Discord before answering;
/// refreshing without a link is an error rather than an upstream call.
///
/// # Access Control
/// Requires a valid bearer token (no admin permission required)
///
/// # Returns
/// - `200 OK` - Link status snapshot
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `403 Forbidden` - `refresh=true` with no linked account
#[utoipa::path(
    get,
    path = "/api/discord/status",
    tag = DISCORD_TAG,
    params(
        ("refresh" = Option<bool>, Query, description = "Re-resolve membership against Discord (default: false)")
    ),
    responses(
        (status = 200, description = "Link status snapshot", body = DiscordStatusDto),
        (status = 401, description = "Missing or rejected bearer token", body = ErrorDto),
        (status = 403, description = "Refresh requested with no linked account", body = ErrorDto),
        (status = 502, description = "Discord API failure during refresh", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<StatusParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers, &[]).await?;

    let link = DiscordLinkService::new(&state)
        .status(&user.id, params.refresh)
        .await?;

    let dto = match link {
        Some(link) => link.into_status_dto(),
        None if params.refresh => return Err(AuthError::DiscordNotLinked(user.id).into()),
        None => DiscordStatusDto::unlinked(),
    };

    Ok((StatusCode::OK, Json(dto)))
}
