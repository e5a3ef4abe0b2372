use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, page::PageContentDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::gaming::GamingService,
        state::AppState,
    },
};

/// Tag for grouping gaming endpoints in OpenAPI documentation
pub static GAMING_TAG: &str = "gaming";

/// Get the gaming page content for a verified guild member.
///
/// Serves the published gaming blob only when the caller's stored Discord
/// link passes the guild role gate. Each failure mode gets a distinct error
/// so clients can tell the user what to fix.
///
/// # Access Control
/// Requires a valid bearer token and a Discord link passing the guild role gate
///
/// # Returns
/// - `200 OK` - Published gaming page content
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `403 Forbidden` - No Discord link, not in the guild, or missing the role
/// - `404 Not Found` - Gaming page has never been saved
#[utoipa::path(
    get,
    path = "/api/gaming/live",
    tag = GAMING_TAG,
    responses(
        (status = 200, description = "Published gaming page content", body = PageContentDto),
        (status = 401, description = "Missing or rejected bearer token", body = ErrorDto),
        (status = 403, description = "Caller does not pass the guild role gate", body = ErrorDto),
        (status = 404, description = "Gaming page has never been saved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_live_content(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers, &[]).await?;

    let content = GamingService::new(&state.db).live_content(&user.id).await?;

    Ok((StatusCode::OK, Json(content.into_dto())))
}
