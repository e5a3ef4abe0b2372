use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        team_request::{CreateTeamRequestDto, TeamRequestDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::team_request::TeamRequestService,
        state::AppState,
    },
};

/// Tag for grouping team request endpoints in OpenAPI documentation
pub static TEAM_REQUEST_TAG: &str = "team_request";

/// Create a team join request.
///
/// Requires the caller to have already linked a Discord account, since team
/// coordination happens there. Duplicate pending requests are rejected.
///
/// # Access Control
/// Requires a valid bearer token (no admin permission required)
///
/// # Returns
/// - `201 Created` - The created request
/// - `400 Bad Request` - No Discord link, pending request already exists, or
///   invalid message
/// - `401 Unauthorized` - Missing or rejected bearer token
#[utoipa::path(
    post,
    path = "/api/team-request",
    tag = TEAM_REQUEST_TAG,
    request_body = CreateTeamRequestDto,
    responses(
        (status = 201, description = "Successfully created team request", body = TeamRequestDto),
        (status = 400, description = "No Discord link or duplicate pending request", body = ErrorDto),
        (status = 401, description = "Missing or rejected bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTeamRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers, &[]).await?;

    let request = TeamRequestService::new(&state.db)
        .create(&user.id, payload.message)
        .await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}
