use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        profile::{ProfileDto, UpsertProfileDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::profile::UpsertProfileParams,
        service::profile::ProfileService,
        state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

/// Get the caller's profile.
///
/// # Access Control
/// Requires a valid bearer token (no admin permission required)
///
/// # Returns
/// - `200 OK` - The caller's profile
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `404 Not Found` - Onboarding has not been completed
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "The caller's profile", body = ProfileDto),
        (status = 401, description = "Missing or rejected bearer token", body = ErrorDto),
        (status = 404, description = "Onboarding has not been completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers, &[]).await?;

    let profile = ProfileService::new(&state.db).get(&user.id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Upsert the caller's profile.
///
/// Creates the profile on first save (onboarding completion) and updates it on
/// later edits. The stored email always tracks the verified identity.
///
/// # Access Control
/// Requires a valid bearer token (no admin permission required)
///
/// # Returns
/// - `200 OK` - The saved profile
/// - `400 Bad Request` - Empty display name or field over length cap
/// - `401 Unauthorized` - Missing or rejected bearer token
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = PROFILE_TAG,
    request_body = UpsertProfileDto,
    responses(
        (status = 200, description = "The saved profile", body = ProfileDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Missing or rejected bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state).require(&headers, &[]).await?;

    let params = UpsertProfileParams::from_dto(payload);
    let profile = ProfileService::new(&state.db).upsert(&user, params).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
