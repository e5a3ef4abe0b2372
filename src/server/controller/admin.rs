use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        contact::PaginatedContactMessagesDto,
        page::{PageContentDto, SavePageDto},
        team_request::PaginatedTeamRequestsDto,
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::page::{PageKind, Revision},
        service::{
            contact::ContactService, page::PageService, team_request::TeamRequestService,
        },
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize)]
pub struct RevisionParams {
    pub revision: Option<String>,
}

/// Get either revision of a page for editing.
///
/// # Access Control
/// - `Admin` - Only the allow-listed admin can read admin page state
///
/// # Returns
/// - `200 OK` - The requested revision
/// - `400 Bad Request` - Unknown page key or revision
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `403 Forbidden` - Verified email is not the admin
/// - `404 Not Found` - The revision has never been saved
#[utoipa::path(
    get,
    path = "/api/admin/pages/{page}",
    tag = ADMIN_TAG,
    params(
        ("page" = String, Path, description = "Page key"),
        ("revision" = Option<String>, Query, description = "Revision to fetch: default or draft (default: default)")
    ),
    responses(
        (status = 200, description = "The requested revision", body = PageContentDto),
        (status = 400, description = "Unknown page key or revision", body = ErrorDto),
        (status = 401, description = "Missing or rejected bearer token", body = ErrorDto),
        (status = 403, description = "Verified email is not the admin", body = ErrorDto),
        (status = 404, description = "The revision has never been saved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(page): Path<String>,
    Query(params): Query<RevisionParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state)
        .require(&headers, &[Permission::Admin])
        .await?;

    let page = PageKind::parse(&page)?;
    let revision = Revision::parse(params.revision.as_deref())?;

    let content = PageService::new(&state.db).get(page, revision).await?;

    Ok((StatusCode::OK, Json(content.into_dto())))
}

/// Save a page's draft revision.
///
/// Always writes the draft; the published revision only changes through the
/// publish endpoint.
///
/// # Access Control
/// - `Admin` - Only the allow-listed admin can edit pages
///
/// # Returns
/// - `200 OK` - The stored draft
/// - `400 Bad Request` - Unknown page key or body is not a JSON object
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `403 Forbidden` - Verified email is not the admin
#[utoipa::path(
    put,
    path = "/api/admin/pages/{page}",
    tag = ADMIN_TAG,
    params(
        ("page" = String, Path, description = "Page key")
    ),
    request_body = SavePageDto,
    responses(
        (status = 200, description = "The stored draft", body = PageContentDto),
        (status = 400, description = "Unknown page key or non-object body", body = ErrorDto),
        (status = 401, description = "Missing or rejected bearer token", body = ErrorDto),
        (status = 403, description = "Verified email is not the admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_page_draft(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(page): Path<String>,
    Json(payload): Json<SavePageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state)
        .require(&headers, &[Permission::Admin])
        .await?;

    let page = PageKind::parse(&page)?;

    let content = PageService::new(&state.db)
        .save_draft(page, payload.body)
        .await?;

    Ok((StatusCode::OK, Json(content.into_dto())))
}

/// Publish a page's draft.
///
/// Copies the draft blob over the published revision; the draft stays in
/// place for further editing.
///
/// # Access Control
/// - `Admin` - Only the allow-listed admin can publish pages
///
/// # Returns
/// - `200 OK` - The newly published blob
/// - `400 Bad Request` - Unknown page key
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `403 Forbidden` - Verified email is not the admin
/// - `404 Not Found` - The page has no draft to publish
#[utoipa::path(
    post,
    path = "/api/admin/pages/{page}/publish",
    tag = ADMIN_TAG,
    params(
        ("page" = String, Path, description = "Page key")
    ),
    responses(
        (status = 200, description = "The newly published blob", body = PageContentDto),
        (status = 400, description = "Unknown page key", body = ErrorDto),
        (status = 401, description = "Missing or rejected bearer token", body = ErrorDto),
        (status = 403, description = "Verified email is not the admin", body = ErrorDto),
        (status = 404, description = "The page has no draft to publish", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn publish_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(page): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state)
        .require(&headers, &[Permission::Admin])
        .await?;

    let page = PageKind::parse(&page)?;

    let content = PageService::new(&state.db).publish(page).await?;

    Ok((StatusCode::OK, Json(content.into_dto())))
}

/// Save the site settings blob.
///
/// Site settings have no draft cycle; the save takes effect immediately.
///
/// # Access Control
/// - `Admin` - Only the allow-listed admin can edit site settings
///
/// # Returns
/// - `200 OK` - The stored settings
/// - `400 Bad Request` - Body is not a JSON object
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `403 Forbidden` - Verified email is not the admin
#[utoipa::path(
    put,
    path = "/api/admin/site-settings",
    tag = ADMIN_TAG,
    request_body = SavePageDto,
    responses(
        (status = 200, description = "The stored settings", body = PageContentDto),
        (status = 400, description = "Body is not a JSON object", body = ErrorDto),
        (status = 401, description = "Missing or rejected bearer token", body = ErrorDto),
        (status = 403, description = "Verified email is not the admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_site_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SavePageDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state)
        .require(&headers, &[Permission::Admin])
        .await?;

    let content = PageService::new(&state.db)
        .save_site_settings(payload.body)
        .await?;

    Ok((StatusCode::OK, Json(content.into_dto())))
}

/// Get paginated contact messages, newest first.
///
/// # Access Control
/// - `Admin` - Only the allow-listed admin can read contact messages
///
/// # Returns
/// - `200 OK` - One page of messages plus totals
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `403 Forbidden` - Verified email is not the admin
#[utoipa::path(
    get,
    path = "/api/admin/messages",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "One page of contact messages", body = PaginatedContactMessagesDto),
        (status = 401, description = "Missing or rejected bearer token", body = ErrorDto),
        (status = 403, description = "Verified email is not the admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contact_messages(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state)
        .require(&headers, &[Permission::Admin])
        .await?;

    let messages = ContactService::new(&state.db)
        .list(params.page, params.entries())
        .await?;

    let dto = PaginatedContactMessagesDto {
        messages: messages
            .messages
            .into_iter()
            .map(|message| message.into_dto())
            .collect(),
        total_items: messages.total_items,
        total_pages: messages.total_pages,
        page: params.page,
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Get paginated team requests with linked Discord usernames.
///
/// # Access Control
/// - `Admin` - Only the allow-listed admin can read team requests
///
/// # Returns
/// - `200 OK` - One page of requests plus totals
/// - `401 Unauthorized` - Missing or rejected bearer token
/// - `403 Forbidden` - Verified email is not the admin
#[utoipa::path(
    get,
    path = "/api/admin/team-requests",
    tag = ADMIN_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "One page of team requests", body = PaginatedTeamRequestsDto),
        (status = 401, description = "Missing or rejected bearer token", body = ErrorDto),
        (status = 403, description = "Verified email is not the admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state)
        .require(&headers, &[Permission::Admin])
        .await?;

    let requests = TeamRequestService::new(&state.db)
        .list(params.page, params.entries())
        .await?;

    let dto = PaginatedTeamRequestsDto {
        requests: requests
            .requests
            .into_iter()
            .map(|request| request.into_dto())
            .collect(),
        total_items: requests.total_items,
        total_pages: requests.total_pages,
        page: params.page,
    };

    Ok((StatusCode::OK, Json(dto)))
}
