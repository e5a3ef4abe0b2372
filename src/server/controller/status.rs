use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Tag for grouping status endpoints in OpenAPI documentation
pub static STATUS_TAG: &str = "status";

/// Liveness probe.
///
/// # Returns
/// - `200 OK` - The server is up and serving requests
#[utoipa::path(
    get,
    path = "/api/health",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "The server is up")
    ),
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
