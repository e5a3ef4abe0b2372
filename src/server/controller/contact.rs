use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        contact::{ContactMessageDto, SubmitContactDto},
    },
    server::{
        error::AppError, model::contact::NewContactMessageParams, service::contact::ContactService,
        state::AppState,
    },
};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

/// Submit a contact message.
///
/// Validates and stores a message from the public contact form. This route is
/// rate limited per client IP; excess submissions receive 429.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Contact form fields (name, email, optional subject, message)
///
/// # Returns
/// - `201 Created` - Stored contact message
/// - `400 Bad Request` - Missing or invalid fields
/// - `429 Too Many Requests` - Rate limit exceeded
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = CONTACT_TAG,
    request_body = SubmitContactDto,
    responses(
        (status = 201, description = "Successfully submitted contact message", body = ContactMessageDto),
        (status = 400, description = "Missing or invalid fields", body = ErrorDto),
        (status = 429, description = "Rate limit exceeded"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<SubmitContactDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = NewContactMessageParams::from_dto(payload);
    let message = ContactService::new(&state.db).submit(params).await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}
