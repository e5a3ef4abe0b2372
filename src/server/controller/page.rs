use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, page::PageContentDto},
    server::{
        error::{auth::AuthError, AppError},
        model::page::PageKind,
        service::page::PageService,
        state::AppState,
    },
};

/// Tag for grouping public page endpoints in OpenAPI documentation
pub static PAGE_TAG: &str = "page";

/// Get the published content blob for a page.
///
/// Serves the published (`default`) revision of a content-managed page. The
/// gaming page is never served here, regardless of whether it has content;
/// it is only reachable through the verified gaming endpoint.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `page` - Page key from the URL path
///
/// # Returns
/// - `200 OK` - Published page content
/// - `400 Bad Request` - Unknown page key
/// - `403 Forbidden` - The gaming page was requested
/// - `404 Not Found` - Page has never been saved
#[utoipa::path(
    get,
    path = "/api/pages/{page}",
    tag = PAGE_TAG,
    params(
        ("page" = String, Path, description = "Page key (about, dashboard, projects, contact, documentation)")
    ),
    responses(
        (status = 200, description = "Published page content", body = PageContentDto),
        (status = 400, description = "Unknown page key", body = ErrorDto),
        (status = 403, description = "Page is gated behind Discord verification", body = ErrorDto),
        (status = 404, description = "Page has never been saved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let page = PageKind::parse(&page)?;

    if page == PageKind::Gaming {
        return Err(AuthError::GatedContent(page.as_str().to_string()).into());
    }

    let content = PageService::new(&state.db).get_published(page).await?;

    Ok((StatusCode::OK, Json(content.into_dto())))
}

/// Get the published site settings blob.
///
/// Returns an empty JSON object when settings have never been saved, so
/// clients can always render with defaults.
///
/// # Returns
/// - `200 OK` - Site settings blob (possibly empty object)
#[utoipa::path(
    get,
    path = "/api/site-settings",
    tag = PAGE_TAG,
    responses(
        (status = 200, description = "Published site settings blob", body = serde_json::Value),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_site_settings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let settings = PageService::new(&state.db).get_site_settings().await?;

    Ok((StatusCode::OK, Json(settings)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::server::{
        data::page::PageContentRepository, model::page::Revision,
        state::test_support::test_state,
    };
    use test_utils::builder::TestBuilder;

    /// Tests that the public page endpoint never serves the gaming page.
    ///
    /// Expected: Err(AuthError::GatedContent) even with published content
    #[tokio::test]
    async fn gaming_page_is_never_served_publicly() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::PageContent)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap().clone();

        PageContentRepository::new(&db)
            .upsert(
                PageKind::Gaming,
                Revision::Default,
                serde_json::json!({ "roster": [] }),
            )
            .await
            .unwrap();

        let state = test_state(db, "http://localhost:9");
        let result = get_page(State(state), Path("gaming".to_string())).await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::GatedContent(_)))
        ));
    }

    /// Tests that the gate also holds when the gaming page was never saved.
    ///
    /// Expected: Err(AuthError::GatedContent), not a 404
    #[tokio::test]
    async fn unsaved_gaming_page_is_still_gated() {
        let test = TestBuilder::new()
            .with_table(entity::prelude::PageContent)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap().clone();

        let state = test_state(db, "http://localhost:9");
        let result = get_page(State(state), Path("gaming".to_string())).await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::GatedContent(_)))
        ));
    }
}
