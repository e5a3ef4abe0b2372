use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post, put},
    Json, Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;

use crate::{
    model,
    server::{
        config::Config,
        controller::{admin, contact, discord, gaming, page, profile, status, team_request},
        error::{config::ConfigError, AppError},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        page::get_page,
        page::get_site_settings,
        contact::submit_contact,
        status::health,
        profile::get_profile,
        profile::upsert_profile,
        team_request::create_team_request,
        discord::connect,
        discord::callback,
        discord::status,
        gaming::get_live_content,
        admin::get_page,
        admin::save_page_draft,
        admin::publish_page,
        admin::save_site_settings,
        admin::get_contact_messages,
        admin::get_team_requests,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::page::PageContentDto,
        model::page::SavePageDto,
        model::profile::ProfileDto,
        model::profile::UpsertProfileDto,
        model::contact::SubmitContactDto,
        model::contact::ContactMessageDto,
        model::contact::PaginatedContactMessagesDto,
        model::team_request::CreateTeamRequestDto,
        model::team_request::TeamRequestDto,
        model::team_request::PaginatedTeamRequestsDto,
        model::discord::DiscordConnectDto,
        model::discord::DiscordStatusDto,
    ))
)]
struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Builds the application router.
///
/// The contact route sits in its own sub-router so the IP rate limiter only
/// applies there. Everything else shares the CORS layer keyed to the app's
/// public origin.
pub fn router(config: &Config) -> Result<Router<AppState>, AppError> {
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.contact_rate_window_secs)
            .burst_size(config.contact_rate_burst)
            .finish()
            .ok_or(ConfigError::InvalidRateLimit)?,
    );

    let contact_routes = Router::new()
        .route("/api/contact", post(contact::submit_contact))
        .layer(GovernorLayer::new(governor_config));

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .app_url
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "APP_URL".to_string(),
                    value: config.app_url.clone(),
                })?,
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let router = Router::new()
        .route("/api/health", get(status::health))
        .route("/api/openapi.json", get(openapi_json))
        .route("/api/pages/{page}", get(page::get_page))
        .route("/api/site-settings", get(page::get_site_settings))
        .route(
            "/api/profile",
            get(profile::get_profile).put(profile::upsert_profile),
        )
        .route("/api/team-request", post(team_request::create_team_request))
        .route("/api/discord/connect", get(discord::connect))
        .route("/api/discord/callback", get(discord::callback))
        .route("/api/discord/status", get(discord::status))
        .route("/api/gaming/live", get(gaming::get_live_content))
        .route(
            "/api/admin/pages/{page}",
            get(admin::get_page).put(admin::save_page_draft),
        )
        .route("/api/admin/pages/{page}/publish", post(admin::publish_page))
        .route("/api/admin/site-settings", put(admin::save_site_settings))
        .route("/api/admin/messages", get(admin::get_contact_messages))
        .route("/api/admin/team-requests", get(admin::get_team_requests))
        .merge(contact_routes)
        .layer(cors);

    Ok(router)
}
