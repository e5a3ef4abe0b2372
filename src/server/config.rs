use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED),
    8080,
);
const DEFAULT_CONTACT_RATE_WINDOW_SECS: u64 = 60;
const DEFAULT_CONTACT_RATE_BURST: u32 = 5;

pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_url: String,

    /// Public base URL of the application, used for post-callback redirects
    /// and CORS.
    pub app_url: String,

    /// Base URL of the hosted auth provider's REST API.
    pub auth_api_url: String,
    /// Service API key sent alongside bearer tokens when verifying them.
    pub auth_api_key: String,
    /// The single allow-listed admin email, compared exactly.
    pub admin_email: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub discord_bot_token: String,
    pub discord_guild_id: u64,
    pub discord_required_role_id: u64,

    /// Secret used to sign the opaque OAuth state tokens.
    pub state_signing_secret: String,

    /// Seconds to replenish one contact submission per client IP.
    pub contact_rate_window_secs: u64,
    /// Submissions a client IP may burst before the limiter kicks in.
    pub contact_rate_burst: u32,

    pub discord_auth_url: String,
    pub discord_token_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            bind_addr: parse_env("BIND_ADDR", DEFAULT_BIND_ADDR)?,
            database_url: require_env("DATABASE_URL")?,
            app_url: require_env("APP_URL")?,
            auth_api_url: require_env("AUTH_API_URL")?,
            auth_api_key: require_env("AUTH_API_KEY")?,
            admin_email: require_env("ADMIN_EMAIL")?,
            discord_client_id: require_env("DISCORD_CLIENT_ID")?,
            discord_client_secret: require_env("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: require_env("DISCORD_REDIRECT_URL")?,
            discord_bot_token: require_env("DISCORD_BOT_TOKEN")?,
            discord_guild_id: require_parsed_env("DISCORD_GUILD_ID")?,
            discord_required_role_id: require_parsed_env("DISCORD_REQUIRED_ROLE_ID")?,
            state_signing_secret: require_env("STATE_SIGNING_SECRET")?,
            contact_rate_window_secs: parse_env(
                "CONTACT_RATE_WINDOW_SECS",
                DEFAULT_CONTACT_RATE_WINDOW_SECS,
            )?,
            contact_rate_burst: parse_env("CONTACT_RATE_BURST", DEFAULT_CONTACT_RATE_BURST)?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn require_parsed_env<T: std::str::FromStr>(name: &str) -> Result<T, ConfigError> {
    let value = require_env(name)?;
    value.parse().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}

/// Reads an optional environment variable, falling back to `default` when the
/// variable is unset.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
