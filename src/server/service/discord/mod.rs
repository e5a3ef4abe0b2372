//! Discord account linking and guild role verification.
//!
//! The flow is the standard OAuth callback pattern with a stateless twist:
//! instead of session-stored CSRF tokens, the `state` parameter is an opaque
//! HMAC-signed token binding the flow to the initiating user (see `state`).
//!
//! - `oauth` - Authorize URL construction, code exchange, and the
//!   `/users/@me` fetch
//! - `membership` - Guild member/owner/role resolution with the bot token
//! - `state` - Signed state token encode/verify

pub mod membership;
pub mod oauth;
pub mod state;

use crate::server::{
    data::discord_link::DiscordLinkRepository,
    error::AppError,
    model::discord::{DiscordLink, UpsertDiscordLinkParams},
    service::discord::membership::GuildMembershipResolver,
    state::AppState,
};

/// Orchestrates the Discord link lifecycle: connect, callback, status.
pub struct DiscordLinkService<'a> {
    state: &'a AppState,
}

impl<'a> DiscordLinkService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Completes the OAuth callback for the user bound into the state token.
    ///
    /// Exchanges the authorization code, fetches the Discord identity,
    /// resolves guild membership, and stores the link snapshot.
    ///
    /// # Arguments
    /// - `user_id` - Auth provider user id recovered from the verified state
    /// - `code` - Authorization code from the callback query
    ///
    /// # Returns
    /// - `Ok(DiscordLink)` - The stored link with its fresh snapshot
    /// - `Err(AppError)` - Exchange, Discord API, or database failure
    pub async fn complete_callback(
        &self,
        user_id: String,
        code: String,
    ) -> Result<DiscordLink, AppError> {
        let discord_user = self.exchange_and_fetch_user(code).await?;
        let discord_id = discord_user.id.get();

        let resolver = GuildMembershipResolver::new(
            &self.state.discord_http,
            self.state.config.discord_guild_id,
            self.state.config.discord_required_role_id,
        );
        let membership = resolver.resolve(discord_id).await?;

        tracing::info!(
            "Linked Discord account {} for user {} (in_guild: {}, role: {}, owner: {})",
            discord_id,
            user_id,
            membership.in_guild,
            membership.has_required_role,
            membership.is_owner
        );

        let repo = DiscordLinkRepository::new(&self.state.db);
        repo.upsert(UpsertDiscordLinkParams {
            user_id,
            discord_id,
            username: discord_user.name,
            membership,
        })
        .await
    }

    /// Gets the caller's link snapshot, optionally re-resolving it first.
    ///
    /// # Arguments
    /// - `user_id` - Auth provider user id of the caller
    /// - `refresh` - When true, re-check membership against Discord before
    ///   answering
    ///
    /// # Returns
    /// - `Ok(Some(DiscordLink))` - The (possibly refreshed) link
    /// - `Ok(None)` - The caller has no link
    /// - `Err(AppError)` - Discord API or database failure
    pub async fn status(
        &self,
        user_id: &str,
        refresh: bool,
    ) -> Result<Option<DiscordLink>, AppError> {
        let repo = DiscordLinkRepository::new(&self.state.db);

        let Some(link) = repo.find_by_user_id(user_id).await? else {
            return Ok(None);
        };

        if !refresh {
            return Ok(Some(link));
        }

        let resolver = GuildMembershipResolver::new(
            &self.state.discord_http,
            self.state.config.discord_guild_id,
            self.state.config.discord_required_role_id,
        );
        let membership = resolver.resolve(link.discord_id).await?;

        let refreshed = repo
            .upsert(UpsertDiscordLinkParams {
                user_id: link.user_id,
                discord_id: link.discord_id,
                username: link.username,
                membership,
            })
            .await?;

        Ok(Some(refreshed))
    }
}
