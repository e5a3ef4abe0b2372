use serenity::all::{GuildId, RoleId, UserId};
use serenity::http::{Http, HttpError};

use crate::server::{error::AppError, model::discord::MembershipSnapshot};

/// Resolves a Discord user's standing in the configured guild via the bot
/// token.
///
/// Uses bot-authenticated lookups rather than the user's OAuth token so the
/// answer stays fresh on later re-checks, after the user token is long gone.
pub struct GuildMembershipResolver<'a> {
    discord_http: &'a Http,
    guild_id: GuildId,
    required_role_id: RoleId,
}

impl<'a> GuildMembershipResolver<'a> {
    pub fn new(discord_http: &'a Http, guild_id: u64, required_role_id: u64) -> Self {
        Self {
            discord_http,
            guild_id: GuildId::new(guild_id),
            required_role_id: RoleId::new(required_role_id),
        }
    }

    /// Resolves the membership snapshot for a Discord user.
    ///
    /// A 404 from the member lookup means the user is not in the guild and is
    /// reported as an outsider rather than an error. Guild ownership is
    /// recorded alongside the role so owners pass the gate without holding
    /// the required role.
    ///
    /// # Arguments
    /// - `discord_user_id` - Discord user id to look up
    ///
    /// # Returns
    /// - `Ok(MembershipSnapshot)` - The user's guild standing
    /// - `Err(AppError)` - Discord API failure other than member-not-found
    pub async fn resolve(&self, discord_user_id: u64) -> Result<MembershipSnapshot, AppError> {
        let user_id = UserId::new(discord_user_id);

        let member = match self.discord_http.get_member(self.guild_id, user_id).await {
            Ok(member) => member,
            Err(serenity::Error::Http(HttpError::UnsuccessfulRequest(response)))
                if response.status_code.as_u16() == 404 =>
            {
                return Ok(MembershipSnapshot::outsider());
            }
            Err(err) => return Err(err.into()),
        };

        let has_required_role = member.roles.contains(&self.required_role_id);

        let guild = self.discord_http.get_guild(self.guild_id).await?;
        let is_owner = guild.owner_id == user_id;

        Ok(MembershipSnapshot {
            in_guild: true,
            has_required_role,
            is_owner,
        })
    }
}
