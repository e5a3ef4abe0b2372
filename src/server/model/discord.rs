//! Discord link domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::discord::DiscordStatusDto,
    server::{error::AppError, util::parse::parse_u64_from_string},
};

/// Result of resolving a Discord user against the configured guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipSnapshot {
    pub in_guild: bool,
    pub has_required_role: bool,
    pub is_owner: bool,
}

impl MembershipSnapshot {
    /// Snapshot for a Discord user who is not a member of the guild.
    pub fn outsider() -> Self {
        Self {
            in_guild: false,
            has_required_role: false,
            is_owner: false,
        }
    }

    /// Whether the snapshot passes the guild role gate.
    ///
    /// The guild owner passes regardless of their role list.
    pub fn passes_role_gate(&self) -> bool {
        self.in_guild && (self.has_required_role || self.is_owner)
    }
}

/// A user's Discord account link with its denormalized membership snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordLink {
    pub user_id: String,
    pub discord_id: u64,
    pub username: String,
    pub membership: MembershipSnapshot,
    pub linked_at: DateTime<Utc>,
    pub verified_at: DateTime<Utc>,
}

impl DiscordLink {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(DiscordLink)` - The converted link
    /// - `Err(AppError::InternalErr(ParseStringId))` - Failed to convert the
    ///   stored Discord ID from String to u64
    pub fn from_entity(entity: entity::discord_link::Model) -> Result<Self, AppError> {
        let discord_id = parse_u64_from_string(entity.discord_id)?;

        Ok(Self {
            user_id: entity.user_id,
            discord_id,
            username: entity.username,
            membership: MembershipSnapshot {
                in_guild: entity.in_guild,
                has_required_role: entity.has_required_role,
                is_owner: entity.is_owner,
            },
            linked_at: entity.linked_at,
            verified_at: entity.verified_at,
        })
    }

    pub fn into_status_dto(self) -> DiscordStatusDto {
        DiscordStatusDto {
            linked: true,
            discord_id: Some(self.discord_id.to_string()),
            username: Some(self.username),
            in_guild: self.membership.in_guild,
            has_required_role: self.membership.has_required_role,
            is_owner: self.membership.is_owner,
            verified_at: Some(self.verified_at),
        }
    }
}

/// Parameters for upserting a Discord link after a callback or re-verification.
#[derive(Debug, Clone)]
pub struct UpsertDiscordLinkParams {
    pub user_id: String,
    pub discord_id: u64,
    pub username: String,
    pub membership: MembershipSnapshot,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn role_gate_requires_guild_membership() {
        let snapshot = MembershipSnapshot {
            in_guild: false,
            has_required_role: true,
            is_owner: false,
        };
        assert!(!snapshot.passes_role_gate());
    }

    #[test]
    fn role_gate_passes_with_required_role() {
        let snapshot = MembershipSnapshot {
            in_guild: true,
            has_required_role: true,
            is_owner: false,
        };
        assert!(snapshot.passes_role_gate());
    }

    #[test]
    fn guild_owner_passes_without_role() {
        let snapshot = MembershipSnapshot {
            in_guild: true,
            has_required_role: false,
            is_owner: true,
        };
        assert!(snapshot.passes_role_gate());
    }

    #[test]
    fn member_without_role_fails_gate() {
        let snapshot = MembershipSnapshot {
            in_guild: true,
            has_required_role: false,
            is_owner: false,
        };
        assert!(!snapshot.passes_role_gate());
    }
}
