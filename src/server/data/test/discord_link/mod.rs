use crate::server::{
    data::discord_link::DiscordLinkRepository,
    error::AppError,
    model::discord::{MembershipSnapshot, UpsertDiscordLinkParams},
};
use test_utils::builder::TestBuilder;

mod find_by_user_id;
mod upsert;
