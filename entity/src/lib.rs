//! SeaORM entity models for the homebase database schema.

pub mod contact_message;
pub mod discord_link;
pub mod page_content;
pub mod prelude;
pub mod profile;
pub mod team_request;
