mod contact;
mod discord_link;
mod page;
mod profile;
mod team_request;
