//! Data transfer objects shared across the API surface.
//!
//! DTOs define the JSON shapes exchanged with clients. Domain models are
//! converted to these at the controller boundary via `into_dto()`.

pub mod api;
pub mod contact;
pub mod discord;
pub mod page;
pub mod profile;
pub mod team_request;
