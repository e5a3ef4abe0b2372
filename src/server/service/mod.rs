//! Business logic layer orchestrating controllers and data access.

pub mod auth;
pub mod contact;
pub mod discord;
pub mod gaming;
pub mod page;
pub mod profile;
pub mod team_request;
