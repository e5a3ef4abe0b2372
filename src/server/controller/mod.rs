//! HTTP request handlers.
//!
//! Controllers parse and validate request input, enforce authentication via
//! `AuthGuard`, delegate to the service layer, and convert domain models to
//! DTOs for the response. No business logic lives here.

pub mod admin;
pub mod contact;
pub mod discord;
pub mod gaming;
pub mod page;
pub mod profile;
pub mod status;
pub mod team_request;

use serde::Deserialize;

/// Pagination query parameters shared by the admin list endpoints.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl PaginationParams {
    /// Page size with `entries=0` clamped to one row, since the paginator
    /// divides by the page size when computing totals.
    pub fn entries(&self) -> u64 {
        self.entries.max(1)
    }
}

fn default_entries() -> u64 {
    10
}
