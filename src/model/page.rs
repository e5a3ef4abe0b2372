use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A page content blob as returned by the API.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PageContentDto {
    /// Page key, e.g. `about` or `projects`.
    pub page: String,
    /// Revision the blob was read from: `default` (published) or `draft`.
    pub revision: String,
    /// The opaque JSON document for the page.
    pub body: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

/// Request body for saving a page draft or the site settings.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct SavePageDto {
    /// The full JSON document to store. Must be a JSON object.
    pub body: serde_json::Value,
}
