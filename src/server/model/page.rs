//! Page content domain models.
//!
//! Provides the typed page/revision keys and the content blob domain model.
//! Page keys are parsed from path parameters before any database access so
//! unknown keys never reach the data layer.

use chrono::{DateTime, Utc};

use crate::{model::page::PageContentDto, server::error::AppError};

/// The fixed set of content-managed pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    About,
    Dashboard,
    Projects,
    Contact,
    Documentation,
    Gaming,
    SiteSettings,
}

impl PageKind {
    /// Stable string key used as the database row key and in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Dashboard => "dashboard",
            Self::Projects => "projects",
            Self::Contact => "contact",
            Self::Documentation => "documentation",
            Self::Gaming => "gaming",
            Self::SiteSettings => "site_settings",
        }
    }

    /// Parses a page key from a path parameter.
    ///
    /// # Returns
    /// - `Ok(PageKind)` - Recognized page key
    /// - `Err(AppError::BadRequest)` - Unknown page key
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "about" => Ok(Self::About),
            "dashboard" => Ok(Self::Dashboard),
            "projects" => Ok(Self::Projects),
            "contact" => Ok(Self::Contact),
            "documentation" => Ok(Self::Documentation),
            "gaming" => Ok(Self::Gaming),
            "site_settings" => Ok(Self::SiteSettings),
            other => Err(AppError::BadRequest(format!("Unknown page '{}'", other))),
        }
    }
}

/// Row key within a page: the published row or the admin's draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Revision {
    #[default]
    Default,
    Draft,
}

impl Revision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Draft => "draft",
        }
    }

    /// Parses a revision from a query parameter, defaulting to `default`.
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value {
            None | Some("default") => Ok(Self::Default),
            Some("draft") => Ok(Self::Draft),
            Some(other) => Err(AppError::BadRequest(format!(
                "Unknown revision '{}'",
                other
            ))),
        }
    }
}

/// A stored page content blob.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub page: PageKind,
    pub revision: Revision,
    pub body: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

impl PageContent {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// The stored page and revision keys are re-parsed; rows written by the
    /// application always carry valid keys, so a failure here indicates direct
    /// database manipulation.
    pub fn from_entity(entity: entity::page_content::Model) -> Result<Self, AppError> {
        let page = PageKind::parse(&entity.page)
            .map_err(|_| AppError::InternalError(format!("Invalid stored page key '{}'", entity.page)))?;
        let revision = Revision::parse(Some(&entity.revision))
            .map_err(|_| {
                AppError::InternalError(format!("Invalid stored revision '{}'", entity.revision))
            })?;

        Ok(Self {
            page,
            revision,
            body: entity.body,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> PageContentDto {
        PageContentDto {
            page: self.page.as_str().to_string(),
            revision: self.revision.as_str().to_string(),
            body: self.body,
            updated_at: self.updated_at,
        }
    }
}
