//! Team request repository for database operations.
//!
//! This module provides the `TeamRequestRepository` for creating team join
//! requests and listing them for admins. Requests reference the caller's
//! Discord link by user id; the admin listing joins the link to show the
//! requester's Discord username.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::team_request::{TeamRequest, TeamRequestStatus};

/// One page of team requests plus pagination totals.
pub struct PaginatedTeamRequests {
    pub requests: Vec<TeamRequest>,
    pub total_items: u64,
    pub total_pages: u64,
}

/// Repository providing database operations for team requests.
pub struct TeamRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRequestRepository<'a> {
    /// Creates a new TeamRequestRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a pending team request for a user.
    ///
    /// # Arguments
    /// - `user_id` - Auth provider user id of the requester
    /// - `message` - The request message
    ///
    /// # Returns
    /// - `Ok(TeamRequest)` - The created request (without the joined username)
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, user_id: &str, message: String) -> Result<TeamRequest, DbErr> {
        let entity = entity::team_request::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            message: ActiveValue::Set(message),
            status: ActiveValue::Set(TeamRequestStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TeamRequest::from_entity(entity, None))
    }

    /// Checks whether a user already has a pending request.
    ///
    /// # Arguments
    /// - `user_id` - Auth provider user id of the requester
    ///
    /// # Returns
    /// - `Ok(true)` - A pending request exists
    /// - `Ok(false)` - No pending request
    /// - `Err(DbErr)` - Database error during count query
    pub async fn has_pending(&self, user_id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::TeamRequest::find()
            .filter(entity::team_request::Column::UserId.eq(user_id))
            .filter(
                entity::team_request::Column::Status.eq(TeamRequestStatus::Pending.as_str()),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of team requests with their linked Discord usernames,
    /// newest first.
    ///
    /// # Arguments
    /// - `page` - Zero-based page number
    /// - `entries` - Page size
    ///
    /// # Returns
    /// - `Ok(PaginatedTeamRequests)` - Requests and pagination totals
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        page: u64,
        entries: u64,
    ) -> Result<PaginatedTeamRequests, DbErr> {
        let paginator = entity::prelude::TeamRequest::find()
            .find_also_related(entity::prelude::DiscordLink)
            .order_by_desc(entity::team_request::Column::CreatedAt)
            .paginate(self.db, entries);

        let totals = paginator.num_items_and_pages().await?;
        let requests = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(|(request, link)| TeamRequest::from_entity(request, link))
            .collect();

        Ok(PaginatedTeamRequests {
            requests,
            total_items: totals.number_of_items,
            total_pages: totals.number_of_pages,
        })
    }
}
