use crate::server::data::team_request::TeamRequestRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod get_paginated;
mod has_pending;
