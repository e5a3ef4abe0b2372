use crate::server::{
    data::profile::ProfileRepository,
    model::{auth::AuthUser, profile::UpsertProfileParams},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod find_by_user_id;
mod upsert;
