use crate::server::{
    data::contact::ContactMessageRepository, model::contact::NewContactMessageParams,
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod get_paginated;
