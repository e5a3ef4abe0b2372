use crate::server::{
    data::page::PageContentRepository,
    error::AppError,
    model::page::{PageKind, Revision},
};
use test_utils::builder::TestBuilder;

mod find;
mod upsert;
