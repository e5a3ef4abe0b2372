use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamRequest::Id))
                    .col(string(TeamRequest::UserId))
                    .col(text(TeamRequest::Message))
                    .col(string(TeamRequest::Status))
                    .col(timestamp_with_time_zone(TeamRequest::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamRequest {
    Table,
    Id,
    UserId,
    Message,
    Status,
    CreatedAt,
}
