use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscordLink::Table)
                    .if_not_exists()
                    .col(pk_auto(DiscordLink::Id))
                    .col(string_uniq(DiscordLink::UserId))
                    .col(string(DiscordLink::DiscordId))
                    .col(string(DiscordLink::Username))
                    .col(boolean(DiscordLink::InGuild))
                    .col(boolean(DiscordLink::HasRequiredRole))
                    .col(boolean(DiscordLink::IsOwner))
                    .col(timestamp_with_time_zone(DiscordLink::LinkedAt))
                    .col(timestamp_with_time_zone(DiscordLink::VerifiedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscordLink::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscordLink {
    Table,
    Id,
    UserId,
    DiscordId,
    Username,
    InGuild,
    HasRequiredRole,
    IsOwner,
    LinkedAt,
    VerifiedAt,
}
