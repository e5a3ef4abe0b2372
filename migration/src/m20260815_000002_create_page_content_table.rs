use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PageContent::Table)
                    .if_not_exists()
                    .col(string(PageContent::Page))
                    .col(string(PageContent::Revision))
                    .col(json(PageContent::Body))
                    .col(timestamp_with_time_zone(PageContent::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .col(PageContent::Page)
                            .col(PageContent::Revision),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PageContent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PageContent {
    Table,
    Page,
    Revision,
    Body,
    UpdatedAt,
}
