pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_profile_table;
mod m20260815_000002_create_page_content_table;
mod m20260815_000003_create_contact_message_table;
mod m20260815_000004_create_discord_link_table;
mod m20260815_000005_create_team_request_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_profile_table::Migration),
            Box::new(m20260815_000002_create_page_content_table::Migration),
            Box::new(m20260815_000003_create_contact_message_table::Migration),
            Box::new(m20260815_000004_create_discord_link_table::Migration),
            Box::new(m20260815_000005_create_team_request_table::Migration),
        ]
    }
}
