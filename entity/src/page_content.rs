use sea_orm::entity::prelude::*;

/// Editable page content blob, one row per (page, revision).
///
/// The `revision` column distinguishes the published row (`default`) from the
/// admin's work-in-progress row (`draft`). Rows are only ever upserted.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "page_content")]
pub struct Model {
    /// Page key (about, dashboard, projects, contact, documentation, gaming,
    /// site_settings).
    #[sea_orm(primary_key, auto_increment = false)]
    pub page: String,
    /// Row key within the page: `default` (published) or `draft`.
    #[sea_orm(primary_key, auto_increment = false)]
    pub revision: String,
    /// Opaque JSON document holding all editable text/structure for the page.
    pub body: Json,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
