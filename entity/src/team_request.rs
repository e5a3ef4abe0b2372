use sea_orm::entity::prelude::*;

/// Request to join the gaming team, referencing the caller's Discord link by
/// user id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Auth provider user id of the requester.
    pub user_id: String,
    pub message: String,
    /// Request lifecycle state: `pending`, `approved` or `rejected`.
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::discord_link::Entity",
        from = "Column::UserId",
        to = "super::discord_link::Column::UserId"
    )]
    DiscordLink,
}

impl Related<super::discord_link::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscordLink.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
