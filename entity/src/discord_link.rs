use sea_orm::entity::prelude::*;

/// Link between an application user and a Discord account, with a denormalized
/// snapshot of the guild membership/role checks taken at verification time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "discord_link")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Auth provider user id of the linked account.
    #[sea_orm(unique)]
    pub user_id: String,
    /// Discord user id, stored as a string to avoid i64 truncation.
    pub discord_id: String,
    pub username: String,
    pub in_guild: bool,
    pub has_required_role: bool,
    /// Guild owners pass the role gate regardless of their role list.
    pub is_owner: bool,
    pub linked_at: DateTimeUtc,
    pub verified_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::team_request::Entity> for Entity {
    fn to() -> RelationDef {
        super::team_request::Relation::DiscordLink.def().rev()
    }
}

impl ActiveModelBehavior for ActiveModel {}
