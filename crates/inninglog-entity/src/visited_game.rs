use sea_orm::entity::prelude::*;

/// Links a member and a game to the journal documenting the visit.
///
/// `journal_id` is a plain back-reference: removing a journal does not touch the visit.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "visited_game")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub member_id: Uuid,
    pub game_id: String,
    pub journal_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::member::Entity",
        from = "Column::MemberId",
        to = "crate::member::Column::Id"
    )]
    Member,
}

impl Related<crate::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
