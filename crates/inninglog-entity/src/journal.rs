use crate::result_score::ResultScore;
use sea_orm::entity::prelude::*;

/// One member's record of an attended game.
///
/// The outcome of the game is never stored, see [`Model::result_score`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "journal")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub member_id: Uuid,
    pub game_id: Option<String>,
    pub media_url: String,
    pub our_score: i32,
    pub their_score: i32,
    pub opponent_team_id: i32,
    pub stadium_id: i32,
    pub date: DateTime,
    pub emotion: String,
    pub review_text: String,
    pub is_public: bool,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    #[must_use]
    pub fn result_score(&self) -> ResultScore {
        ResultScore::classify(self.our_score, self.their_score)
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::member::Entity",
        from = "Column::MemberId",
        to = "crate::member::Column::Id"
    )]
    Member,
    #[sea_orm(
        belongs_to = "crate::team::Entity",
        from = "Column::OpponentTeamId",
        to = "crate::team::Column::Id"
    )]
    OpponentTeam,
    #[sea_orm(
        belongs_to = "crate::stadium::Entity",
        from = "Column::StadiumId",
        to = "crate::stadium::Column::Id"
    )]
    Stadium,
}

impl Related<crate::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<crate::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OpponentTeam.def()
    }
}

impl Related<crate::stadium::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stadium.def()
    }
}
