use inninglog_entity::visited_game::{self, Entity as VisitedGame, Model as VisitedGameModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    /// Every visited game of a member, oldest registration first. Used to inspect the outcome of
    /// journal creation, the api has no listing of visited games.
    pub async fn get_member_visited_games<C: ConnectionTrait>(
        conn: &C,
        member_id: Uuid,
    ) -> Result<Vec<VisitedGameModel>, DbErr> {
        VisitedGame::find()
            .filter(visited_game::Column::MemberId.eq(member_id))
            .order_by_asc(visited_game::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load visited games"))
    }

    pub async fn find_by_journal<C: ConnectionTrait>(
        conn: &C,
        journal_id: Uuid,
    ) -> Result<Option<VisitedGameModel>, DbErr> {
        VisitedGame::find()
            .filter(visited_game::Column::JournalId.eq(journal_id))
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %journal_id, "failed to load visited game"))
    }
}
