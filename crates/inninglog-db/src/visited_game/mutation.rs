use chrono::Utc;
use inninglog_entity::visited_game::{self, Model as VisitedGameModel};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Records that the member attended the game.
    ///
    /// Fails with a unique constraint violation if the member already has a visit for the game.
    pub async fn create_visited_game<C: ConnectionTrait>(
        conn: &C,
        member_id: Uuid,
        game_id: String,
        journal_id: Uuid,
    ) -> Result<VisitedGameModel, DbErr> {
        let visited_game = visited_game::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            member_id: ActiveValue::Set(member_id),
            game_id: ActiveValue::Set(game_id),
            journal_id: ActiveValue::Set(journal_id),
            created_at: ActiveValue::Set(Utc::now().fixed_offset()),
        };

        visited_game.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %member_id, %journal_id, "failed to create visited game");
        })
    }
}
