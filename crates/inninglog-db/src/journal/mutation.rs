use chrono::{NaiveDateTime, Utc};
use inninglog_entity::journal::{self, Model as JournalModel};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct NewJournal {
    pub member_id: Uuid,
    pub game_id: Option<String>,
    pub media_url: String,
    pub our_score: i32,
    pub their_score: i32,
    pub opponent_team_id: i32,
    pub stadium_id: i32,
    pub date: NaiveDateTime,
    pub emotion: String,
    pub review_text: String,
    pub is_public: bool,
}

pub struct Mutation;

impl Mutation {
    pub async fn create_journal<C: ConnectionTrait>(conn: &C, journal: NewJournal) -> Result<JournalModel, DbErr> {
        let NewJournal {
            member_id,
            game_id,
            media_url,
            our_score,
            their_score,
            opponent_team_id,
            stadium_id,
            date,
            emotion,
            review_text,
            is_public,
        } = journal;

        let journal = journal::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            member_id: ActiveValue::Set(member_id),
            game_id: ActiveValue::Set(game_id),
            media_url: ActiveValue::Set(media_url),
            our_score: ActiveValue::Set(our_score),
            their_score: ActiveValue::Set(their_score),
            opponent_team_id: ActiveValue::Set(opponent_team_id),
            stadium_id: ActiveValue::Set(stadium_id),
            date: ActiveValue::Set(date),
            emotion: ActiveValue::Set(emotion),
            review_text: ActiveValue::Set(review_text),
            is_public: ActiveValue::Set(is_public),
            created_at: ActiveValue::Set(Utc::now().fixed_offset()),
        };

        journal
            .insert(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %member_id, "failed to create journal"))
    }
}
