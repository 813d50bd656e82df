pub mod query;

use crate::reference::{StadiumRef, TeamRef};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Outcome of a game, derived from the two scores of a journal
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResultScore {
    #[serde(alias = "승")]
    Win,
    #[serde(alias = "패")]
    Lose,
    #[serde(alias = "무승부")]
    Draw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewJournal {
    /// Id of the game in the game catalog, e.g. `20250622OBLG0`
    #[serde(default, alias = "gameId")]
    pub game_id: Option<String>,
    /// Url returned by the image upload
    pub media_url: String,
    #[serde(alias = "ourScore")]
    pub our_score: i32,
    #[serde(alias = "theirScore")]
    pub their_score: i32,
    #[serde(alias = "opponentTeamShortCode")]
    pub opponent_team_short_code: String,
    #[serde(alias = "stadiumShortCode")]
    pub stadium_short_code: String,
    #[schema(value_type = String, example = "2025-06-06T18:30:00")]
    pub date: NaiveDateTime,
    pub emotion: String,
    pub review_text: String,
    pub is_public: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct JournalId {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadedImage {
    pub url: String,
}

/// Calendar view of a journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalendarJournal {
    pub id: Uuid,
    #[schema(value_type = String)]
    pub date: NaiveDateTime,
    pub our_score: i32,
    pub their_score: i32,
    pub result_score: ResultScore,
    pub opponent_team: TeamRef,
    pub stadium: StadiumRef,
}

/// Summary view of a journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SummaryJournal {
    pub id: Uuid,
    pub game_id: Option<String>,
    #[schema(value_type = String)]
    pub date: NaiveDateTime,
    pub media_url: String,
    pub our_score: i32,
    pub their_score: i32,
    pub result_score: ResultScore,
    pub opponent_team: TeamRef,
    pub stadium: StadiumRef,
    pub emotion: String,
    pub review_text: String,
    pub is_public: bool,
}
