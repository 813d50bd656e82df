use crate::convert::{FromDbModel, FromModel, IntoModel};
use inninglog_db::journal::{JournalSortKey, JournalSummary, SortDirection as DbSortDirection};
use inninglog_model::journal::query::{JournalSort, SortDirection};
use inninglog_model::journal::{CalendarJournal, SummaryJournal};

impl FromDbModel<JournalSummary> for CalendarJournal {
    fn from_db_model(model: JournalSummary) -> Self {
        Self {
            id: model.journal.id,
            date: model.journal.date,
            our_score: model.journal.our_score,
            their_score: model.journal.their_score,
            result_score: model.result_score.into_model(),
            opponent_team: model.opponent_team.into_model(),
            stadium: model.stadium.into_model(),
        }
    }
}

impl FromDbModel<JournalSummary> for SummaryJournal {
    fn from_db_model(model: JournalSummary) -> Self {
        let JournalSummary {
            journal,
            opponent_team,
            stadium,
            result_score,
        } = model;
        Self {
            id: journal.id,
            game_id: journal.game_id,
            date: journal.date,
            media_url: journal.media_url,
            our_score: journal.our_score,
            their_score: journal.their_score,
            result_score: result_score.into_model(),
            opponent_team: opponent_team.into_model(),
            stadium: stadium.into_model(),
            emotion: journal.emotion,
            review_text: journal.review_text,
            is_public: journal.is_public,
        }
    }
}

impl FromModel<JournalSort> for JournalSortKey {
    fn from_model(model: JournalSort) -> Self {
        match model {
            JournalSort::Date => Self::Date,
            JournalSort::CreatedAt => Self::CreatedAt,
        }
    }
}

impl FromModel<SortDirection> for DbSortDirection {
    fn from_model(model: SortDirection) -> Self {
        match model {
            SortDirection::Asc => Self::Asc,
            SortDirection::Desc => Self::Desc,
        }
    }
}
