use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CreateJournalError {
    #[error("Invalid journal: {0}")]
    Validation(String),

    #[error("Unknown team {0}")]
    TeamNotFound(String),

    #[error("Unknown stadium {0}")]
    StadiumNotFound(String),

    #[error(transparent)]
    Storage(#[from] DbErr),

    /// The journal was stored, only the visited game is missing
    #[error("Journal {journal_id} was saved but the visited game could not be registered")]
    VisitedGameRegistrationFailed {
        journal_id: Uuid,
        #[source]
        source: DbErr,
    },

    /// The journal was stored, the member already had a visit recorded for the game
    #[error("Journal {journal_id} was saved but the game was already registered as visited")]
    DuplicateVisitedGame {
        journal_id: Uuid,
        #[source]
        source: DbErr,
    },
}

impl CreateJournalError {
    /// Id of the journal that was persisted before the error occurred
    #[must_use]
    pub fn journal_id(&self) -> Option<Uuid> {
        match self {
            Self::VisitedGameRegistrationFailed { journal_id, .. } | Self::DuplicateVisitedGame { journal_id, .. } => {
                Some(*journal_id)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum QueryJournalError {
    #[error("Invalid query: {0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] DbErr),
}
