use crate::journal::error::CreateJournalError;
use crate::journal::store::{JournalStore, ReferenceData, VisitedGameRegistrar};
use inninglog_db::journal;
use inninglog_db::util::UniqueViolationExt;
use inninglog_model::journal::NewJournal;
use std::error::Error;
use tracing::instrument;
use uuid::Uuid;

fn validate(request: &NewJournal) -> Result<(), CreateJournalError> {
    if request.our_score < 0 || request.their_score < 0 {
        return Err(CreateJournalError::Validation("scores must not be negative".to_owned()));
    }
    let required = [
        ("media_url", request.media_url.as_str()),
        ("opponent_team_short_code", request.opponent_team_short_code.as_str()),
        ("stadium_short_code", request.stadium_short_code.as_str()),
        ("emotion", request.emotion.as_str()),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(CreateJournalError::Validation(format!("{field} must not be empty")));
    }
    if request.game_id.as_deref().is_some_and(|game_id| game_id.trim().is_empty()) {
        return Err(CreateJournalError::Validation("game_id must not be empty".to_owned()));
    }
    Ok(())
}

/// Creates journals and registers the attended game alongside.
///
/// The two writes are not atomic. When registering the visited game fails, the journal stays
/// and the returned error carries its id.
pub struct JournalCreationCoordinator<S, V, R> {
    journals: S,
    visited_games: V,
    reference_data: R,
}

impl<S, V, R> JournalCreationCoordinator<S, V, R>
where
    S: JournalStore,
    V: VisitedGameRegistrar,
    R: ReferenceData,
{
    pub fn new(journals: S, visited_games: V, reference_data: R) -> Self {
        Self {
            journals,
            visited_games,
            reference_data,
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create_journal(&self, member_id: Uuid, request: NewJournal) -> Result<Uuid, CreateJournalError> {
        validate(&request)?;

        let opponent_team = self
            .reference_data
            .resolve_team(&request.opponent_team_short_code)
            .await?
            .ok_or_else(|| CreateJournalError::TeamNotFound(request.opponent_team_short_code.clone()))?;
        let stadium = self
            .reference_data
            .resolve_stadium(&request.stadium_short_code)
            .await?
            .ok_or_else(|| CreateJournalError::StadiumNotFound(request.stadium_short_code.clone()))?;

        let created = self
            .journals
            .create(journal::NewJournal {
                member_id,
                game_id: request.game_id.clone(),
                media_url: request.media_url,
                our_score: request.our_score,
                their_score: request.their_score,
                opponent_team_id: opponent_team.id,
                stadium_id: stadium.id,
                date: request.date,
                emotion: request.emotion,
                review_text: request.review_text,
                is_public: request.is_public,
            })
            .await?;
        let journal_id = created.id;
        tracing::debug!(%journal_id, "journal created");

        let Some(game_id) = request.game_id else {
            return Ok(journal_id);
        };

        match self.visited_games.register(member_id, game_id, journal_id).await {
            Ok(visited_game_id) => {
                tracing::debug!(%journal_id, %visited_game_id, "visited game registered");
                Ok(journal_id)
            }
            Err(error) if error.is_unique_violation() => {
                tracing::warn!(%journal_id, "game already registered as visited");
                Err(CreateJournalError::DuplicateVisitedGame {
                    journal_id,
                    source: error,
                })
            }
            Err(error) => {
                tracing::error!(
                    error = &error as &dyn Error,
                    %journal_id,
                    "journal saved without its visited game"
                );
                Err(CreateJournalError::VisitedGameRegistrationFailed {
                    journal_id,
                    source: error,
                })
            }
        }
    }
}
