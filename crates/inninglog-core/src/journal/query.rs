use crate::journal::error::QueryJournalError;
use crate::journal::store::JournalStore;
use inninglog_db::journal::{JournalSummary, Page, PageRequest};
use inninglog_entity::result_score::ResultScore;
use tracing::instrument;
use uuid::Uuid;

/// Read side of the journals: calendar and paged summary listings of one member
pub struct JournalQueryService<S> {
    journals: S,
}

impl<S: JournalStore> JournalQueryService<S> {
    pub fn new(journals: S) -> Self {
        Self { journals }
    }

    /// Every journal of the member ordered by game date ascending. No match yields an empty list.
    #[instrument(skip(self))]
    pub async fn list_for_calendar(
        &self,
        member_id: Uuid,
        result_score: Option<ResultScore>,
    ) -> Result<Vec<JournalSummary>, QueryJournalError> {
        Ok(self.journals.list(member_id, result_score).await?)
    }

    /// One page of the member's journals. Pages past the end are empty but still carry the totals.
    #[instrument(skip(self))]
    pub async fn list_for_summary(
        &self,
        member_id: Uuid,
        request: PageRequest,
        result_score: Option<ResultScore>,
    ) -> Result<Page<JournalSummary>, QueryJournalError> {
        if request.page_size == 0 {
            return Err(QueryJournalError::Validation("page size must be greater than zero".to_owned()));
        }
        Ok(self.journals.page(member_id, result_score, request).await?)
    }
}
