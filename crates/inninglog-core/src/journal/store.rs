use async_trait::async_trait;
use inninglog_db::journal::{JournalSummary, NewJournal, Page, PageRequest};
use inninglog_db::{journal, stadium, team, visited_game};
use inninglog_entity::journal::Model as JournalModel;
use inninglog_entity::result_score::ResultScore;
use inninglog_entity::stadium::Model as StadiumModel;
use inninglog_entity::team::Model as TeamModel;
use sea_orm::{DatabaseConnection, DbErr};
use uuid::Uuid;

#[async_trait]
pub trait JournalStore: Send + Sync {
    async fn create(&self, journal: NewJournal) -> Result<JournalModel, DbErr>;

    /// All journals of the member, oldest game first
    async fn list(&self, member_id: Uuid, result_score: Option<ResultScore>) -> Result<Vec<JournalSummary>, DbErr>;

    async fn page(
        &self,
        member_id: Uuid,
        result_score: Option<ResultScore>,
        request: PageRequest,
    ) -> Result<Page<JournalSummary>, DbErr>;
}

#[async_trait]
pub trait VisitedGameRegistrar: Send + Sync {
    /// Returns the id of the new visited game record
    async fn register(&self, member_id: Uuid, game_id: String, journal_id: Uuid) -> Result<Uuid, DbErr>;
}

#[async_trait]
pub trait ReferenceData: Send + Sync {
    async fn resolve_team(&self, short_code: &str) -> Result<Option<TeamModel>, DbErr>;
    async fn resolve_stadium(&self, short_code: &str) -> Result<Option<StadiumModel>, DbErr>;
}

/// Database backed implementation of all journal collaborators
#[derive(Debug, Clone)]
pub struct DbStore {
    conn: DatabaseConnection,
}

impl DbStore {
    #[must_use]
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl JournalStore for DbStore {
    async fn create(&self, journal: NewJournal) -> Result<JournalModel, DbErr> {
        journal::Mutation::create_journal(&self.conn, journal).await
    }

    async fn list(&self, member_id: Uuid, result_score: Option<ResultScore>) -> Result<Vec<JournalSummary>, DbErr> {
        let journals = journal::Query::list_member_journals(&self.conn, member_id, result_score).await?;
        journal::Query::load_summaries(&self.conn, journals).await
    }

    async fn page(
        &self,
        member_id: Uuid,
        result_score: Option<ResultScore>,
        request: PageRequest,
    ) -> Result<Page<JournalSummary>, DbErr> {
        let Page {
            items,
            page,
            page_size,
            total_elements,
            total_pages,
        } = journal::Query::page_member_journals(&self.conn, member_id, result_score, request).await?;
        Ok(Page {
            items: journal::Query::load_summaries(&self.conn, items).await?,
            page,
            page_size,
            total_elements,
            total_pages,
        })
    }
}

#[async_trait]
impl VisitedGameRegistrar for DbStore {
    async fn register(&self, member_id: Uuid, game_id: String, journal_id: Uuid) -> Result<Uuid, DbErr> {
        visited_game::Mutation::create_visited_game(&self.conn, member_id, game_id, journal_id)
            .await
            .map(|visited_game| visited_game.id)
    }
}

#[async_trait]
impl ReferenceData for DbStore {
    async fn resolve_team(&self, short_code: &str) -> Result<Option<TeamModel>, DbErr> {
        team::Query::find_by_short_code(&self.conn, short_code).await
    }

    async fn resolve_stadium(&self, short_code: &str) -> Result<Option<StadiumModel>, DbErr> {
        stadium::Query::find_by_short_code(&self.conn, short_code).await
    }
}
