use crate::{stadium, team};
use futures_util::future::try_join;
use inninglog_entity::journal::{self, Entity as Journal, Model as JournalModel};
use inninglog_entity::result_score::ResultScore;
use inninglog_entity::stadium::Model as StadiumModel;
use inninglog_entity::team::Model as TeamModel;
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ItemsAndPagesNumber, Order, PaginatorTrait, QueryFilter,
    QueryOrder, Select,
};
use std::collections::{BTreeSet, HashMap};
use std::error::Error;
use uuid::Uuid;

/// Largest limit or offset the sql drivers can bind, they take signed 64 bit integers.
const MAX_BOUND: u64 = i64::MAX as u64;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum JournalSortKey {
    /// Date of the game
    #[default]
    Date,
    CreatedAt,
}

impl JournalSortKey {
    fn column(self) -> journal::Column {
        match self {
            Self::Date => journal::Column::Date,
            Self::CreatedAt => journal::Column::CreatedAt,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero based page index
    pub page: u64,
    pub page_size: u64,
    pub sort_key: JournalSortKey,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Pages past the end count as last as well
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages.saturating_sub(1)
    }
}

/// A journal together with the reference data it points to
#[derive(Debug, Clone, PartialEq)]
pub struct JournalSummary {
    pub journal: JournalModel,
    pub opponent_team: TeamModel,
    pub stadium: StadiumModel,
    pub result_score: ResultScore,
}

/// Builds the predicate selecting journals with the given outcome.
///
/// The outcome is never stored, so the comparison runs on the score columns inside the query.
/// Any pagination on top of it therefore counts the filtered rows only.
#[must_use]
pub fn result_score_condition(result_score: ResultScore) -> SimpleExpr {
    let ours = Expr::col((Journal, journal::Column::OurScore));
    let theirs = Expr::col((Journal, journal::Column::TheirScore));
    match result_score {
        ResultScore::Win => ours.gt(theirs),
        ResultScore::Lose => ours.lt(theirs),
        ResultScore::Draw => ours.eq(theirs),
    }
}

fn member_journals(member_id: Uuid, result_score: Option<ResultScore>) -> Select<Journal> {
    let query = Journal::find().filter(journal::Column::MemberId.eq(member_id));
    match result_score {
        Some(result_score) => query.filter(result_score_condition(result_score)),
        None => query,
    }
}

pub struct Query;

impl Query {
    /// All journals of a member ordered by game date, oldest first
    pub async fn list_member_journals<C: ConnectionTrait>(
        conn: &C,
        member_id: Uuid,
        result_score: Option<ResultScore>,
    ) -> Result<Vec<JournalModel>, DbErr> {
        tracing::trace!(%member_id, ?result_score, "loading member journals");
        member_journals(member_id, result_score)
            .order_by_asc(journal::Column::Date)
            .order_by_asc(journal::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load member journals"))
    }

    pub async fn page_member_journals<C: ConnectionTrait>(
        conn: &C,
        member_id: Uuid,
        result_score: Option<ResultScore>,
        request: PageRequest,
    ) -> Result<Page<JournalModel>, DbErr> {
        if request.page_size == 0 {
            return Err(DbErr::Custom("page size must be greater than zero".to_owned()));
        }

        tracing::trace!(%member_id, ?result_score, ?request, "loading member journal page");
        // A limit above the bindable range selects every row anyway
        let limit = request.page_size.min(MAX_BOUND);
        let paginator = member_journals(member_id, result_score)
            .order_by(request.sort_key.column(), request.direction.into())
            .order_by(journal::Column::Id, request.direction.into())
            .paginate(conn, limit);

        let ItemsAndPagesNumber {
            number_of_items,
            number_of_pages,
        } = paginator
            .num_items_and_pages()
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to count member journals"))?;

        let journals = match request.page.checked_mul(limit) {
            Some(offset) if offset <= MAX_BOUND => paginator.fetch_page(request.page).await.inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load member journal page")
            })?,
            // The offset lies past any row that could exist
            _ => Vec::new(),
        };

        Ok(Page {
            items: journals,
            page: request.page,
            page_size: request.page_size,
            total_elements: number_of_items,
            total_pages: number_of_pages,
        })
    }

    /// Loads a single journal. Nothing on the request path reads journals by id, callers are
    /// tooling and tests checking what a creation left behind.
    pub async fn find_journal_by_id<C: ConnectionTrait>(
        conn: &C,
        journal_id: Uuid,
    ) -> Result<Option<JournalModel>, DbErr> {
        Journal::find_by_id(journal_id)
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, %journal_id, "failed to load journal"))
    }

    /// Resolves the opponent team and stadium of every journal, keeping the order
    pub async fn load_summaries<C: ConnectionTrait>(
        conn: &C,
        journals: Vec<JournalModel>,
    ) -> Result<Vec<JournalSummary>, DbErr> {
        let team_ids: BTreeSet<_> = journals.iter().map(|journal| journal.opponent_team_id).collect();
        let stadium_ids: BTreeSet<_> = journals.iter().map(|journal| journal.stadium_id).collect();

        let (teams, stadiums) = try_join(
            team::Query::find_by_ids(conn, team_ids.into_iter().collect()),
            stadium::Query::find_by_ids(conn, stadium_ids.into_iter().collect()),
        )
        .await?;
        let teams: HashMap<_, _> = teams.into_iter().map(|team| (team.id, team)).collect();
        let stadiums: HashMap<_, _> = stadiums.into_iter().map(|stadium| (stadium.id, stadium)).collect();

        journals
            .into_iter()
            .map(|journal| {
                let opponent_team = teams.get(&journal.opponent_team_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!("Team {} not found", journal.opponent_team_id))
                })?;
                let stadium = stadiums
                    .get(&journal.stadium_id)
                    .cloned()
                    .ok_or_else(|| DbErr::RecordNotFound(format!("Stadium {} not found", journal.stadium_id)))?;
                Ok(JournalSummary {
                    result_score: journal.result_score(),
                    journal,
                    opponent_team,
                    stadium,
                })
            })
            .collect()
    }
}
