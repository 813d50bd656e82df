mod mutation;
mod query;

pub use mutation::{Mutation, NewJournal};
pub use query::{JournalSortKey, JournalSummary, Page, PageRequest, Query, SortDirection, result_score_condition};
