use crate::journal::ResultScore;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum JournalSort {
    /// Date of the game
    #[default]
    Date,
    #[serde(alias = "createdAt")]
    CreatedAt,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalendarQuery {
    /// Only return journals with this outcome
    #[serde(default, rename = "resultScore")]
    #[param(inline)]
    pub result_score: Option<ResultScore>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SummaryQuery {
    /// Zero based page index
    #[serde(default)]
    pub page: Option<u64>,
    /// Page size, 10 if not set
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    #[param(inline)]
    pub sort: Option<JournalSort>,
    #[serde(default)]
    #[param(inline)]
    pub direction: Option<SortDirection>,
    #[serde(default, rename = "resultScore")]
    #[param(inline)]
    pub result_score: Option<ResultScore>,
}
