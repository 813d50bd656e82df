pub mod create;
pub mod error;
pub mod query;
pub mod store;

pub use inninglog_entity::result_score::ResultScore;
