pub mod journal;
pub mod member;
pub mod migration;
pub mod stadium;
pub mod team;
pub mod util;
pub mod visited_game;

pub use sea_orm;
