pub mod access_token;
pub mod journal;
pub mod member;
pub mod result_score;
pub mod stadium;
pub mod team;
pub mod visited_game;
