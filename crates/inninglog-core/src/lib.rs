pub mod journal;
pub mod status;
pub mod upload;
