pub mod journal;
pub mod page;
pub mod reference;
pub mod response;
pub mod status;
