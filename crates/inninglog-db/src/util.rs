use sea_orm::{DbErr, SqlErr};

pub trait UniqueViolationExt {
    /// Whether the error was raised by a unique index or constraint
    fn is_unique_violation(&self) -> bool;
}

impl UniqueViolationExt for DbErr {
    fn is_unique_violation(&self) -> bool {
        matches!(self.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
    }
}
