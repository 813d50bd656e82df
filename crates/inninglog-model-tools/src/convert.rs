//! Conversions between storage rows (`inninglog-entity`, `inninglog-db`) and the types served over http
//! (`inninglog-model`).
//!
//! Implement [`FromDbModel`] for outgoing and [`FromModel`] for incoming types, the `Into*` counterparts
//! come for free.

pub mod journal;
pub mod page;
pub mod reference;
pub mod result_score;

/// Storage to api direction.
pub trait FromDbModel<T>: Sized {
    fn from_db_model(model: T) -> Self;
}

pub trait IntoModel<T>: Sized {
    fn into_model(self) -> T;
}

/// Api to storage direction.
pub trait FromModel<T>: Sized {
    fn from_model(model: T) -> Self;
}

pub trait IntoDbModel<T>: Sized {
    fn into_db_model(self) -> T;
}

impl<T, U> IntoModel<U> for T
where
    U: FromDbModel<T>,
{
    fn into_model(self) -> U {
        U::from_db_model(self)
    }
}

impl<T, U> IntoDbModel<U> for T
where
    U: FromModel<T>,
{
    fn into_db_model(self) -> U {
        U::from_model(self)
    }
}
