mod sqlite;

pub use sqlite::*;

use inninglog_db::migration;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::borrow::Cow;

pub trait TestDb {
    fn db_uri(&self) -> Cow<'_, str>;

    /// Connects to the database and applies the schema
    #[allow(async_fn_in_trait)]
    async fn connect(&self) -> Result<DatabaseConnection, DbErr> {
        let mut options = ConnectOptions::new(self.db_uri().into_owned());
        options.max_connections(4).sqlx_logging(false);
        let conn = Database::connect(options).await?;
        migration::run(&conn).await?;
        Ok(conn)
    }
}
