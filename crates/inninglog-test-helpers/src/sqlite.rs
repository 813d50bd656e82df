use crate::TestDb;
use std::borrow::Cow;
use tempfile::TempDir;
use thiserror::Error;

/// File backed sqlite database living in a temp dir until dropped.
///
/// Unlike `sqlite::memory:` every pooled connection sees the same data.
pub struct SqliteDb {
    #[allow(dead_code)]
    temp_dir: TempDir,
    uri: String,
}

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SqliteDb {
    pub fn new() -> Result<Self, SqliteError> {
        let temp_dir = TempDir::with_prefix("inninglog-test-db")?;
        let path = temp_dir.path().join("db.sqlite");
        let path = path
            .to_str()
            .ok_or(std::io::Error::new(std::io::ErrorKind::InvalidData, "Invalid path"))?;
        let uri = format!("sqlite://{path}?mode=rwc");

        tracing::info!(uri, "created sqlite test db");
        Ok(Self { temp_dir, uri })
    }
}

impl TestDb for SqliteDb {
    fn db_uri(&self) -> Cow<'_, str> {
        self.uri.as_str().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test(tokio::test)]
    async fn test_connect_applies_schema() {
        let db = SqliteDb::new().unwrap();
        let conn = db.connect().await.unwrap();

        let members = inninglog_db::member::Query::find_by_token(&conn, "missing").await.unwrap();
        assert!(members.is_none());
    }

    #[test(tokio::test)]
    async fn test_connect_twice_keeps_data() {
        let db = SqliteDb::new().unwrap();
        let conn = db.connect().await.unwrap();
        inninglog_db::team::Mutation::create_or_update_team(&conn, "SSG".to_owned(), "SSG Landers".to_owned())
            .await
            .unwrap();
        drop(conn);

        let conn = db.connect().await.unwrap();
        let team = inninglog_db::team::Query::find_by_short_code(&conn, "SSG").await.unwrap();
        assert_eq!(team.map(|team| team.name).as_deref(), Some("SSG Landers"));
    }
}
