use inninglog_db::{stadium, team};
use sea_orm::{ConnectionTrait, DbErr};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ReferenceEntry {
    pub(crate) short_code: String,
    pub(crate) name: String,
}

/// Teams and stadiums journals can point to
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ReferenceData {
    #[serde(default)]
    pub(crate) teams: Vec<ReferenceEntry>,
    #[serde(default)]
    pub(crate) stadiums: Vec<ReferenceEntry>,
}

pub(crate) async fn load(path: &Path) -> anyhow::Result<ReferenceData> {
    let content = tokio::fs::read_to_string(path).await?;
    let data: ReferenceData = serde_yml::from_str(&content)?;
    tracing::info!(
        ?path,
        teams = data.teams.len(),
        stadiums = data.stadiums.len(),
        "loaded reference data"
    );
    Ok(data)
}

/// Inserts missing entries and renames existing ones, matched by short code
pub(crate) async fn seed<C: ConnectionTrait>(conn: &C, data: ReferenceData) -> Result<(), DbErr> {
    for ReferenceEntry { short_code, name } in data.teams {
        team::Mutation::create_or_update_team(conn, short_code, name).await?;
    }
    for ReferenceEntry { short_code, name } in data.stadiums {
        stadium::Mutation::create_or_update_stadium(conn, short_code, name).await?;
    }
    Ok(())
}
