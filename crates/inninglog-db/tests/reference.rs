mod common;

use crate::common::setup_db;
use inninglog_db::{stadium, team};
use test_log::test;

#[test(tokio::test)]
async fn test_create_or_update_team() {
    let db = &setup_db().await.unwrap();

    let created = team::Mutation::create_or_update_team(db, "LG".to_owned(), "LG Twins".to_owned())
        .await
        .unwrap();
    let renamed = team::Mutation::create_or_update_team(db, "LG".to_owned(), "LG Twins Seoul".to_owned())
        .await
        .unwrap();

    assert_eq!(created.id, renamed.id);
    assert_eq!(renamed.name, "LG Twins Seoul");

    let found = team::Query::find_by_short_code(db, "LG").await.unwrap();
    assert_eq!(found, Some(renamed));
    assert_eq!(team::Query::find_by_short_code(db, "XX").await.unwrap(), None);
}

#[test(tokio::test)]
async fn test_find_stadiums_by_ids() {
    let db = &setup_db().await.unwrap();

    let jamsil = stadium::Mutation::create_or_update_stadium(db, "JAM".to_owned(), "Jamsil".to_owned())
        .await
        .unwrap();
    let munhak = stadium::Mutation::create_or_update_stadium(db, "MUN".to_owned(), "Munhak".to_owned())
        .await
        .unwrap();
    stadium::Mutation::create_or_update_stadium(db, "SAJ".to_owned(), "Sajik".to_owned())
        .await
        .unwrap();

    let mut found = stadium::Query::find_by_ids(db, vec![jamsil.id, munhak.id]).await.unwrap();
    found.sort_by_key(|stadium| stadium.id);
    assert_eq!(found, vec![jamsil, munhak]);
    assert!(stadium::Query::find_by_ids(db, vec![]).await.unwrap().is_empty());
}
