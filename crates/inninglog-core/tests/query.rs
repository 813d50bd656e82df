mod common;

use crate::common::{create_member, new_journal, setup_db};
use inninglog_core::journal::ResultScore;
use inninglog_core::journal::create::JournalCreationCoordinator;
use inninglog_core::journal::error::QueryJournalError;
use inninglog_core::journal::query::JournalQueryService;
use inninglog_core::journal::store::DbStore;
use inninglog_db::journal::{JournalSortKey, PageRequest, SortDirection};
use sea_orm::DatabaseConnection;
use test_log::test;
use uuid::Uuid;

fn page_request(page: u64, page_size: u64) -> PageRequest {
    PageRequest {
        page,
        page_size,
        sort_key: JournalSortKey::Date,
        direction: SortDirection::Desc,
    }
}

async fn create_journals(db: &DatabaseConnection, member_id: Uuid, scores: &[(i32, i32)]) -> Vec<Uuid> {
    let store = DbStore::new(db.clone());
    let coordinator = JournalCreationCoordinator::new(store.clone(), store.clone(), store);
    let mut ids = vec![];
    for (day, score) in (1..).zip(scores) {
        ids.push(
            coordinator
                .create_journal(member_id, new_journal(None, *score, day))
                .await
                .unwrap(),
        );
    }
    ids
}

#[test(tokio::test)]
async fn test_calendar_scenario() {
    let db = setup_db().await;
    let member = create_member(&db).await;
    let ids = create_journals(&db, member.id, &[(4, 2), (1, 3), (2, 2)]).await;
    let service = JournalQueryService::new(DbStore::new(db.clone()));

    let wins = service.list_for_calendar(member.id, Some(ResultScore::Win)).await.unwrap();
    assert_eq!(wins.len(), 1);
    assert_eq!(wins[0].journal.id, ids[0]);
    assert_eq!(wins[0].result_score, ResultScore::Win);
    assert_eq!(wins[0].opponent_team.short_code, "LG");
    assert_eq!(wins[0].stadium.short_code, "JAM");

    let draws = service.list_for_calendar(member.id, Some(ResultScore::Draw)).await.unwrap();
    assert_eq!(draws.len(), 1);
    assert_eq!((draws[0].journal.our_score, draws[0].journal.their_score), (2, 2));

    let all = service.list_for_calendar(member.id, None).await.unwrap();
    let all_ids: Vec<_> = all.iter().map(|summary| summary.journal.id).collect();
    assert_eq!(all_ids, ids);
}

#[test(tokio::test)]
async fn test_calendar_without_match_is_empty() {
    let db = setup_db().await;
    let member = create_member(&db).await;
    create_journals(&db, member.id, &[(0, 1), (2, 2)]).await;
    let service = JournalQueryService::new(DbStore::new(db.clone()));

    let wins = service.list_for_calendar(member.id, Some(ResultScore::Win)).await.unwrap();
    assert!(wins.is_empty());
}

#[test(tokio::test)]
async fn test_summary_pages() {
    let db = setup_db().await;
    let member = create_member(&db).await;
    create_journals(&db, member.id, &[(5, 1); 15]).await;
    let service = JournalQueryService::new(DbStore::new(db.clone()));

    let first = service
        .list_for_summary(member.id, page_request(0, 10), Some(ResultScore::Win))
        .await
        .unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_elements, 15);
    assert_eq!(first.total_pages, 2);
    assert!(!first.is_last());
    assert_eq!(first.items[0].journal.date, common::game_date(15), "newest game first");

    let second = service
        .list_for_summary(member.id, page_request(1, 10), Some(ResultScore::Win))
        .await
        .unwrap();
    assert_eq!(second.items.len(), 5);
    assert_eq!(second.total_elements, 15);
    assert!(second.is_last());
}

#[test(tokio::test)]
async fn test_summary_page_past_end_is_empty() {
    let db = setup_db().await;
    let member = create_member(&db).await;
    create_journals(&db, member.id, &[(1, 0), (0, 1), (3, 3)]).await;
    let service = JournalQueryService::new(DbStore::new(db.clone()));

    let page = service.list_for_summary(member.id, page_request(5, 10), None).await.unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total_elements, 3);
    assert_eq!(page.total_pages, 1);
    assert!(page.is_last());
}

#[test(tokio::test)]
async fn test_summary_far_past_end_is_empty() {
    let db = setup_db().await;
    let member = create_member(&db).await;
    create_journals(&db, member.id, &[(1, 0), (0, 1), (3, 3), (5, 2)]).await;
    let service = JournalQueryService::new(DbStore::new(db.clone()));

    for page in [u64::MAX, i64::MAX as u64 / 10 + 1] {
        let summary = service
            .list_for_summary(member.id, page_request(page, 10), Some(ResultScore::Win))
            .await
            .unwrap();

        assert!(summary.items.is_empty(), "page {page}");
        assert_eq!(summary.total_elements, 2);
        assert_eq!(summary.total_pages, 1);
        assert!(summary.is_last());
    }
}

#[test(tokio::test)]
async fn test_summary_huge_page_size_returns_everything() {
    let db = setup_db().await;
    let member = create_member(&db).await;
    create_journals(&db, member.id, &[(1, 0), (0, 1), (3, 3)]).await;
    let service = JournalQueryService::new(DbStore::new(db.clone()));

    let summary = service
        .list_for_summary(member.id, page_request(0, u64::MAX), None)
        .await
        .unwrap();

    assert_eq!(summary.items.len(), 3);
    assert_eq!(summary.total_elements, 3);
    assert_eq!(summary.total_pages, 1);
    assert!(summary.is_last());
}

#[test(tokio::test)]
async fn test_summary_totals_count_filtered_journals() {
    let db = setup_db().await;
    let member = create_member(&db).await;
    let scores: Vec<_> = (0..9).map(|i| [(3, 1), (1, 3), (2, 2)][i % 3]).collect();
    create_journals(&db, member.id, &scores).await;
    let service = JournalQueryService::new(DbStore::new(db.clone()));

    let page = service
        .list_for_summary(member.id, page_request(0, 2), Some(ResultScore::Lose))
        .await
        .unwrap();

    assert_eq!(page.total_elements, 3);
    assert_eq!(page.total_pages, 2);
    assert!(
        page.items
            .iter()
            .all(|summary| summary.result_score == ResultScore::Lose)
    );
}

#[test(tokio::test)]
async fn test_summary_rejects_zero_page_size() {
    let db = setup_db().await;
    let member = create_member(&db).await;
    let service = JournalQueryService::new(DbStore::new(db.clone()));

    let error = service
        .list_for_summary(member.id, page_request(0, 0), None)
        .await
        .unwrap_err();

    assert!(matches!(error, QueryJournalError::Validation(_)));
}
