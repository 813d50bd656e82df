mod common;

use crate::common::member::{create_test_journal, create_test_member, game_date};
use crate::common::{create_reference_data, setup_db};
use inninglog_db::journal::{self, JournalSortKey, PageRequest, SortDirection};
use inninglog_entity::result_score::ResultScore;
use test_log::test;

#[test(tokio::test)]
async fn test_create_journal() {
    let db = &setup_db().await.unwrap();
    let references = create_reference_data(db).await;
    let member = create_test_member(db).await;

    let created = create_test_journal(db, &member, &references, (4, 2), game_date(6)).await;

    let journal = journal::Query::find_journal_by_id(db, created.id).await.unwrap().unwrap();
    assert_eq!(journal, created);
    assert_eq!(journal.member_id, member.id);
    assert_eq!(journal.opponent_team_id, references.0.id);
    assert_eq!(journal.result_score(), ResultScore::Win);
}

#[test(tokio::test)]
async fn test_list_member_journals_filter() {
    let db = &setup_db().await.unwrap();
    let references = create_reference_data(db).await;
    let member = create_test_member(db).await;
    let other = create_test_member(db).await;

    let win = create_test_journal(db, &member, &references, (4, 2), game_date(3)).await;
    let lose = create_test_journal(db, &member, &references, (1, 3), game_date(1)).await;
    let draw = create_test_journal(db, &member, &references, (2, 2), game_date(2)).await;
    create_test_journal(db, &other, &references, (9, 0), game_date(4)).await;

    let wins = journal::Query::list_member_journals(db, member.id, Some(ResultScore::Win))
        .await
        .unwrap();
    assert_eq!(wins, vec![win.clone()]);

    let draws = journal::Query::list_member_journals(db, member.id, Some(ResultScore::Draw))
        .await
        .unwrap();
    assert_eq!(draws, vec![draw.clone()]);

    let all = journal::Query::list_member_journals(db, member.id, None).await.unwrap();
    assert_eq!(all, vec![lose, draw, win], "ordered by game date ascending");
}

#[test(tokio::test)]
async fn test_list_member_journals_empty() {
    let db = &setup_db().await.unwrap();
    let references = create_reference_data(db).await;
    let member = create_test_member(db).await;
    create_test_journal(db, &member, &references, (0, 5), game_date(1)).await;

    let wins = journal::Query::list_member_journals(db, member.id, Some(ResultScore::Win))
        .await
        .unwrap();
    assert!(wins.is_empty());
}

#[test(tokio::test)]
async fn test_page_member_journals() {
    let db = &setup_db().await.unwrap();
    let references = create_reference_data(db).await;
    let member = create_test_member(db).await;

    for day in 1..=15 {
        create_test_journal(db, &member, &references, (3, 1), game_date(day)).await;
    }

    let request = PageRequest {
        page: 0,
        page_size: 10,
        sort_key: JournalSortKey::Date,
        direction: SortDirection::Desc,
    };
    let first = journal::Query::page_member_journals(db, member.id, None, request)
        .await
        .unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_elements, 15);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.items[0].date, game_date(15));

    let second = journal::Query::page_member_journals(db, member.id, None, PageRequest { page: 1, ..request })
        .await
        .unwrap();
    assert_eq!(second.items.len(), 5);
    assert_eq!(second.total_elements, 15);
    assert_eq!(second.items[4].date, game_date(1));

    let beyond = journal::Query::page_member_journals(db, member.id, None, PageRequest { page: 5, ..request })
        .await
        .unwrap();
    assert!(beyond.items.is_empty());
    assert_eq!(beyond.total_pages, 2);
}

#[test(tokio::test)]
async fn test_page_counts_filtered_journals_only() {
    let db = &setup_db().await.unwrap();
    let references = create_reference_data(db).await;
    let member = create_test_member(db).await;

    // 12 wins and 12 losses interleaved by date
    for day in 1..=24 {
        let score = if day % 2 == 0 { (5, 1) } else { (1, 5) };
        create_test_journal(db, &member, &references, score, game_date(day)).await;
    }

    let request = PageRequest {
        page: 1,
        page_size: 10,
        sort_key: JournalSortKey::Date,
        direction: SortDirection::Asc,
    };
    let page = journal::Query::page_member_journals(db, member.id, Some(ResultScore::Win), request)
        .await
        .unwrap();

    assert_eq!(page.total_elements, 12);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items.len(), 2);
    assert!(page.items.iter().all(|journal| journal.result_score() == ResultScore::Win));
    assert_eq!(page.items[0].date, game_date(22));
}

#[test(tokio::test)]
async fn test_page_size_zero_is_rejected() {
    let db = &setup_db().await.unwrap();
    let member = create_test_member(db).await;

    let request = PageRequest {
        page: 0,
        page_size: 0,
        sort_key: JournalSortKey::CreatedAt,
        direction: SortDirection::Desc,
    };
    journal::Query::page_member_journals(db, member.id, None, request)
        .await
        .expect_err("a page size of zero can not be paginated");
}

#[test(tokio::test)]
async fn test_page_with_unbindable_bounds() {
    let db = &setup_db().await.unwrap();
    let references = create_reference_data(db).await;
    let member = create_test_member(db).await;
    for day in 1..=3 {
        create_test_journal(db, &member, &references, (3, 1), game_date(day)).await;
    }

    let request = PageRequest {
        page: 0,
        page_size: 10,
        sort_key: JournalSortKey::Date,
        direction: SortDirection::Desc,
    };
    // offset overflows u64, then an offset that fits u64 but not i64
    for page in [u64::MAX, u64::MAX / 10 + 1, i64::MAX as u64 / 10 + 1] {
        let beyond = journal::Query::page_member_journals(db, member.id, None, PageRequest { page, ..request })
            .await
            .unwrap();
        assert!(beyond.items.is_empty(), "page {page}");
        assert_eq!(beyond.total_elements, 3);
        assert_eq!(beyond.total_pages, 1);
        assert!(beyond.is_last());
    }

    let everything = journal::Query::page_member_journals(
        db,
        member.id,
        None,
        PageRequest {
            page_size: u64::MAX,
            ..request
        },
    )
    .await
    .unwrap();
    assert_eq!(everything.items.len(), 3);
    assert_eq!(everything.page_size, u64::MAX);
    assert_eq!(everything.total_pages, 1);

    let second = journal::Query::page_member_journals(
        db,
        member.id,
        None,
        PageRequest {
            page: 1,
            page_size: u64::MAX,
            ..request
        },
    )
    .await
    .unwrap();
    assert!(second.items.is_empty());
    assert_eq!(second.total_elements, 3);
}

#[test(tokio::test)]
async fn test_load_summaries() {
    let db = &setup_db().await.unwrap();
    let references = create_reference_data(db).await;
    let member = create_test_member(db).await;
    let lose = create_test_journal(db, &member, &references, (1, 3), game_date(1)).await;
    let draw = create_test_journal(db, &member, &references, (2, 2), game_date(2)).await;

    let summaries = journal::Query::load_summaries(db, vec![draw.clone(), lose.clone()])
        .await
        .unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].journal, draw);
    assert_eq!(summaries[0].result_score, ResultScore::Draw);
    assert_eq!(summaries[1].journal, lose);
    assert_eq!(summaries[1].result_score, ResultScore::Lose);
    assert_eq!(summaries[1].opponent_team, references.0);
    assert_eq!(summaries[1].stadium, references.1);
    assert!(journal::Query::load_summaries(db, vec![]).await.unwrap().is_empty());
}

#[test]
fn test_page_is_last() {
    let page = |page, total_pages| journal::Page::<()> {
        items: vec![],
        page,
        page_size: 10,
        total_elements: total_pages * 10,
        total_pages,
    };

    assert!(!page(0, 2).is_last());
    assert!(page(1, 2).is_last());
    assert!(page(5, 1).is_last());
    assert!(page(0, 0).is_last());
    assert!(page(u64::MAX, 2).is_last());
    assert!(page(u64::MAX, 0).is_last());
}
