mod common;

use chrono::Utc;
use tiny_shortener::domain::entities::NewUrlRecord;
use tiny_shortener::domain::repositories::{InsertOutcome, UrlRepository};

#[tokio::test]
async fn test_insert_and_find_by_code() {
    let db = common::create_test_db().await;
    let repo = common::create_repository(&db.pool);

    let new_record = NewUrlRecord::now("abc123".to_string(), "https://example.com".to_string());
    let created_at = new_record.created_at;

    let outcome = repo.insert_if_absent(new_record).await.unwrap();
    let InsertOutcome::Created(created) = outcome else {
        panic!("expected Created, got {:?}", outcome);
    };
    assert_eq!(created.code, "abc123");
    assert_eq!(created.clicks, 0);

    let found = repo.find_by_code("abc123").await.unwrap().unwrap();
    assert_eq!(found.url, "https://example.com");
    assert_eq!(found.clicks, 0);
    assert_eq!(found.created_at, created_at);
}

#[tokio::test]
async fn test_find_by_code_not_found() {
    let db = common::create_test_db().await;
    let repo = common::create_repository(&db.pool);

    assert!(repo.find_by_code("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_insert_existing_code_is_conflict() {
    let db = common::create_test_db().await;
    common::create_test_link(&db.pool, "taken", "https://first.com", 5).await;
    let repo = common::create_repository(&db.pool);

    let outcome = repo
        .insert_if_absent(NewUrlRecord::now(
            "taken".to_string(),
            "https://second.com".to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(outcome, InsertOutcome::Conflict);

    let kept = repo.find_by_code("taken").await.unwrap().unwrap();
    assert_eq!(kept.url, "https://first.com");
    assert_eq!(kept.clicks, 5);
}

#[tokio::test]
async fn test_codes_are_case_sensitive() {
    let db = common::create_test_db().await;
    let repo = common::create_repository(&db.pool);

    for code in ["AbC", "abc"] {
        let outcome = repo
            .insert_if_absent(NewUrlRecord::now(
                code.to_string(),
                format!("https://example.com/{code}"),
            ))
            .await
            .unwrap();
        assert!(matches!(outcome, InsertOutcome::Created(_)));
    }

    assert_eq!(common::count_links(&db.pool).await, 2);
}

#[tokio::test]
async fn test_exists() {
    let db = common::create_test_db().await;
    common::create_test_link(&db.pool, "here", "https://example.com", 0).await;
    let repo = common::create_repository(&db.pool);

    assert!(repo.exists("here").await.unwrap());
    assert!(!repo.exists("gone").await.unwrap());
}

#[tokio::test]
async fn test_increment_clicks() {
    let db = common::create_test_db().await;
    common::create_test_link(&db.pool, "click", "https://example.com", 0).await;
    let repo = common::create_repository(&db.pool);

    assert!(repo.increment_clicks("click").await.unwrap());
    assert!(repo.increment_clicks("click").await.unwrap());

    assert_eq!(common::get_clicks(&db.pool, "click").await, 2);
}

#[tokio::test]
async fn test_increment_clicks_unknown_code() {
    let db = common::create_test_db().await;
    let repo = common::create_repository(&db.pool);

    assert!(!repo.increment_clicks("nope").await.unwrap());
    assert_eq!(common::count_links(&db.pool).await, 0);
}

#[tokio::test]
async fn test_list_recent_newest_first() {
    let db = common::create_test_db().await;
    let repo = common::create_repository(&db.pool);

    let base = Utc::now();
    for (i, code) in ["first", "second", "third"].iter().enumerate() {
        let new_record = NewUrlRecord {
            code: code.to_string(),
            url: format!("https://example.com/{i}"),
            created_at: base + chrono::Duration::seconds(i as i64),
        };
        repo.insert_if_absent(new_record).await.unwrap();
    }

    let records = repo.list_recent(2).await.unwrap();
    let codes: Vec<&str> = records.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["third", "second"]);
}

#[tokio::test]
async fn test_totals() {
    let db = common::create_test_db().await;
    let repo = common::create_repository(&db.pool);

    let empty = repo.totals().await.unwrap();
    assert_eq!(empty.links, 0);
    assert_eq!(empty.clicks, 0);

    common::create_test_link(&db.pool, "a", "https://a.com", 3).await;
    common::create_test_link(&db.pool, "b", "https://b.com", 4).await;

    let totals = repo.totals().await.unwrap();
    assert_eq!(totals.links, 2);
    assert_eq!(totals.clicks, 7);
}

#[tokio::test]
async fn test_ping() {
    let db = common::create_test_db().await;
    let repo = common::create_repository(&db.pool);

    assert!(repo.ping().await.is_ok());
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = common::create_test_db().await;
    common::create_test_link(&db.pool, "keep", "https://example.com", 1).await;

    tiny_shortener::infrastructure::persistence::migrate(&db.pool)
        .await
        .unwrap();

    assert_eq!(common::get_clicks(&db.pool, "keep").await, 1);
}

#[tokio::test]
async fn test_closed_pool_is_storage_unavailable() {
    let db = common::create_test_db().await;
    let repo = common::create_repository(&db.pool);

    db.pool.close().await;

    let err = repo.find_by_code("any").await.unwrap_err();
    assert!(matches!(
        err,
        tiny_shortener::AppError::StorageUnavailable { .. }
    ));
}
