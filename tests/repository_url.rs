use chrono::{Duration, Utc};
use shortly::domain::entities::NewUrlRecord;
use shortly::domain::repositories::UrlRepository;
use shortly::error::AppError;
use shortly::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_record(short: &str) -> NewUrlRecord {
    NewUrlRecord {
        original: "https://example.com".to_string(),
        short: short.to_string(),
        expires_at: None,
    }
}

#[sqlx::test]
async fn test_insert_and_find(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let inserted = repo.insert(new_record("abc12345")).await.unwrap();
    assert_eq!(inserted.visit_count, 0);
    assert!(inserted.expires_at.is_none());

    let found = repo.find_by_short("abc12345").await.unwrap().unwrap();
    assert_eq!(found.id, inserted.id);
    assert_eq!(found.original, "https://example.com");

    assert!(repo.find_by_short("missing1").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_insert_duplicate_short_conflicts(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.insert(new_record("dup00001")).await.unwrap();
    let err = repo.insert(new_record("dup00001")).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_insert_keeps_expiry(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    let expires_at = Utc::now() + Duration::minutes(30);

    let inserted = repo
        .insert(NewUrlRecord {
            expires_at: Some(expires_at),
            ..new_record("exp00001")
        })
        .await
        .unwrap();

    let stored = inserted.expires_at.unwrap();
    assert!((stored - expires_at).num_milliseconds().abs() < 1);
}

#[sqlx::test]
async fn test_increment_visit(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    let record = repo.insert(new_record("inc00001")).await.unwrap();

    repo.increment_visit(record.id).await.unwrap();
    let updated = repo.increment_visit(record.id).await.unwrap();
    assert_eq!(updated.visit_count, 2);

    let err = repo.increment_visit(record.id + 1000).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_delete_by_id(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    let record = repo.insert(new_record("del00001")).await.unwrap();

    assert!(repo.delete_by_id(record.id).await.unwrap());
    assert!(!repo.delete_by_id(record.id).await.unwrap());
    assert!(repo.find_by_short("del00001").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_all_newest_first(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let first = repo.insert(new_record("lst00001")).await.unwrap();
    let second = repo.insert(new_record("lst00002")).await.unwrap();

    let ids: Vec<i64> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.ping().await.unwrap();
}
