use std::sync::Arc;

use shortly::prelude::*;

fn create_service() -> Arc<UrlService> {
    Arc::new(UrlService::new(
        Arc::new(MemoryUrlRepository::new()),
        UrlServiceConfig::default(),
    ))
}

#[tokio::test]
async fn test_full_lifecycle() {
    let service = create_service();

    let record = service
        .create("https://example.com/docs", Some(60))
        .await
        .unwrap();
    assert_eq!(record.visit_count, 0);
    assert!(record.expires_at.is_some());

    let resolved = service.resolve(&record.short).await.unwrap();
    assert_eq!(resolved.original, "https://example.com/docs");
    assert_eq!(resolved.visit_count, 1);

    let resolved = service.resolve(&record.short).await.unwrap();
    assert_eq!(resolved.visit_count, 2);

    let listed = service.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].visit_count, 2);

    assert!(service.delete(record.id).await.unwrap());
    assert!(!service.delete(record.id).await.unwrap());

    let err = service.resolve(&record.short).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_expired_record_is_kept() {
    let service = create_service();

    let record = service
        .create("https://example.com", Some(-5))
        .await
        .unwrap();

    for _ in 0..2 {
        let err = service.resolve(&record.short).await.unwrap_err();
        assert!(matches!(err, AppError::Expired { .. }));
    }

    let stored = service.find(&record.short).await.unwrap();
    assert_eq!(stored.visit_count, 0);
    assert!(stored.is_expired());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_resolves_count_every_visit() {
    let service = create_service();
    let record = service.create("https://example.com", None).await.unwrap();

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let service = service.clone();
            let short = record.short.clone();
            tokio::spawn(async move { service.resolve(&short).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let stored = service.find(&record.short).await.unwrap();
    assert_eq!(stored.visit_count, 50);
}

#[tokio::test]
async fn test_list_newest_first() {
    let service = create_service();

    let first = service.create("https://a.example", None).await.unwrap();
    let second = service.create("https://b.example", None).await.unwrap();
    let third = service.create("https://c.example", None).await.unwrap();

    let ids: Vec<i64> = service
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[tokio::test]
async fn test_custom_code_length() {
    let service = UrlService::new(
        Arc::new(MemoryUrlRepository::new()),
        UrlServiceConfig {
            code_length: 12,
            ..UrlServiceConfig::default()
        },
    );

    let record = service.create("https://example.com", None).await.unwrap();
    assert_eq!(record.short.len(), 12);
}
