use std::sync::Arc;

use shortly::application::services::RecordService;
use shortly::domain::entities::Record;
use shortly::domain::repositories::{RecordStore, StoreError};
use shortly::infrastructure::persistence::MemoryRecordStore;

#[tokio::test]
async fn test_insert_then_select() {
    let store = MemoryRecordStore::new();
    let record = Record::new("https://example.com").unwrap();

    store.insert(&record).await.unwrap();

    assert_eq!(store.select(&record.short_code).await.unwrap(), record);
}

#[tokio::test]
async fn test_select_unknown_code() {
    let store = MemoryRecordStore::new();

    let err = store.select("unknownCode123").await.unwrap_err();

    assert_eq!(err, StoreError::RecordNotFound("unknownCode123".to_string()));
}

#[tokio::test]
async fn test_duplicate_code_keeps_original() {
    let store = MemoryRecordStore::new();
    let original = Record::new("https://first.example").unwrap();
    store.insert(&original).await.unwrap();

    let mut intruder = Record::new("https://second.example").unwrap();
    intruder.short_code = original.short_code.clone();

    assert_eq!(
        store.insert(&intruder).await,
        Err(StoreError::ShortCodeTaken(original.short_code.clone()))
    );
    assert_eq!(store.select(&original.short_code).await.unwrap(), original);
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_service_over_memory_store() {
    let store = Arc::new(MemoryRecordStore::new());
    let service = RecordService::new(store.clone());

    let created = service.shorten("http://test/url.org".to_string()).await.unwrap();
    let resolved = service.resolve(&created.short_code).await.unwrap();

    assert_eq!(created, resolved);
    assert!(service.health().await.is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_shorten_produces_unique_codes() {
    let service = Arc::new(RecordService::new(Arc::new(MemoryRecordStore::new())));

    let handles: Vec<_> = (0..64)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .shorten(format!("https://example.com/{i}"))
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut codes = std::collections::HashSet::new();
    for handle in handles {
        let record = handle.await.unwrap();
        assert!(codes.insert(record.short_code));
    }

    assert_eq!(service.store().len().await, 64);
}
