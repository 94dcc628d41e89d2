#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;

use shortly::domain::entities::Record;
use shortly::domain::repositories::{RecordStore, StoreError};
use shortly::infrastructure::persistence::MemoryRecordStore;
use shortly::routes::app_router;
use shortly::state::AppState;

/// Store whose every call fails with a backend error.
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn insert(&self, _record: &Record) -> Result<(), StoreError> {
        Err(StoreError::Backend("insert unavailable".to_string()))
    }

    async fn select(&self, _short_code: &str) -> Result<Record, StoreError> {
        Err(StoreError::Backend("select unavailable".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Backend("ping unavailable".to_string()))
    }
}

/// Store that takes `delay` to answer any lookup.
pub struct SlowStore {
    pub delay: Duration,
}

#[async_trait]
impl RecordStore for SlowStore {
    async fn insert(&self, _record: &Record) -> Result<(), StoreError> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    async fn select(&self, short_code: &str) -> Result<Record, StoreError> {
        tokio::time::sleep(self.delay).await;
        Err(StoreError::RecordNotFound(short_code.to_string()))
    }
}

pub fn create_test_state(store: Arc<dyn RecordStore>) -> AppState {
    AppState::new(store)
}

/// Full application router over a fresh in-memory store.
pub fn create_test_server() -> (TestServer, Arc<MemoryRecordStore>) {
    let store = Arc::new(MemoryRecordStore::new());
    let server = TestServer::new(app_router(create_test_state(store.clone()))).unwrap();
    (server, store)
}

/// Full application router over a store that always fails.
pub fn create_failing_server() -> TestServer {
    TestServer::new(app_router(create_test_state(Arc::new(FailingStore)))).unwrap()
}

pub async fn create_test_record(store: &MemoryRecordStore, url: &str) -> Record {
    let record = Record::new(url).unwrap();
    store.insert(&record).await.unwrap();
    record
}
