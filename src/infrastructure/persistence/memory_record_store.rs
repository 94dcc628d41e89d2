//! In-memory implementation of the record store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Record;
use crate::domain::repositories::{RecordStore, StoreError};

/// Record store backed by a `HashMap` behind a reader/writer lock.
///
/// Lookups share the read lock; inserts take the write lock, so readers never
/// observe a half-applied insert. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<HashMap<String, Record>>,
}

impl MemoryRecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if nothing has been stored yet.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn insert(&self, record: &Record) -> Result<(), StoreError> {
        let mut records = self.records.write().await;

        match records.entry(record.short_code.clone()) {
            Entry::Occupied(_) => Err(StoreError::ShortCodeTaken(record.short_code.clone())),
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                debug!(short_code = %record.short_code, id = %record.id, "record stored");
                Ok(())
            }
        }
    }

    async fn select(&self, short_code: &str) -> Result<Record, StoreError> {
        self.records
            .read()
            .await
            .get(short_code)
            .cloned()
            .ok_or_else(|| StoreError::RecordNotFound(short_code.to_string()))
    }
}
