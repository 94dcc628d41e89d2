//! Backend selection and lifecycle for the configured record store.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::RecordStore;

use super::{MemoryRecordStore, MongoRecordStore};

/// The record store chosen by configuration.
///
/// Keeps the concrete type around so backend-specific teardown can run after the
/// server has stopped using the store.
#[derive(Clone)]
pub enum StoreHandle {
    Memory(Arc<MemoryRecordStore>),
    Mongo(Arc<MongoRecordStore>),
}

impl StoreHandle {
    /// Opens the backend named by `config.store_backend`.
    ///
    /// # Errors
    ///
    /// Returns an error if the MongoDB backend is selected and connecting,
    /// pinging or preparing the collection fails.
    pub async fn open(config: &Config) -> Result<Self> {
        match config.store_backend {
            StoreBackend::Memory => {
                tracing::info!("Using in-memory record store");
                Ok(Self::Memory(Arc::new(MemoryRecordStore::new())))
            }
            StoreBackend::Mongo => {
                let store = MongoRecordStore::connect(&config.mongo_settings())
                    .await
                    .context("Failed to connect to MongoDB")?;
                Ok(Self::Mongo(Arc::new(store)))
            }
        }
    }

    /// The store as a trait object for [`crate::state::AppState`].
    pub fn store(&self) -> Arc<dyn RecordStore> {
        match self {
            Self::Memory(store) => store.clone(),
            Self::Mongo(store) => store.clone(),
        }
    }

    /// Releases backend resources. A no-op for the in-memory store.
    pub async fn close(&self) {
        if let Self::Mongo(store) = self
            && let Err(e) = store.disconnect().await
        {
            tracing::warn!("MongoDB disconnect did not complete cleanly: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Record;

    fn memory_config() -> Config {
        Config {
            listen_addr: "127.0.0.1:0".to_string(),
            store_backend: StoreBackend::Memory,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            shutdown_grace_period: 5,
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            mongodb_database: "urlRecords".to_string(),
            mongodb_collection: "urls".to_string(),
            mongodb_connect_timeout: 10,
            mongodb_operation_timeout: 5,
            mongodb_disconnect_timeout: 5,
        }
    }

    #[tokio::test]
    async fn test_open_memory_backend() {
        let handle = StoreHandle::open(&memory_config()).await.unwrap();
        assert!(matches!(handle, StoreHandle::Memory(_)));

        let store = handle.store();
        let record = Record::new("https://example.com").unwrap();
        store.insert(&record).await.unwrap();
        assert_eq!(store.select(&record.short_code).await.unwrap(), record);

        handle.close().await;
    }

    #[tokio::test]
    async fn test_open_mongo_with_bad_uri_fails() {
        let config = Config {
            store_backend: StoreBackend::Mongo,
            mongodb_uri: "not-a-mongodb-uri".to_string(),
            ..memory_config()
        };

        assert!(StoreHandle::open(&config).await.is_err());
    }
}
