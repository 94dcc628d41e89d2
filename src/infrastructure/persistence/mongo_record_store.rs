//! MongoDB implementation of the record store.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, IndexModel};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::mask_connection_string;
use crate::domain::entities::Record;
use crate::domain::repositories::{RecordStore, StoreError};

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Connection settings for [`MongoRecordStore`].
#[derive(Debug, Clone)]
pub struct MongoSettings {
    pub uri: String,
    pub database: String,
    pub collection: String,
    /// Deadline for connecting, pinging and preparing the collection.
    pub connect_timeout: Duration,
    /// Deadline for each insert, select or ping.
    pub operation_timeout: Duration,
    /// Deadline for the graceful client shutdown.
    pub disconnect_timeout: Duration,
}

impl Default for MongoSettings {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "urlRecords".to_string(),
            collection: "urls".to_string(),
            connect_timeout: Duration::from_secs(10),
            operation_timeout: Duration::from_secs(5),
            disconnect_timeout: Duration::from_secs(5),
        }
    }
}

/// Record store persisting each record as a document in one collection.
///
/// Documents carry the same camelCase fields as the JSON API. A unique index on
/// `shortCode` makes the server reject colliding inserts.
///
/// `createdAt` and `updatedAt` are stored as RFC 3339 strings, not BSON dates, so
/// documents match the API body byte for byte. Date-range queries and TTL
/// indexes on those fields are not supported.
///
/// Connect once at startup with [`MongoRecordStore::connect`] and call
/// [`MongoRecordStore::disconnect`] on shutdown; the driver pools connections
/// in between.
pub struct MongoRecordStore {
    client: Client,
    records: Collection<Record>,
    database: String,
    operation_timeout: Duration,
    disconnect_timeout: Duration,
}

impl MongoRecordStore {
    /// Connects to MongoDB, verifies the server with a `ping`, and ensures the
    /// unique `shortCode` index exists.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if the whole sequence does not finish within
    /// `settings.connect_timeout`, or [`StoreError::Backend`] if any step fails.
    pub async fn connect(settings: &MongoSettings) -> Result<Self, StoreError> {
        info!(
            "Connecting to MongoDB at {}",
            mask_connection_string(&settings.uri)
        );

        let store = with_deadline("connect", settings.connect_timeout, async {
            let mut options = ClientOptions::parse(settings.uri.as_str())
                .await
                .map_err(backend_error)?;
            options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
            options.connect_timeout = Some(settings.connect_timeout);
            options.server_selection_timeout = Some(settings.connect_timeout);

            let client = Client::with_options(options).map_err(backend_error)?;

            client
                .database(&settings.database)
                .run_command(doc! { "ping": 1 })
                .await
                .map_err(backend_error)?;

            let records = client
                .database(&settings.database)
                .collection::<Record>(&settings.collection);

            let index = IndexModel::builder()
                .keys(doc! { "shortCode": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("shortCode_unique".to_string())
                        .build(),
                )
                .build();
            records.create_index(index).await.map_err(backend_error)?;

            Ok::<_, StoreError>(Self {
                client,
                records,
                database: settings.database.clone(),
                operation_timeout: settings.operation_timeout,
                disconnect_timeout: settings.disconnect_timeout,
            })
        })
        .await?;

        info!(
            database = %settings.database,
            collection = %settings.collection,
            "✓ Connected to MongoDB"
        );

        Ok(store)
    }

    /// Shuts the client down, waiting at most the configured disconnect timeout.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Timeout`] if in-flight operations do not drain in time.
    pub async fn disconnect(&self) -> Result<(), StoreError> {
        info!("Disconnecting from MongoDB ...");

        let client = self.client.clone();
        with_deadline("disconnect", self.disconnect_timeout, async move {
            client.shutdown().await;
            Ok::<_, StoreError>(())
        })
        .await?;

        info!("Disconnected from MongoDB");
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MongoRecordStore {
    async fn insert(&self, record: &Record) -> Result<(), StoreError> {
        with_deadline("insert", self.operation_timeout, async {
            match self.records.insert_one(record).await {
                Ok(_) => {
                    debug!(short_code = %record.short_code, id = %record.id, "record inserted");
                    Ok(())
                }
                Err(e) if is_duplicate_key(&e) => {
                    Err(StoreError::ShortCodeTaken(record.short_code.clone()))
                }
                Err(e) => {
                    warn!(short_code = %record.short_code, "MongoDB insert failed: {}", e);
                    Err(backend_error(e))
                }
            }
        })
        .await
    }

    async fn select(&self, short_code: &str) -> Result<Record, StoreError> {
        with_deadline("select", self.operation_timeout, async {
            self.records
                .find_one(doc! { "shortCode": short_code })
                .await
                .map_err(|e| {
                    warn!(short_code, "MongoDB find failed: {}", e);
                    backend_error(e)
                })?
                .ok_or_else(|| StoreError::RecordNotFound(short_code.to_string()))
        })
        .await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        with_deadline("ping", self.operation_timeout, async {
            self.client
                .database(&self.database)
                .run_command(doc! { "ping": 1 })
                .await
                .map(|_| ())
                .map_err(backend_error)
        })
        .await
    }
}

/// Runs `fut`, failing with [`StoreError::Timeout`] once `limit` has passed.
async fn with_deadline<T, F>(
    operation: &'static str,
    limit: Duration,
    fut: F,
) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    timeout(limit, fut).await.unwrap_or_else(|_| {
        warn!("MongoDB {} timed out after {:?}", operation, limit);
        Err(StoreError::Timeout {
            operation,
            timeout: limit,
        })
    })
}

fn is_duplicate_key(e: &MongoError) -> bool {
    matches!(
        e.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

fn backend_error(e: MongoError) -> StoreError {
    StoreError::Backend(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deadline_passes_through_results() {
        let ok = with_deadline("select", Duration::from_secs(1), async { Ok(7) }).await;
        assert_eq!(ok, Ok(7));

        let err: Result<(), _> = with_deadline("select", Duration::from_secs(1), async {
            Err(StoreError::RecordNotFound("abc123".into()))
        })
        .await;
        assert_eq!(err, Err(StoreError::RecordNotFound("abc123".into())));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_fails_slow_operations() {
        let result: Result<(), _> = with_deadline("insert", Duration::from_secs(5), async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        })
        .await;

        assert_eq!(
            result,
            Err(StoreError::Timeout {
                operation: "insert",
                timeout: Duration::from_secs(5),
            })
        );
    }

    #[test]
    fn test_documents_store_timestamps_as_strings() {
        let record = Record::new("https://example.com").unwrap();

        let document = mongodb::bson::to_document(&record).unwrap();
        assert_eq!(
            document.get_str("createdAt").unwrap(),
            record.created_at.to_string()
        );
        assert_eq!(document.get_str("shortCode").unwrap(), record.short_code);

        let back: Record = mongodb::bson::from_document(document).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_default_settings() {
        let settings = MongoSettings::default();
        assert_eq!(settings.database, "urlRecords");
        assert_eq!(settings.collection, "urls");
        assert_eq!(settings.connect_timeout, Duration::from_secs(10));
        assert_eq!(settings.operation_timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_connect_rejects_malformed_uri() {
        let settings = MongoSettings {
            uri: "not-a-mongodb-uri".to_string(),
            ..MongoSettings::default()
        };

        let err = MongoRecordStore::connect(&settings).await.err().unwrap();
        assert!(matches!(err, StoreError::Backend(_)));
    }
}
