//! Store contract for record persistence.

use crate::domain::entities::Record;
use async_trait::async_trait;
use std::time::Duration;

/// Errors surfaced by a [`RecordStore`].
///
/// Stores never retry; every failure is reported once to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record has the requested short code.
    #[error("no record for short code {0:?}")]
    RecordNotFound(String),

    /// A record with this short code already exists; the stored one is untouched.
    #[error("short code {0:?} is already taken")]
    ShortCodeTaken(String),

    /// The backend did not answer within the operation deadline.
    #[error("{operation} timed out after {timeout:?}")]
    Timeout {
        operation: &'static str,
        timeout: Duration,
    },

    /// Any other backend failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Persistence interface for [`Record`]s, keyed by short code.
///
/// The store owns the records it holds. `insert` stores a copy of the given
/// record and `select` hands back a copy, so callers can never mutate stored
/// state through a returned value.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryRecordStore`] - lock-guarded map
/// - [`crate::infrastructure::persistence::MongoRecordStore`] - MongoDB collection
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Stores a copy of `record` under its short code.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShortCodeTaken`] if another record already uses the
    /// same short code. The existing record is left as it was.
    async fn insert(&self, record: &Record) -> Result<(), StoreError>;

    /// Returns a copy of the record stored under `short_code`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RecordNotFound`] if nothing is stored under that code.
    async fn select(&self, short_code: &str) -> Result<Record, StoreError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
