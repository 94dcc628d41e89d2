//! Record creation and lookup service.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::Record;
use crate::domain::repositories::{RecordStore, StoreError};
use crate::error::AppError;

/// Upper bound on insert attempts when generated short codes collide.
const MAX_ATTEMPTS: usize = 10;

/// Service for shortening URLs and resolving short codes.
///
/// Works against any [`RecordStore`]; the HTTP layer holds it as
/// `RecordService<dyn RecordStore>`.
pub struct RecordService<S: RecordStore + ?Sized> {
    store: Arc<S>,
}

impl<S: RecordStore + ?Sized> RecordService<S> {
    /// Creates a new record service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Creates and persists a record for `url`.
    ///
    /// # Collisions
    ///
    /// The store rejects a short code that is already taken. The record then gets a
    /// regenerated code and the insert is repeated, up to 10 attempts in total.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if `url` is empty.
    /// Returns [`AppError::Internal`] on store failures or when every attempt collided.
    pub async fn shorten(&self, url: String) -> Result<Record, AppError> {
        let mut record = Record::new(url)?;

        for attempt in 1..=MAX_ATTEMPTS {
            if attempt > 1 {
                record.regenerate_short_code();
            }

            match self.store.insert(&record).await {
                Ok(()) => {
                    info!(short_code = %record.short_code, id = %record.id, "Record created");
                    return Ok(record);
                }
                Err(StoreError::ShortCodeTaken(code)) => {
                    warn!(attempt, short_code = %code, "Short code collision");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique short code",
            json!({ "reason": "Too many collisions", "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Looks up the record stored under `short_code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if `short_code` is empty.
    /// Returns [`AppError::NotFound`] if no record has that code.
    /// Returns [`AppError::Internal`] on other store failures.
    pub async fn resolve(&self, short_code: &str) -> Result<Record, AppError> {
        if short_code.is_empty() {
            return Err(AppError::bad_request(
                "Short code must not be empty",
                json!({ "field": "shortCode" }),
            ));
        }

        Ok(self.store.select(short_code).await?)
    }

    /// Checks that the store is reachable.
    pub async fn health(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}
