//! Record entity mapping a short code to its original URL.

use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;
use crate::utils::code_generator::{generate_code, generate_id};

/// Errors raised while constructing a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("URL must not be empty")]
    EmptyUrl,
}

/// A shortened URL with its identity and timestamps.
///
/// This is both the persisted document and the JSON body returned by the API.
/// Field names on the wire are camelCase; `accessCount` is left out while zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub url: String,
    pub short_code: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub access_count: u64,
}

impl Record {
    /// Creates a record for `url` with a fresh id and short code.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::EmptyUrl`] if `url` is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, RecordError> {
        let url = url.into();
        if url.is_empty() {
            return Err(RecordError::EmptyUrl);
        }

        let now = Timestamp::now();

        Ok(Self {
            id: generate_id(),
            url,
            short_code: generate_code(),
            created_at: now,
            updated_at: now,
            access_count: 0,
        })
    }

    /// Replaces the short code with a newly generated one and bumps `updated_at`.
    pub fn regenerate_short_code(&mut self) {
        self.short_code = generate_code();
        self.updated_at = Timestamp::now().max(self.created_at);
    }
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}
