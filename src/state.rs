//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::RecordService;
use crate::domain::repositories::RecordStore;

/// Application state cloned into each request.
///
/// Holds the record service over a type-erased store so the same router serves
/// both the in-memory and the MongoDB backends.
#[derive(Clone)]
pub struct AppState {
    pub record_service: Arc<RecordService<dyn RecordStore>>,
}

impl AppState {
    /// Builds state around a store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            record_service: Arc::new(RecordService::new(store)),
        }
    }
}
