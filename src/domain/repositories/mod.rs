//! Repository trait definitions for the domain layer.
//!
//! - [`RecordStore`] - Insert and look up records by short code
//!
//! Implementations live in `crate::infrastructure::persistence`. A mock is
//! generated via `mockall` for unit tests.

pub mod record_store;

pub use record_store::{RecordStore, StoreError};

#[cfg(test)]
pub use record_store::MockRecordStore;
