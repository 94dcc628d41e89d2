//! Record store implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::RecordStore`].
//!
//! # Stores
//!
//! - [`MemoryRecordStore`] - Process-local map guarded by a reader/writer lock
//! - [`MongoRecordStore`] - Durable store over a MongoDB collection
//!
//! [`StoreHandle`] picks one of them from configuration.

pub mod memory_record_store;
pub mod mongo_record_store;
pub mod store_handle;

pub use memory_record_store::MemoryRecordStore;
pub use mongo_record_store::{MongoRecordStore, MongoSettings};
pub use store_handle::StoreHandle;
