//! # Shortly
//!
//! A small URL shortening service built with Axum, backed either by process
//! memory or by MongoDB.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The `Record` entity and the `RecordStore` trait
//! - **Application Layer** ([`application`]) - Shortening and lookup orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory and MongoDB stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, extractors and middleware
//!
//! ## Features
//!
//! - Random 6-character short codes, regenerated on collision
//! - Pluggable record stores behind one trait
//! - Panic recovery and request tracing
//! - Graceful shutdown with a bounded grace period
//!
//! ## Quick Start
//!
//! ```bash
//! # In-memory store
//! cargo run
//!
//! # MongoDB store
//! export STORE_BACKEND="mongo"
//! export MONGODB_URI="mongodb://localhost:27017"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RecordService;
    pub use crate::domain::entities::{Record, Timestamp};
    pub use crate::domain::repositories::{RecordStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{MemoryRecordStore, MongoRecordStore};
    pub use crate::server::Server;
    pub use crate::state::AppState;
}
