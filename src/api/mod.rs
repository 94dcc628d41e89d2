//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into record service calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Request body extraction with taxonomy-aware rejections
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and panic recovery

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
