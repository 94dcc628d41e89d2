//! HTTP middleware for observability and fault isolation.

pub mod panic;
pub mod tracing;
