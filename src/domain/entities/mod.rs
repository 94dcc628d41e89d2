//! Core domain entities.
//!
//! - [`Record`] - A short code mapped to its original URL, plus identity and timestamps
//! - [`Timestamp`] - UTC instant pinned to an RFC 3339 millisecond wire format
//!
//! Entities are plain data structures; persistence lives behind
//! [`crate::domain::repositories::RecordStore`].

pub mod record;
pub mod timestamp;

pub use record::{Record, RecordError};
pub use timestamp::{Timestamp, TimestampParseError};
