//! Data Transfer Objects for API requests and responses.
//!
//! Successful shorten and lookup responses serialize
//! [`crate::domain::entities::Record`] directly.

pub mod health;
pub mod shorten;
