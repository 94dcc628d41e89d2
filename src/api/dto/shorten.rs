//! DTOs for the shorten endpoint.

use serde::Deserialize;
use validator::Validate;

/// Request to shorten a single URL.
///
/// A body without a `url` field deserializes to an empty URL and fails
/// validation, so unknown-field-only payloads are rejected as invalid input.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[serde(default)]
    #[validate(length(min = 1, message = "URL field is missing or empty"))]
    pub url: String,
}
