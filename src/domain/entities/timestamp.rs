//! UTC timestamp with a fixed RFC 3339 wire format.

use chrono::{DateTime, DurationRound, SecondsFormat, TimeDelta, Utc};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// A UTC instant with millisecond precision.
///
/// Serialized as an RFC 3339 string with exactly three fractional digits and a
/// `Z` suffix, e.g. `2021-09-01T12:00:00.000Z`. Values are truncated to whole
/// milliseconds on construction, so a timestamp always survives a round trip
/// through JSON or the document store unchanged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct Timestamp(DateTime<Utc>);

/// Error returned when a string is not an RFC 3339 timestamp.
#[derive(Debug, thiserror::Error)]
#[error("invalid RFC 3339 timestamp {input:?}: {source}")]
pub struct TimestampParseError {
    input: String,
    source: chrono::ParseError,
}

impl Timestamp {
    /// Current time, truncated to milliseconds.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Wraps a `DateTime<Utc>`, truncating it to milliseconds.
    pub fn from_datetime(value: DateTime<Utc>) -> Self {
        let truncated = value
            .duration_trunc(TimeDelta::milliseconds(1))
            .unwrap_or(value);
        Self(truncated)
    }

    /// Returns the underlying `DateTime<Utc>`.
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self::from_datetime(dt.with_timezone(&Utc)))
            .map_err(|source| TimestampParseError {
                input: s.to_string(),
                source,
            })
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from_datetime(value)
    }
}
