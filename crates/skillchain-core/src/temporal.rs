//! # Temporal Types
//!
//! UTC-only timestamp type. Issuance times are assigned by the ledger at
//! write time and are never supplied by callers.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A UTC timestamp.
///
/// Displays as ISO 8601 with `Z` suffix, truncated to seconds
/// (e.g., `2026-01-15T12:00:00Z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp representing the current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create a timestamp from whole seconds since the Unix epoch.
    ///
    /// Returns `None` when the value is out of chrono's range.
    pub fn from_unix_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Whole seconds since the Unix epoch.
    pub fn unix_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Access the underlying `chrono::DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// ISO 8601 string with Z suffix, truncated to seconds.
    pub fn to_canonical_string(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_round_trip() {
        let ts = Timestamp::from_unix_secs(1_768_478_400).unwrap();
        assert_eq!(ts.unix_secs(), 1_768_478_400);
        assert_eq!(ts.to_string(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn display_truncates_subseconds() {
        let dt = Utc.timestamp_opt(1_768_478_400, 999_000_000).unwrap();
        assert_eq!(Timestamp::from(dt).to_string(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn ordering_follows_time() {
        let a = Timestamp::from_unix_secs(10).unwrap();
        let b = Timestamp::from_unix_secs(20).unwrap();
        assert!(a < b);
    }
}
