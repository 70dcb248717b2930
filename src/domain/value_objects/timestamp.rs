//! # Timestamp Value Object
//!
//! DateTime wrapper with domain-specific methods.
//!
//! This module provides the [`Timestamp`] type used for event start/end
//! times and participation records. Always UTC.
//!
//! # Examples
//!
//! ```
//! use event_membership::domain::value_objects::timestamp::Timestamp;
//!
//! let now = Timestamp::now();
//! let later = now.add_secs(60);
//!
//! assert!(later.is_after(&now));
//! ```

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp.
///
/// Wraps `chrono::DateTime<Utc>` with the handful of operations the
/// membership domain needs.
///
/// # Invariants
///
/// - Always in UTC timezone
///
/// # Examples
///
/// ```
/// use event_membership::domain::value_objects::timestamp::Timestamp;
///
/// let start = Timestamp::now();
/// let end = start.add_hours(2);
/// assert!(end.is_after(&start));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a `chrono` datetime.
    #[must_use]
    pub const fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Creates a timestamp from Unix milliseconds.
    ///
    /// Returns `None` if the value is out of the representable range.
    #[must_use]
    pub fn from_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis).single().map(Self)
    }

    /// Returns the timestamp as Unix milliseconds.
    #[must_use]
    pub const fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Returns the inner `chrono` datetime.
    #[must_use]
    pub const fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Returns a timestamp `secs` seconds after this one.
    #[must_use]
    pub fn add_secs(&self, secs: i64) -> Self {
        Self(self.0 + Duration::seconds(secs))
    }

    /// Returns a timestamp `hours` hours after this one.
    #[must_use]
    pub fn add_hours(&self, hours: i64) -> Self {
        Self(self.0 + Duration::hours(hours))
    }

    /// Returns a timestamp `days` days after this one.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Returns true if this timestamp is strictly after `other`.
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.0 > other.0
    }

    /// Returns true if this timestamp is strictly before `other`.
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_time() {
        let now = Timestamp::now();
        let later = now.add_secs(1);
        assert!(later.is_after(&now));
        assert!(now.is_before(&later));
        assert!(now < later);
    }

    #[test]
    fn add_hours_and_days() {
        let now = Timestamp::now();
        assert_eq!(now.add_hours(24), now.add_days(1));
    }

    #[test]
    fn millis_roundtrip() {
        let ts = Timestamp::from_millis(1_700_000_000_000).unwrap();
        assert_eq!(ts.as_millis(), 1_700_000_000_000);
    }

    #[test]
    fn not_after_itself() {
        let now = Timestamp::now();
        assert!(!now.is_after(&now));
        assert!(!now.is_before(&now));
    }

    #[test]
    fn serializes_as_rfc3339_string() {
        let ts = Timestamp::from_millis(0).unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("1970-01-01"));
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ts);
    }
}
