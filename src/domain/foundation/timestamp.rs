//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Creates a new timestamp by adding the specified number of hours.
    pub fn plus_hours(&self, hours: i64) -> Self {
        Self(self.0 + Duration::hours(hours))
    }

    /// Whole days from this timestamp until `other` (floored).
    ///
    /// Negative if `other` is in the past relative to self.
    pub fn days_until(&self, other: &Timestamp) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// Whole hours from this timestamp until `other` (floored).
    pub fn hours_until(&self, other: &Timestamp) -> i64 {
        other.0.signed_duration_since(self.0).num_hours()
    }

    /// Approximate whole months elapsed since `other` (30-day months).
    pub fn months_since(&self, other: &Timestamp) -> i64 {
        self.0.signed_duration_since(other.0).num_days() / 30
    }

    /// Midnight UTC of this timestamp's calendar day.
    pub fn start_of_day(&self) -> Self {
        Self(
            self.0
                .date_naive()
                .and_hms_opt(0, 0, 0)
                .unwrap_or_default()
                .and_utc(),
        )
    }

    /// Returns the RFC 3339 rendering of this timestamp.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn ts(s: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc),
        )
    }

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let t = Timestamp::now();
        let after = Utc::now();

        assert!(t.as_datetime() >= &before);
        assert!(t.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_is_before_and_after_work() {
        let t1 = ts("2024-01-15T10:00:00Z");
        let t2 = ts("2024-01-16T10:00:00Z");

        assert!(t1.is_before(&t2));
        assert!(t2.is_after(&t1));
        assert!(!t2.is_before(&t1));
    }

    #[test]
    fn plus_days_adds_correctly() {
        let t = ts("2024-01-15T10:00:00Z");
        assert_eq!(t.plus_days(3).as_datetime().day(), 18);
        assert_eq!(t.minus_days(14).as_datetime().day(), 1);
    }

    #[test]
    fn days_until_floors_partial_days() {
        let now = ts("2024-01-15T10:00:00Z");
        let deadline = ts("2024-01-18T09:00:00Z");
        // 2 days 23 hours floors to 2
        assert_eq!(now.days_until(&deadline), 2);

        let deadline = ts("2024-01-18T10:00:00Z");
        assert_eq!(now.days_until(&deadline), 3);
    }

    #[test]
    fn days_until_is_negative_for_past() {
        let now = ts("2024-01-15T10:00:00Z");
        let past = ts("2024-01-10T10:00:00Z");
        assert_eq!(now.days_until(&past), -5);
    }

    #[test]
    fn hours_until_works() {
        let now = ts("2024-01-15T10:00:00Z");
        let later = ts("2024-01-16T04:30:00Z");
        assert_eq!(now.hours_until(&later), 18);
    }

    #[test]
    fn start_of_day_truncates_to_midnight() {
        let t = ts("2024-01-15T17:42:10Z");
        assert_eq!(t.start_of_day(), ts("2024-01-15T00:00:00Z"));
    }

    #[test]
    fn months_since_uses_thirty_day_months() {
        let hired = ts("2023-01-15T00:00:00Z");
        let now = ts("2024-01-15T00:00:00Z");
        assert_eq!(now.months_since(&hired), 12);
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let t = ts("2024-01-15T10:30:00Z");
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("2024-01-15"));
    }

    #[test]
    fn timestamp_deserializes_from_json() {
        let t: Timestamp = serde_json::from_str("\"2024-01-15T10:30:00Z\"").unwrap();
        assert_eq!(t.as_datetime().year(), 2024);
    }
}
