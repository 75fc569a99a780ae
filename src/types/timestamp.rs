//! UTC timestamp with a year-one zero value.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

/// Seconds from 0001-01-01T00:00:00Z to the Unix epoch.
const YEAR_ONE_SECS: i64 = -62_135_596_800;

/// Timestamp field value, second precision, always UTC.
///
/// The zero value is `0001-01-01T00:00:00Z`. Storage engines that write the
/// all-zero date sentinel map onto this value. Earlier instants, down to
/// year 0, still parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the zero value, `0001-01-01T00:00:00Z`.
    #[must_use]
    pub fn min() -> Self {
        Timestamp(DateTime::from_timestamp(YEAR_ONE_SECS, 0).unwrap_or(DateTime::<Utc>::MIN_UTC))
    }

    /// Builds a timestamp from calendar components, or None if they are not a valid instant.
    #[must_use]
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, min, sec))
            .map(|naive| Timestamp(naive.and_utc()))
    }

    /// Returns the underlying chrono value.
    #[must_use]
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::min()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp(value)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%SZ"))
    }
}
