//! Nanosecond-precision UTC timestamps.
//!
//! [`UtcTime`] is the only time type in the crate. RG16 trace headers stamp
//! the first sample in microseconds since the Unix epoch, so the decoder
//! usually builds one with [`UtcTime::from_micros`]. Calendar handling is
//! delegated to `chrono`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::{Rg16Error, Result};

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// UTC instant stored as nanoseconds since 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UtcTime {
    nanos: i64,
}

impl UtcTime {
    /// The Unix epoch.
    pub const fn epoch() -> Self {
        Self { nanos: 0 }
    }

    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    /// Build from microseconds since the epoch, the resolution of RG16
    /// first-sample timestamps.
    pub const fn from_micros(micros: i64) -> Self {
        Self {
            nanos: micros.saturating_mul(1_000),
        }
    }

    /// Build from ordinal calendar fields (year + day-of-year + time).
    ///
    /// # Examples
    ///
    /// ```
    /// use rg16_rs::UtcTime;
    ///
    /// let t = UtcTime::from_ordinal(2017, 32, 0, 0, 0, 0).unwrap();
    /// assert_eq!(t.to_string(), "2017-02-01T00:00:00.000000Z");
    /// ```
    pub fn from_ordinal(
        year: i32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
    ) -> Result<Self> {
        let naive = NaiveDate::from_yo_opt(year, day)
            .and_then(|date| date.and_hms_nano_opt(hour, minute, second, nanosecond))
            .ok_or_else(|| {
                Rg16Error::InvalidTime(format!(
                    "{year:04}-{day:03} {hour:02}:{minute:02}:{second:02}.{nanosecond:09}"
                ))
            })?;
        Self::from_datetime(&Utc.from_utc_datetime(&naive))
    }

    /// Convert from a `chrono` UTC datetime.
    ///
    /// Fails outside the range representable as i64 nanoseconds
    /// (roughly years 1677 to 2262).
    pub fn from_datetime(datetime: &DateTime<Utc>) -> Result<Self> {
        datetime
            .timestamp_nanos_opt()
            .map(Self::from_nanos)
            .ok_or_else(|| Rg16Error::InvalidTime(datetime.to_rfc3339()))
    }

    pub const fn nanos(self) -> i64 {
        self.nanos
    }

    /// Convert to a `chrono` UTC datetime.
    pub fn to_datetime(self) -> DateTime<Utc> {
        let secs = self.nanos.div_euclid(NANOS_PER_SECOND);
        let subsec = self.nanos.rem_euclid(NANOS_PER_SECOND) as u32;
        // Every i64 nanosecond count is inside chrono's range.
        DateTime::from_timestamp(secs, subsec).unwrap_or_default()
    }

    /// Shift by a (possibly fractional, possibly negative) number of seconds,
    /// rounded to the nearest nanosecond.
    pub fn add_seconds(self, seconds: f64) -> Self {
        let delta = (seconds * NANOS_PER_SECOND as f64).round() as i64;
        Self {
            nanos: self.nanos.saturating_add(delta),
        }
    }

    /// Seconds elapsed from `earlier` to `self` (negative if `earlier` is later).
    pub fn seconds_since(self, earlier: UtcTime) -> f64 {
        self.nanos.saturating_sub(earlier.nanos) as f64 / NANOS_PER_SECOND as f64
    }
}

impl Default for UtcTime {
    fn default() -> Self {
        Self::epoch()
    }
}

impl fmt::Display for UtcTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.to_datetime().format("%Y-%m-%dT%H:%M:%S%.6fZ")
        )
    }
}

impl FromStr for UtcTime {
    type Err = Rg16Error;

    /// Accepts RFC 3339 (`2017-02-01T00:00:00.5Z`, any offset) and the
    /// offset-less `YYYY-MM-DDTHH:MM:SS[.f]` form, read as UTC.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
            return Self::from_datetime(&datetime.with_timezone(&Utc));
        }
        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(|e| Rg16Error::InvalidTime(format!("{s:?}: {e}")))?;
        Self::from_datetime(&Utc.from_utc_datetime(&naive))
    }
}

impl TryFrom<String> for UtcTime {
    type Error = Rg16Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<UtcTime> for String {
    fn from(t: UtcTime) -> Self {
        t.to_string()
    }
}

impl From<DateTime<Utc>> for UtcTime {
    /// Saturates at the ends of the i64 nanosecond range.
    fn from(datetime: DateTime<Utc>) -> Self {
        match datetime.timestamp_nanos_opt() {
            Some(nanos) => Self::from_nanos(nanos),
            None if datetime.timestamp() < 0 => Self::from_nanos(i64::MIN),
            None => Self::from_nanos(i64::MAX),
        }
    }
}
