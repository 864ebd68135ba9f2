//! Read options shared by [`read_rg16`](crate::read_rg16) and
//! [`read`](crate::read).

use serde::{Deserialize, Serialize};

use crate::time::UtcTime;
use crate::{Rg16Error, Result};

/// Options controlling how an RG16 file is turned into a stream.
///
/// Build with the `with_*` methods, or deserialize from a config file;
/// missing fields take their defaults.
///
/// # Example
///
/// ```
/// use rg16_rs::{ReadOptions, UtcTime};
///
/// let opts = ReadOptions::new()
///     .with_merge(true)
///     .with_starttime("2017-02-01T00:00:00Z".parse::<UtcTime>().unwrap())
///     .with_standard_orientation(true);
/// assert!(opts.merge);
/// assert!(opts.endtime.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadOptions {
    /// Join traces of the same channel into one continuous trace.
    pub merge: bool,
    /// Skip data before this time.
    pub starttime: Option<UtcTime>,
    /// Skip data after this time.
    pub endtime: Option<UtcTime>,
    /// Map components 2/3/4 to Z/N/E and invert Z polarity.
    pub standard_orientation: bool,
    /// Attach raw RG16 header fields to each trace.
    pub details: bool,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_merge(mut self, merge: bool) -> Self {
        self.merge = merge;
        self
    }

    pub fn with_starttime(mut self, time: UtcTime) -> Self {
        self.starttime = Some(time);
        self
    }

    pub fn with_endtime(mut self, time: UtcTime) -> Self {
        self.endtime = Some(time);
        self
    }

    /// Set both ends of the time window.
    pub fn with_window(self, start: UtcTime, end: UtcTime) -> Self {
        self.with_starttime(start).with_endtime(end)
    }

    pub fn with_standard_orientation(mut self, enabled: bool) -> Self {
        self.standard_orientation = enabled;
        self
    }

    pub fn with_details(mut self, details: bool) -> Self {
        self.details = details;
        self
    }

    /// Reject a window whose start lies after its end.
    pub fn validate(&self) -> Result<()> {
        if let (Some(start), Some(end)) = (self.starttime, self.endtime) {
            if start > end {
                return Err(Rg16Error::InvalidTimeWindow { start, end });
            }
        }
        Ok(())
    }

    /// True if `[start, end]` intersects the configured window.
    pub fn overlaps(&self, start: UtcTime, end: UtcTime) -> bool {
        self.starttime.is_none_or(|s| end >= s) && self.endtime.is_none_or(|e| start <= e)
    }
}
