//! Error types for reading RG16 data.

use thiserror::Error;

use crate::time::UtcTime;

#[derive(Debug, Error)]
pub enum Rg16Error {
    #[error("invalid time window: starttime {start} is after endtime {end}")]
    InvalidTimeWindow { start: UtcTime, end: UtcTime },

    #[error("invalid time: {0}")]
    InvalidTime(String),

    #[error("invalid sampling rate: {0} Hz")]
    InvalidSamplingRate(f64),

    #[error("component code {0} has no standard orientation")]
    UnknownComponent(u8),

    #[error("component code {0} does not fit a single-digit channel component")]
    InvalidComponent(u8),

    #[error("channel {0:?} does not end in a component code")]
    InvalidChannel(String),

    #[error("unknown waveform format: {0}")]
    UnknownFormat(String),

    #[error("unrecognized file format")]
    UnrecognizedFormat,

    #[error("sample count mismatch: requested {expected}, decoded {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    #[error("decode error: {0}")]
    Decode(String),

    /// I/O failure reported by a [`TraceSource`](crate::TraceSource) implementation.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Rg16Error>;
