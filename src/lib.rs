//! Reader layer for Fairfield Receiver Gather 1.6-1 (RG16) seismic data.
//!
//! RG16 is the continuous-data format of the Fairfield Nodal Zland node
//! line. Byte-level decoding is supplied by a [`TraceSource`]
//! implementation; this crate turns what it decodes into a [`Stream`] of
//! [`Trace`]s, with time-window selection, per-channel merging, and
//! standard (Z/N/E) orientation.
//!
//! Component codes in the file are 2, 3 and 4, because there is no
//! standard deployment orientation.
//!
//! # Reading
//!
//! A file can be read through the generic [`read`] call, with the format
//! named or detected from the general header, or through [`read_rg16`]
//! directly. All three are equivalent:
//!
//! ```
//! use rg16_rs::{read, read_rg16, FileHeader, MemorySource, ReadOptions, TraceHeader, UtcTime};
//!
//! let mut source = MemorySource::new(FileHeader::rg16(1));
//! for (i, component) in [2u8, 3, 4, 2, 3, 4].into_iter().enumerate() {
//!     let start = UtcTime::from_micros(1_485_907_200_000_000 + (i as i64 / 3) * 1_000);
//!     source.push(
//!         TraceHeader::new()
//!             .with_receiver(1, 1, 0)
//!             .with_channel(1, component)
//!             .with_start_time(start)
//!             .with_sampling_rate(1000.0),
//!         vec![0.0],
//!     );
//! }
//!
//! let opts = ReadOptions::new();
//! let a = read(&mut source.clone(), None, &opts).unwrap();
//! let b = read(&mut source.clone(), Some("rg16"), &opts).unwrap();
//! let c = read_rg16(&mut source.clone(), &opts).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(b, c);
//! assert_eq!(c.len(), 6);
//! ```
//!
//! # Options
//!
//! - `merge` joins the many traces of one channel into a single trace. It
//!   is much faster than a generic merge when there are thousands of
//!   traces, because RG16 data is known to be continuous and uniformly
//!   typed.
//! - `starttime` / `endtime` load only a slice of the file; traces outside
//!   the window are never decoded.
//! - `standard_orientation` declares that the file holds 1C instruments, or
//!   that the nodes were deployed with the gold contact terminals facing
//!   north. Components are then named Z, N, E and the Z polarity is
//!   corrected.
//! - `details` attaches the raw RG16 header fields to each trace.
//!
//! ```
//! use rg16_rs::{read_rg16, FileHeader, MemorySource, ReadOptions, TraceHeader};
//!
//! let mut source = MemorySource::new(FileHeader::rg16(1));
//! source.push(TraceHeader::new().with_sampling_rate(500.0), vec![1.0, 2.0]);
//! source.push(
//!     TraceHeader::new()
//!         .with_sampling_rate(500.0)
//!         .with_start_time(rg16_rs::UtcTime::from_nanos(4_000_000)),
//!     vec![3.0],
//! );
//!
//! let opts = ReadOptions::new().with_merge(true).with_standard_orientation(true);
//! let stream = read_rg16(&mut source, &opts).unwrap();
//! assert_eq!(stream.len(), 1);
//! assert_eq!(stream.traces()[0].stats.channel, "DPZ");
//! assert_eq!(stream.traces()[0].data, vec![-1.0, -2.0, -3.0]);
//! ```

pub mod error;
pub mod format;
pub mod id;
pub mod merge;
pub mod options;
pub mod orientation;
pub mod reader;
pub mod record;
pub mod source;
pub mod time;
pub mod types;

pub use error::{Result, Rg16Error};
pub use format::{Rg16Format, WaveformFormat, read};
pub use id::TraceId;
pub use options::ReadOptions;
pub use reader::{Rg16Reader, read_rg16};
pub use record::{Stats, Stream, Trace, TraceDetails};
pub use source::{FileHeader, MemorySource, TraceHeader, TraceSource};
pub use time::UtcTime;
pub use types::{Component, SensorType};
