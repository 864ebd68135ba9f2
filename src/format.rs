//! Format plugins and the generic [`read`] call.
//!
//! A generic waveform reader picks a format either by name or by probing the
//! file header. [`WaveformFormat`] is the plugin contract; [`Rg16Format`] is
//! the implementation for Receiver Gather 1.6-1.

use tracing::debug;

use crate::options::ReadOptions;
use crate::reader::read_rg16;
use crate::record::Stream;
use crate::source::{FileHeader, TraceSource};
use crate::{Rg16Error, Result};

/// A waveform format that can be selected by name or detected.
pub trait WaveformFormat {
    /// Short name accepted by [`read`], matched case-insensitively.
    fn name(&self) -> &'static str;

    /// True if the general header identifies this format.
    fn matches(&self, header: &FileHeader) -> bool;

    fn read(&self, source: &mut dyn TraceSource, options: &ReadOptions) -> Result<Stream>;
}

/// Receiver Gather 1.6-1.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rg16Format;

impl WaveformFormat for Rg16Format {
    fn name(&self) -> &'static str {
        "rg16"
    }

    fn matches(&self, header: &FileHeader) -> bool {
        header.is_rg16()
    }

    fn read(&self, source: &mut dyn TraceSource, options: &ReadOptions) -> Result<Stream> {
        read_rg16(source, options)
    }
}

const FORMATS: &[&dyn WaveformFormat] = &[&Rg16Format];

/// All known formats, in detection order.
pub fn formats() -> &'static [&'static dyn WaveformFormat] {
    FORMATS
}

/// Look a format up by name.
pub fn find_format(name: &str) -> Option<&'static dyn WaveformFormat> {
    FORMATS
        .iter()
        .copied()
        .find(|f| f.name().eq_ignore_ascii_case(name))
}

/// First format whose header check accepts `header`.
pub fn detect_format(header: &FileHeader) -> Option<&'static dyn WaveformFormat> {
    FORMATS.iter().copied().find(|f| f.matches(header))
}

/// Read a source with a named format, or detect it when `format` is `None`.
///
/// Naming the format skips detection, the same as calling the format's
/// reader directly.
///
/// # Example
///
/// ```
/// use rg16_rs::{read, read_rg16, FileHeader, MemorySource, ReadOptions, TraceHeader};
///
/// let source = MemorySource::new(FileHeader::rg16(1))
///     .with_trace(TraceHeader::new().with_sampling_rate(250.0), vec![0.5; 8]);
/// let opts = ReadOptions::new();
///
/// let detected = read(&mut source.clone(), None, &opts).unwrap();
/// let named = read(&mut source.clone(), Some("RG16"), &opts).unwrap();
/// let direct = read_rg16(&mut source.clone(), &opts).unwrap();
/// assert_eq!(detected, named);
/// assert_eq!(named, direct);
/// ```
pub fn read(
    source: &mut dyn TraceSource,
    format: Option<&str>,
    options: &ReadOptions,
) -> Result<Stream> {
    let plugin = match format {
        Some(name) => find_format(name).ok_or_else(|| Rg16Error::UnknownFormat(name.to_string()))?,
        None => detect_format(source.file_header()).ok_or(Rg16Error::UnrecognizedFormat)?,
    };
    debug!(format = plugin.name(), detected = format.is_none(), "reading waveform file");
    plugin.read(source, options)
}
