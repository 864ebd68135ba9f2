//! The decoder seam: header structs and the [`TraceSource`] trait.
//!
//! Byte-level RG16 decoding lives outside this crate. A decoder exposes a
//! file through [`TraceSource`]: the general header, a streaming walk over
//! trace headers, and on-demand decoding of a sample range. Keeping header
//! walks separate from sample reads lets time-windowed reads skip traces
//! without touching their data.
//!
//! [`MemorySource`] implements the trait over traces that are already
//! decoded.

use std::ops::Range;

use crate::time::UtcTime;
use crate::types::SensorType;
use crate::{Rg16Error, Result};

/// SEG-D format code for demultiplexed 32-bit IEEE floats.
pub const FORMAT_CODE_IEEE_F32: u16 = 8058;

/// SEG-D manufacturer code assigned to Fairfield.
pub const MANUFACTURER_FAIRFIELD: u8 = 20;

/// Format revision 1.6, stored as major and minor bytes.
pub const REVISION_1_6: u16 = 0x0106;

/// Identifying fields of the RG16 general header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub file_number: u32,
    pub format_code: u16,
    pub manufacturer_code: u8,
    pub revision: u16,
}

impl FileHeader {
    /// Header of a well-formed RG16 file with the given file number.
    pub fn rg16(file_number: u32) -> Self {
        Self {
            file_number,
            format_code: FORMAT_CODE_IEEE_F32,
            manufacturer_code: MANUFACTURER_FAIRFIELD,
            revision: REVISION_1_6,
        }
    }

    /// True when the format code, manufacturer, and revision identify
    /// Receiver Gather 1.6.
    pub fn is_rg16(&self) -> bool {
        self.format_code == FORMAT_CODE_IEEE_F32
            && self.manufacturer_code == MANUFACTURER_FAIRFIELD
            && self.revision == REVISION_1_6
    }
}

/// Decoded trace header and trace header extension fields.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceHeader {
    /// Decoder-specific locator, typically the byte offset of the trace block.
    pub position: u64,
    pub trace_number: u32,
    pub receiver_line: u32,
    pub receiver_point: u32,
    pub point_index: u8,
    pub channel_set: u8,
    /// Raw component code (2, 3 or 4).
    pub component: u8,
    pub sensor_type: SensorType,
    pub unit_serial: u32,
    /// Time of the first sample.
    pub start_time: UtcTime,
    pub sampling_rate: f64,
    pub npts: usize,
}

impl TraceHeader {
    /// Header with zeroed identification, 1 Hz sampling, and no samples.
    pub fn new() -> Self {
        Self {
            position: 0,
            trace_number: 0,
            receiver_line: 0,
            receiver_point: 0,
            point_index: 0,
            channel_set: 1,
            component: 2,
            sensor_type: SensorType::Geophone,
            unit_serial: 0,
            start_time: UtcTime::epoch(),
            sampling_rate: 1.0,
            npts: 0,
        }
    }

    /// Set receiver line, receiver point, and point index.
    pub fn with_receiver(mut self, line: u32, point: u32, index: u8) -> Self {
        self.receiver_line = line;
        self.receiver_point = point;
        self.point_index = index;
        self
    }

    /// Set channel set number and raw component code.
    pub fn with_channel(mut self, channel_set: u8, component: u8) -> Self {
        self.channel_set = channel_set;
        self.component = component;
        self
    }

    pub fn with_sensor_type(mut self, sensor_type: SensorType) -> Self {
        self.sensor_type = sensor_type;
        self
    }

    pub fn with_unit_serial(mut self, serial: u32) -> Self {
        self.unit_serial = serial;
        self
    }

    pub fn with_start_time(mut self, time: UtcTime) -> Self {
        self.start_time = time;
        self
    }

    pub fn with_sampling_rate(mut self, rate: f64) -> Self {
        self.sampling_rate = rate;
        self
    }

    pub fn with_npts(mut self, npts: usize) -> Self {
        self.npts = npts;
        self
    }

    /// Time of the last sample.
    pub fn end_time(&self) -> UtcTime {
        if self.npts == 0 || self.sampling_rate <= 0.0 {
            return self.start_time;
        }
        self.start_time
            .add_seconds((self.npts - 1) as f64 / self.sampling_rate)
    }
}

impl Default for TraceHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Access to a decoded RG16 file.
pub trait TraceSource {
    /// General header of the file.
    fn file_header(&self) -> &FileHeader;

    /// Advance to the next trace header, or `None` at the end of the file.
    ///
    /// Must not decode sample data.
    fn next_header(&mut self) -> Result<Option<TraceHeader>>;

    /// Decode samples `range` (indices into `0..header.npts`) of the trace
    /// described by `header`.
    fn read_samples(&mut self, header: &TraceHeader, range: Range<usize>) -> Result<Vec<f32>>;
}

impl<T: TraceSource + ?Sized> TraceSource for &mut T {
    fn file_header(&self) -> &FileHeader {
        (**self).file_header()
    }

    fn next_header(&mut self) -> Result<Option<TraceHeader>> {
        (**self).next_header()
    }

    fn read_samples(&mut self, header: &TraceHeader, range: Range<usize>) -> Result<Vec<f32>> {
        (**self).read_samples(header, range)
    }
}

impl<T: TraceSource + ?Sized> TraceSource for Box<T> {
    fn file_header(&self) -> &FileHeader {
        (**self).file_header()
    }

    fn next_header(&mut self) -> Result<Option<TraceHeader>> {
        (**self).next_header()
    }

    fn read_samples(&mut self, header: &TraceHeader, range: Range<usize>) -> Result<Vec<f32>> {
        (**self).read_samples(header, range)
    }
}

/// In-memory [`TraceSource`] over already decoded traces.
///
/// A trace's `position` is its index in push order. The number of samples
/// handed out through [`read_samples`](TraceSource::read_samples) is
/// tracked in [`samples_read`](MemorySource::samples_read).
///
/// # Example
///
/// ```
/// use rg16_rs::{FileHeader, MemorySource, TraceHeader, TraceSource};
///
/// let mut source = MemorySource::new(FileHeader::rg16(1));
/// source.push(TraceHeader::new().with_sampling_rate(500.0), vec![1.0, 2.0, 3.0]);
///
/// let header = source.next_header().unwrap().unwrap();
/// assert_eq!(header.npts, 3);
/// assert_eq!(source.read_samples(&header, 1..3).unwrap(), vec![2.0, 3.0]);
/// assert!(source.next_header().unwrap().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct MemorySource {
    header: FileHeader,
    traces: Vec<(TraceHeader, Vec<f32>)>,
    cursor: usize,
    samples_read: usize,
}

impl MemorySource {
    pub fn new(header: FileHeader) -> Self {
        Self {
            header,
            traces: Vec::new(),
            cursor: 0,
            samples_read: 0,
        }
    }

    /// Append a trace. `position` and `npts` are overwritten to match the
    /// stored data; trace numbers left at zero are assigned sequentially.
    pub fn push(&mut self, mut header: TraceHeader, samples: Vec<f32>) {
        let index = self.traces.len();
        header.position = index as u64;
        header.npts = samples.len();
        if header.trace_number == 0 {
            header.trace_number = index as u32 + 1;
        }
        self.traces.push((header, samples));
    }

    /// Builder form of [`push`](MemorySource::push).
    pub fn with_trace(mut self, header: TraceHeader, samples: Vec<f32>) -> Self {
        self.push(header, samples);
        self
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Restart the header walk from the first trace.
    pub fn rewind(&mut self) {
        self.cursor = 0;
        self.samples_read = 0;
    }

    /// Total samples returned by `read_samples` since creation or rewind.
    pub fn samples_read(&self) -> usize {
        self.samples_read
    }
}

impl TraceSource for MemorySource {
    fn file_header(&self) -> &FileHeader {
        &self.header
    }

    fn next_header(&mut self) -> Result<Option<TraceHeader>> {
        let Some((header, _)) = self.traces.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;
        Ok(Some(header.clone()))
    }

    fn read_samples(&mut self, header: &TraceHeader, range: Range<usize>) -> Result<Vec<f32>> {
        let (_, samples) = self
            .traces
            .get(header.position as usize)
            .ok_or_else(|| Rg16Error::Decode(format!("no trace at position {}", header.position)))?;
        let slice = samples.get(range.clone()).ok_or_else(|| {
            Rg16Error::Decode(format!(
                "sample range {}..{} outside trace of {} samples",
                range.start,
                range.end,
                samples.len()
            ))
        })?;
        self.samples_read += slice.len();
        Ok(slice.to_vec())
    }
}
