//! Iterator-based reader and the [`read_rg16`] entry point.
//!
//! [`Rg16Reader`] walks the trace headers of a [`TraceSource`], drops the
//! traces that fall outside the requested time window, and asks the source
//! only for the samples inside it. [`read_rg16`] collects the reader into a
//! [`Stream`] and applies merging.

use std::ops::Range;

use tracing::{debug, info};

use crate::merge;
use crate::options::ReadOptions;
use crate::orientation;
use crate::record::{Stats, Stream, Trace, TraceDetails};
use crate::source::{TraceHeader, TraceSource};
use crate::{Rg16Error, Result};

/// Fraction of a sample interval tolerated when snapping window edges to
/// sample indices.
const SAMPLE_EPSILON: f64 = 1e-6;

/// Read an RG16 file into a [`Stream`].
///
/// # Example
///
/// ```
/// use rg16_rs::{read_rg16, FileHeader, MemorySource, ReadOptions, TraceHeader, UtcTime};
///
/// let mut source = MemorySource::new(FileHeader::rg16(1));
/// for component in 2..=4 {
///     source.push(
///         TraceHeader::new()
///             .with_receiver(1, 1, 0)
///             .with_channel(1, component)
///             .with_sampling_rate(500.0),
///         vec![1.0, -1.0, 0.5],
///     );
/// }
///
/// let opts = ReadOptions::new().with_standard_orientation(true);
/// let stream = read_rg16(&mut source, &opts).unwrap();
/// let channels: Vec<_> = stream.iter().map(|t| t.stats.channel.clone()).collect();
/// assert_eq!(channels, ["DPZ", "DPN", "DPE"]);
/// assert_eq!(stream.traces()[0].data, vec![-1.0, 1.0, -0.5]);
/// ```
pub fn read_rg16<S: TraceSource + ?Sized>(source: &mut S, options: &ReadOptions) -> Result<Stream> {
    let traces = Rg16Reader::new(source, options.clone())?.collect::<Result<Vec<_>>>()?;
    let read = traces.len();

    let traces = if options.merge {
        merge::quick_merge(traces)
    } else {
        traces
    };

    info!(
        read,
        returned = traces.len(),
        merge = options.merge,
        standard_orientation = options.standard_orientation,
        "read RG16 traces"
    );
    Ok(Stream::from(traces))
}

/// Iterator over the traces of an RG16 source.
///
/// Each call to `next()` advances to the next trace overlapping the time
/// window and reads its in-window samples. Iteration stops when the source
/// is exhausted or an error occurs.
pub struct Rg16Reader<'a, S: TraceSource + ?Sized> {
    source: &'a mut S,
    options: ReadOptions,
    file_number: u32,
    done: bool,
}

impl<'a, S: TraceSource + ?Sized> Rg16Reader<'a, S> {
    /// Create a reader, validating the options.
    pub fn new(source: &'a mut S, options: ReadOptions) -> Result<Self> {
        options.validate()?;
        let file_number = source.file_header().file_number;
        Ok(Self {
            source,
            options,
            file_number,
            done: false,
        })
    }

    fn read_trace(&mut self, header: &TraceHeader, range: Range<usize>) -> Result<Trace> {
        let expected = range.len();
        let mut data = self.source.read_samples(header, range.clone())?;
        if data.len() != expected {
            return Err(Rg16Error::SampleCountMismatch {
                expected,
                actual: data.len(),
            });
        }

        let mut stats = Stats::from_header(header);
        stats.starttime = header
            .start_time
            .add_seconds(range.start as f64 / header.sampling_rate);
        if self.options.standard_orientation {
            let component = orientation::orient(header, &mut data)?;
            stats.channel.pop();
            stats.channel.push(component.code());
        }
        if self.options.details {
            stats.rg16 = Some(TraceDetails::from_header(self.file_number, header));
        }

        debug!(
            trace = header.trace_number,
            samples = data.len(),
            offset = range.start,
            "read trace"
        );
        Ok(Trace::new(stats, data))
    }

    /// Next trace to read, with its in-window sample range.
    fn next_selected(&mut self) -> Result<Option<(TraceHeader, Range<usize>)>> {
        while let Some(header) = self.source.next_header()? {
            let rate = header.sampling_rate;
            if !(rate.is_finite() && rate > 0.0) {
                return Err(Rg16Error::InvalidSamplingRate(rate));
            }
            if header.component > 9 {
                return Err(Rg16Error::InvalidComponent(header.component));
            }
            if !self.options.overlaps(header.start_time, header.end_time()) {
                debug!(trace = header.trace_number, "trace outside time window, skipped");
                continue;
            }
            let range = window_range(&header, &self.options);
            if range.is_empty() && header.npts > 0 {
                debug!(trace = header.trace_number, "no samples inside time window, skipped");
                continue;
            }
            return Ok(Some((header, range)));
        }
        Ok(None)
    }
}

impl<S: TraceSource + ?Sized> Iterator for Rg16Reader<'_, S> {
    type Item = Result<Trace>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = match self.next_selected() {
            Ok(Some((header, range))) => self.read_trace(&header, range),
            Ok(None) => {
                self.done = true;
                return None;
            }
            Err(e) => Err(e),
        };
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}

/// Indices of the samples of `header` that lie inside the window,
/// inclusive of samples exactly on either edge.
fn window_range(header: &TraceHeader, options: &ReadOptions) -> Range<usize> {
    let npts = header.npts;
    let rate = header.sampling_rate;

    let first = match options.starttime {
        Some(start) if start > header.start_time => {
            let offset = start.seconds_since(header.start_time) * rate;
            ((offset - SAMPLE_EPSILON).ceil().max(0.0) as usize).min(npts)
        }
        _ => 0,
    };
    let end = match options.endtime {
        Some(end) => {
            let offset = end.seconds_since(header.start_time) * rate;
            let last = (offset + SAMPLE_EPSILON).floor();
            if last < 0.0 {
                0
            } else if last >= npts as f64 {
                npts
            } else {
                last as usize + 1
            }
        }
        None => npts,
    };
    first.min(end)..end
}
