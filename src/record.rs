//! Output types: [`Trace`], its [`Stats`], and the [`Stream`] that holds them.

use std::fmt;

use crate::id::TraceId;
use crate::source::TraceHeader;
use crate::time::UtcTime;
use crate::types::{self, Component, SensorType};

/// Raw RG16 header fields kept when reading with `details` enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceDetails {
    pub file_number: u32,
    pub trace_number: u32,
    pub receiver_line: u32,
    pub receiver_point: u32,
    pub point_index: u8,
    pub channel_set: u8,
    pub component: u8,
    pub sensor_type: SensorType,
    pub unit_serial: u32,
}

impl TraceDetails {
    pub fn from_header(file_number: u32, header: &TraceHeader) -> Self {
        Self {
            file_number,
            trace_number: header.trace_number,
            receiver_line: header.receiver_line,
            receiver_point: header.receiver_point,
            point_index: header.point_index,
            channel_set: header.channel_set,
            component: header.component,
            sensor_type: header.sensor_type,
            unit_serial: header.unit_serial,
        }
    }
}

/// Trace metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub network: String,
    pub station: String,
    pub location: String,
    pub channel: String,
    pub starttime: UtcTime,
    pub sampling_rate: f64,
    pub npts: usize,
    /// Present only when reading with `details` enabled.
    pub rg16: Option<TraceDetails>,
}

impl Stats {
    /// Stats for a trace described by `header`, with the raw component code
    /// in the channel name.
    ///
    /// Network, station, and location are the receiver line, receiver
    /// point, and point index.
    pub fn from_header(header: &TraceHeader) -> Self {
        Self {
            network: header.receiver_line.to_string(),
            station: header.receiver_point.to_string(),
            location: header.point_index.to_string(),
            channel: types::channel_code(
                header.sampling_rate,
                header.sensor_type,
                Component::Raw(header.component),
            ),
            starttime: header.start_time,
            sampling_rate: header.sampling_rate,
            npts: header.npts,
            rg16: None,
        }
    }

    /// Seconds between samples.
    pub fn delta(&self) -> f64 {
        1.0 / self.sampling_rate
    }

    /// Time of the last sample.
    pub fn endtime(&self) -> UtcTime {
        if self.npts == 0 {
            return self.starttime;
        }
        self.starttime
            .add_seconds((self.npts - 1) as f64 * self.delta())
    }

    pub fn id(&self) -> TraceId {
        TraceId::from_nslc(&self.network, &self.station, &self.location, &self.channel)
    }
}

/// A continuous run of samples from one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub stats: Stats,
    pub data: Vec<f32>,
}

impl Trace {
    /// Build a trace, setting `stats.npts` from the data length.
    pub fn new(mut stats: Stats, data: Vec<f32>) -> Self {
        stats.npts = data.len();
        Self { stats, data }
    }

    pub fn id(&self) -> TraceId {
        self.stats.id()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} - {} | {} Hz, {} samples",
            self.id(),
            self.stats.starttime,
            self.stats.endtime(),
            self.stats.sampling_rate,
            self.stats.npts,
        )
    }
}

/// Ordered collection of traces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stream {
    traces: Vec<Trace>,
}

impl Stream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, trace: Trace) {
        self.traces.push(trace);
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trace> {
        self.traces.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Trace> {
        self.traces.iter_mut()
    }

    pub fn into_traces(self) -> Vec<Trace> {
        self.traces
    }

    /// Traces whose id equals `id`.
    pub fn select<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Trace> + 'a {
        self.traces.iter().filter(move |t| t.id().as_str() == id)
    }

    /// Sort by id, then start time.
    pub fn sort(&mut self) {
        self.traces
            .sort_by(|a, b| (a.id(), a.stats.starttime).cmp(&(b.id(), b.stats.starttime)));
    }
}

impl From<Vec<Trace>> for Stream {
    fn from(traces: Vec<Trace>) -> Self {
        Self { traces }
    }
}

impl FromIterator<Trace> for Stream {
    fn from_iter<I: IntoIterator<Item = Trace>>(iter: I) -> Self {
        Self {
            traces: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Stream {
    type Item = Trace;
    type IntoIter = std::vec::IntoIter<Trace>;

    fn into_iter(self) -> Self::IntoIter {
        self.traces.into_iter()
    }
}

impl<'a> IntoIterator for &'a Stream {
    type Item = &'a Trace;
    type IntoIter = std::slice::Iter<'a, Trace>;

    fn into_iter(self) -> Self::IntoIter {
        self.traces.iter()
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Trace(s) in Stream:", self.traces.len())?;
        for trace in &self.traces {
            writeln!(f, "{trace}")?;
        }
        Ok(())
    }
}
