//! Fast merge of traces that belong to the same channel.
//!
//! RG16 continuous files split each channel into many short traces. Since
//! they share one sample type and rate, merging reduces to sorting by start
//! time and concatenating. Runs are only joined when the next trace starts
//! one sample interval after the previous one ends (within half a sample);
//! anything else starts a new trace.

use std::collections::BTreeMap;

use tracing::warn;

use crate::id::TraceId;
use crate::record::Trace;

/// Merge contiguous traces per channel.
///
/// The result is ordered by trace id, then start time, and never holds more
/// traces than the input.
pub fn quick_merge(traces: Vec<Trace>) -> Vec<Trace> {
    let mut groups: BTreeMap<TraceId, Vec<Trace>> = BTreeMap::new();
    for trace in traces {
        groups.entry(trace.id()).or_default().push(trace);
    }

    let mut merged = Vec::with_capacity(groups.len());
    for (id, mut group) in groups {
        group.sort_by_key(|t| t.stats.starttime);
        let mut iter = group.into_iter();
        let Some(mut current) = iter.next() else {
            continue;
        };
        for next in iter {
            if is_contiguous(&current, &next) {
                current.data.extend(next.data);
                current.stats.npts = current.data.len();
            } else {
                warn!(
                    %id,
                    end = %current.stats.endtime(),
                    next_start = %next.stats.starttime,
                    "discontinuity in channel, keeping traces separate"
                );
                merged.push(std::mem::replace(&mut current, next));
            }
        }
        merged.push(current);
    }
    merged
}

/// True if `next` continues `prev` without a gap or overlap.
fn is_contiguous(prev: &Trace, next: &Trace) -> bool {
    if prev.stats.sampling_rate != next.stats.sampling_rate {
        return false;
    }
    let delta = prev.stats.delta();
    let expected = prev
        .stats
        .starttime
        .add_seconds(prev.stats.npts as f64 * delta);
    next.stats.starttime.seconds_since(expected).abs() <= delta / 2.0
}
