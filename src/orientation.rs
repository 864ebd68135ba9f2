//! Standard orientation: raw components 2/3/4 become Z/N/E.
//!
//! RG16 files carry no deployment orientation, so the mapping is only
//! correct for 1C instruments or for 3C nodes deployed with the gold
//! contact terminals facing north. The vertical channel is stored with
//! inverted polarity and is flipped on the way out.

use crate::record::Trace;
use crate::source::TraceHeader;
use crate::types::Component;
use crate::{Rg16Error, Result};

/// Orient samples read for `header` in place and return their component.
pub fn orient(header: &TraceHeader, data: &mut [f32]) -> Result<Component> {
    let component = Component::standard(header.component)?;
    correct_polarity(component, data);
    Ok(component)
}

/// Orient an already read trace whose channel still ends in a raw code.
///
/// Traces already ending in Z, N, or E are left untouched, so applying this
/// twice is harmless.
pub fn orient_trace(trace: &mut Trace) -> Result<()> {
    let last = trace.stats.channel.chars().last();
    if matches!(last, Some('Z' | 'N' | 'E')) {
        return Ok(());
    }
    let code = last
        .and_then(|c| c.to_digit(10))
        .and_then(|d| u8::try_from(d).ok())
        .ok_or_else(|| Rg16Error::InvalidChannel(trace.stats.channel.clone()))?;
    let component = Component::standard(code)?;
    correct_polarity(component, &mut trace.data);
    trace.stats.channel.pop();
    trace.stats.channel.push(component.code());
    Ok(())
}

/// Invert the vertical component; horizontals pass through.
pub fn correct_polarity(component: Component, data: &mut [f32]) {
    if component.is_vertical() {
        for sample in data.iter_mut() {
            *sample = -*sample;
        }
    }
}
