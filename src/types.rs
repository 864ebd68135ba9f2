//! Shared types: [`SensorType`], [`Component`], and SEED channel-code helpers.

use std::fmt;

use crate::{Rg16Error, Result};

/// Sensor attached to an RG16 channel, as reported in the trace header
/// extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorType {
    Geophone,
    Hydrophone,
    Accelerometer,
    /// Any other vendor sensor type number.
    Other(u8),
}

impl SensorType {
    /// SEED instrument code (second channel character).
    pub fn instrument_code(self) -> char {
        match self {
            Self::Geophone | Self::Other(_) => 'P',
            Self::Hydrophone => 'D',
            Self::Accelerometer => 'N',
        }
    }
}

impl fmt::Display for SensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geophone => write!(f, "geophone"),
            Self::Hydrophone => write!(f, "hydrophone"),
            Self::Accelerometer => write!(f, "accelerometer"),
            Self::Other(code) => write!(f, "sensor type {code}"),
        }
    }
}

/// Component of a trace: the raw RG16 code, or a standard axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Raw code as stored in the file (2, 3 or 4 for Zland nodes).
    ///
    /// Only codes 0-9 have a channel label; larger codes are rejected by
    /// the reader.
    Raw(u8),
    Z,
    N,
    E,
}

impl Component {
    /// Map a raw code to its standard axis: 2→Z, 3→N, 4→E.
    ///
    /// Only valid for 1C instruments or nodes deployed with the gold
    /// contact terminals facing north.
    pub fn standard(code: u8) -> Result<Self> {
        match code {
            2 => Ok(Self::Z),
            3 => Ok(Self::N),
            4 => Ok(Self::E),
            _ => Err(Rg16Error::UnknownComponent(code)),
        }
    }

    /// Last character of the channel code.
    pub fn code(self) -> char {
        match self {
            Self::Raw(code) => char::from_digit(u32::from(code), 10).unwrap_or('X'),
            Self::Z => 'Z',
            Self::N => 'N',
            Self::E => 'E',
        }
    }

    /// True for the vertical axis, whose polarity is inverted in the file.
    pub fn is_vertical(self) -> bool {
        self == Self::Z
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// SEED band code for a short-period sensor at the given sampling rate.
pub fn band_code(sampling_rate: f64) -> char {
    match sampling_rate {
        r if r >= 1000.0 => 'G',
        r if r >= 250.0 => 'D',
        r if r >= 80.0 => 'E',
        r if r >= 10.0 => 'S',
        r if r > 1.0 => 'M',
        r if r >= 0.5 => 'L',
        r if r >= 0.05 => 'V',
        _ => 'U',
    }
}

/// Full 3-character channel code: band + instrument + component.
pub fn channel_code(sampling_rate: f64, sensor: SensorType, component: Component) -> String {
    let mut code = String::with_capacity(3);
    code.push(band_code(sampling_rate));
    code.push(sensor.instrument_code());
    code.push(component.code());
    code
}
