//! SEED-style trace identifier.
//!
//! A [`TraceId`] is the dotted `NET.STA.LOC.CHA` form used to group traces
//! of the same channel. The 3-character channel code splits into band,
//! instrument, and component characters.

use std::fmt;

/// Dotted `NET.STA.LOC.CHA` identifier.
///
/// # Examples
///
/// ```
/// use rg16_rs::TraceId;
///
/// let id = TraceId::from_nslc("1", "2", "0", "DPZ");
/// assert_eq!(id.as_str(), "1.2.0.DPZ");
/// assert_eq!(id.station(), "2");
/// assert_eq!(id.component(), Some('Z'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TraceId {
    raw: String,
}

impl TraceId {
    /// Wrap an already dotted identifier.
    pub fn from_dotted(s: &str) -> Self {
        Self { raw: s.to_string() }
    }

    pub fn from_nslc(network: &str, station: &str, location: &str, channel: &str) -> Self {
        Self {
            raw: format!("{network}.{station}.{location}.{channel}"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn network(&self) -> &str {
        self.field(0)
    }

    pub fn station(&self) -> &str {
        self.field(1)
    }

    pub fn location(&self) -> &str {
        self.field(2)
    }

    pub fn channel(&self) -> &str {
        self.field(3)
    }

    /// Last character of the channel code, if any.
    pub fn component(&self) -> Option<char> {
        self.channel().chars().last()
    }

    fn field(&self, index: usize) -> &str {
        self.raw.split('.').nth(index).unwrap_or("")
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_nslc() {
        let id = TraceId::from_nslc("1", "101", "1", "DP2");
        assert_eq!(id.as_str(), "1.101.1.DP2");
        assert_eq!(format!("{id}"), "1.101.1.DP2");
    }

    #[test]
    fn test_field_extraction() {
        let id = TraceId::from_dotted("7.1001.3.GPE");
        assert_eq!(id.network(), "7");
        assert_eq!(id.station(), "1001");
        assert_eq!(id.location(), "3");
        assert_eq!(id.channel(), "GPE");
        assert_eq!(id.component(), Some('E'));
    }

    #[test]
    fn test_empty_location() {
        let id = TraceId::from_nslc("1", "2", "", "DPZ");
        assert_eq!(id.as_str(), "1.2..DPZ");
        assert_eq!(id.location(), "");
        assert_eq!(id.channel(), "DPZ");
    }

    #[test]
    fn test_missing_fields() {
        let id = TraceId::from_dotted("1.2");
        assert_eq!(id.location(), "");
        assert_eq!(id.channel(), "");
        assert_eq!(id.component(), None);
    }

    #[test]
    fn test_ordering_groups_by_channel() {
        let mut ids = vec![
            TraceId::from_dotted("1.2.0.DP4"),
            TraceId::from_dotted("1.2.0.DP2"),
            TraceId::from_dotted("1.2.0.DP3"),
        ];
        ids.sort();
        assert_eq!(ids[0].channel(), "DP2");
        assert_eq!(ids[2].channel(), "DP4");
    }
}
