use crate::geo::MapPoint;

/// Everything that is known about the location of an IP address.
///
/// A record is never patched: each successful resolution
/// produces a new one that replaces the previous record.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationRecord {
    pub ip_address   : String,
    pub city         : String,
    pub region       : String,
    pub country      : String,
    pub timezone_utc : String,
    pub isp_name     : String,
    pub pos          : MapPoint,
}

impl LocationRecord {
    /// A record is resolved as soon as the queried address is known.
    pub fn is_resolved(&self) -> bool {
        !self.ip_address.is_empty()
    }

    /// The position to be shown on a map, if any.
    pub fn position(&self) -> Option<MapPoint> {
        (!self.pos.is_sentinel()).then_some(self.pos)
    }

    pub fn label(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}
