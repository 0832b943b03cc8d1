use std::fmt;

/// A geographical position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

impl MapPoint {
    /// The position of a record that has not been resolved yet.
    pub const SENTINEL: Self = Self { lat: 0.0, lng: 0.0 };

    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// A zero component marks the position as unresolved.
    ///
    /// Both components have to be non-zero for a position
    /// to be shown on a map.
    pub fn is_sentinel(self) -> bool {
        self.lat == 0.0 || self.lng == 0.0
    }
}

impl Default for MapPoint {
    fn default() -> Self {
        Self::SENTINEL
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
