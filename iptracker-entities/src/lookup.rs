use crate::geo::MapPoint;

/// Attributes returned by a geolocation service
/// for a single address.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoAttributes {
    pub city: String,
    pub region: String,
    pub country: String,
    pub pos: MapPoint,
    pub timezone_utc: Option<String>,
    pub isp_name: Option<String>,
}

/// The answer of a geolocation service.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoLookup {
    Found(GeoAttributes),
    /// The service could not resolve the address.
    Rejected { message: Option<String> },
}
