use super::*;
use iptracker_entities as e;
use thiserror::Error;

/// A successful lookup without a position.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("The lookup response lacks latitude or longitude")]
pub struct IncompleteLookup;

impl TryFrom<IpLookup> for e::lookup::GeoLookup {
    type Error = IncompleteLookup;
    fn try_from(from: IpLookup) -> Result<Self, Self::Error> {
        let IpLookup {
            success,
            message,
            ip: _,
            city,
            region,
            country,
            latitude,
            longitude,
            timezone,
            connection,
        } = from;
        if !success {
            return Ok(Self::Rejected { message });
        }
        let (Some(lat), Some(lng)) = (latitude, longitude) else {
            return Err(IncompleteLookup);
        };
        Ok(Self::Found(e::lookup::GeoAttributes {
            city: city.unwrap_or_default(),
            region: region.unwrap_or_default(),
            country: country.unwrap_or_default(),
            pos: e::geo::MapPoint::from_lat_lng_deg(lat, lng),
            timezone_utc: timezone.and_then(|tz| tz.utc),
            isp_name: connection.and_then(|c| c.isp),
        }))
    }
}
