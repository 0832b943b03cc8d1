pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{geo_attributes_builder::*, location_record_builder::*};

pub mod location_record_builder {

    use super::*;
    use crate::{geo::*, location::*};

    #[derive(Debug)]
    pub struct LocationRecordBuild {
        record: LocationRecord,
    }

    impl LocationRecordBuild {
        pub fn ip_address(mut self, ip: &str) -> Self {
            self.record.ip_address = ip.into();
            self
        }
        pub fn city(mut self, city: &str) -> Self {
            self.record.city = city.into();
            self
        }
        pub fn region(mut self, region: &str) -> Self {
            self.record.region = region.into();
            self
        }
        pub fn country(mut self, country: &str) -> Self {
            self.record.country = country.into();
            self
        }
        pub fn timezone_utc(mut self, tz: &str) -> Self {
            self.record.timezone_utc = tz.into();
            self
        }
        pub fn isp_name(mut self, isp: &str) -> Self {
            self.record.isp_name = isp.into();
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.record.pos = MapPoint::from_lat_lng_deg(lat, lng);
            self
        }
        pub fn finish(self) -> LocationRecord {
            self.record
        }
    }

    impl Builder for LocationRecord {
        type Build = LocationRecordBuild;
        fn build() -> LocationRecordBuild {
            LocationRecordBuild {
                record: LocationRecord::default(),
            }
        }
    }
}

pub mod geo_attributes_builder {

    use super::*;
    use crate::{geo::*, lookup::*};

    #[derive(Debug)]
    pub struct GeoAttributesBuild {
        attributes: GeoAttributes,
    }

    impl GeoAttributesBuild {
        pub fn city(mut self, city: &str) -> Self {
            self.attributes.city = city.into();
            self
        }
        pub fn region(mut self, region: &str) -> Self {
            self.attributes.region = region.into();
            self
        }
        pub fn country(mut self, country: &str) -> Self {
            self.attributes.country = country.into();
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.attributes.pos = MapPoint::from_lat_lng_deg(lat, lng);
            self
        }
        pub fn timezone_utc(mut self, tz: Option<&str>) -> Self {
            self.attributes.timezone_utc = tz.map(Into::into);
            self
        }
        pub fn isp_name(mut self, isp: Option<&str>) -> Self {
            self.attributes.isp_name = isp.map(Into::into);
            self
        }
        pub fn finish(self) -> GeoAttributes {
            self.attributes
        }
    }

    impl Builder for GeoAttributes {
        type Build = GeoAttributesBuild;
        fn build() -> GeoAttributesBuild {
            GeoAttributesBuild {
                attributes: GeoAttributes::default(),
            }
        }
    }
}
