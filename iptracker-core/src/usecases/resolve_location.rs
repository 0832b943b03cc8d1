use super::prelude::*;

/// Resolve an IP address to a new [`LocationRecord`].
///
/// Without an address the public address of the caller
/// is discovered first.
pub async fn resolve_location<G>(gateway: &G, ip: Option<&str>) -> Result<LocationRecord>
where
    G: IpLookupGateway + ?Sized,
{
    let ip = match ip.filter(|ip| !ip.is_empty()) {
        Some(ip) => ip.to_owned(),
        None => {
            log::debug!("Discover own public IP address");
            gateway.own_ip().await.inspect_err(|err| {
                log::error!("Unable to discover own IP address: {err}");
            })?
        }
    };
    log::debug!("Look up location of {ip}");
    let lookup = gateway.lookup(&ip).await.inspect_err(|err| {
        log::error!("Unable to look up location of {ip}: {err}");
    })?;
    match lookup {
        GeoLookup::Found(attributes) => Ok(new_location_record(ip, attributes)),
        GeoLookup::Rejected { message } => {
            log::warn!(
                "Lookup of {ip} was rejected: {}",
                message.as_deref().unwrap_or("no reason given")
            );
            Err(Error::InvalidAddress { ip, message })
        }
    }
}

fn new_location_record(ip_address: String, attributes: GeoAttributes) -> LocationRecord {
    let GeoAttributes {
        city,
        region,
        country,
        pos,
        timezone_utc,
        isp_name,
    } = attributes;
    LocationRecord {
        ip_address,
        city,
        region,
        country,
        timezone_utc: timezone_utc.unwrap_or_default(),
        isp_name: isp_name.unwrap_or_default(),
        pos,
    }
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockGateway, *};
    use futures::executor::block_on;
    use iptracker_entities::builders::*;

    fn paris() -> GeoLookup {
        GeoLookup::Found(
            GeoAttributes::build()
                .city("Paris")
                .country("France")
                .pos(48.8, 2.3)
                .finish(),
        )
    }

    #[test]
    fn resolve_own_location() {
        let gw = MockGateway::default()
            .with_own_ip("1.2.3.4")
            .with_lookup("1.2.3.4", paris());
        let record = block_on(resolve_location(&gw, None)).unwrap();
        assert_eq!(
            LocationRecord::build()
                .ip_address("1.2.3.4")
                .city("Paris")
                .country("France")
                .pos(48.8, 2.3)
                .finish(),
            record
        );
        assert_eq!("", record.timezone_utc);
        assert_eq!("", record.isp_name);
        assert_eq!(1, gw.own_ip_calls.get());
        assert_eq!(vec!["1.2.3.4".to_string()], *gw.lookups.borrow());
    }

    #[test]
    fn empty_address_resolves_own_location() {
        let gw = MockGateway::default()
            .with_own_ip("1.2.3.4")
            .with_lookup("1.2.3.4", paris());
        assert!(block_on(resolve_location(&gw, Some(""))).is_ok());
        assert_eq!(1, gw.own_ip_calls.get());
    }

    #[test]
    fn resolve_given_address_without_discovery() {
        let london = GeoAttributes::build()
            .city("London")
            .region("England")
            .country("United Kingdom")
            .pos(51.5, -0.1)
            .timezone_utc(Some("+00:00"))
            .isp_name(Some("BT"))
            .finish();
        let gw = MockGateway::default().with_lookup("5.6.7.8", GeoLookup::Found(london));
        let record = block_on(resolve_location(&gw, Some("5.6.7.8"))).unwrap();
        assert_eq!("5.6.7.8", record.ip_address);
        assert_eq!("England", record.region);
        assert_eq!("+00:00", record.timezone_utc);
        assert_eq!("BT", record.isp_name);
        assert_eq!(MapPoint::from_lat_lng_deg(51.5, -0.1), record.pos);
        assert_eq!(0, gw.own_ip_calls.get());
        assert_eq!(1, gw.lookups.borrow().len());
    }

    #[test]
    fn rejected_address() {
        let gw = MockGateway::default().with_lookup(
            "foo",
            GeoLookup::Rejected {
                message: Some("Invalid IP address".into()),
            },
        );
        let err = block_on(resolve_location(&gw, Some("foo"))).unwrap_err();
        assert_eq!(
            Error::InvalidAddress {
                ip: "foo".into(),
                message: Some("Invalid IP address".into())
            },
            err
        );
    }

    #[test]
    fn failed_discovery_skips_lookup() {
        let gw = MockGateway::default().with_lookup("1.2.3.4", paris());
        let err = block_on(resolve_location(&gw, None)).unwrap_err();
        assert!(matches!(err, Error::Transport(GatewayError::Transport(_))));
        assert_eq!(1, gw.own_ip_calls.get());
        assert!(gw.lookups.borrow().is_empty());
    }

    #[test]
    fn failed_lookup() {
        let gw = MockGateway::default().with_own_ip("1.2.3.4");
        let err = block_on(resolve_location(&gw, None)).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
        assert_eq!(1, gw.lookups.borrow().len());
    }
}
