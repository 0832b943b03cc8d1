use async_trait::async_trait;
use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use iptracker_boundary::{IpLookup, OwnIp};
use iptracker_core::{
    entities::GeoLookup,
    gateways::{GatewayError, IpLookupGateway},
};

use crate::{into_json, Error, Result};

/// Characters that must not appear unescaped in a path segment.
///
/// Dots and colons of IPv4 and IPv6 addresses are kept.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Client of the self-IP discovery and the geolocation lookup services.
#[derive(Debug, Clone)]
pub struct LookupApi {
    own_ip_url: String,
    lookup_url: String,
}

impl LookupApi {
    #[must_use]
    pub const fn new(own_ip_url: String, lookup_url: String) -> Self {
        Self {
            own_ip_url,
            lookup_url,
        }
    }

    pub async fn fetch_own_ip(&self) -> Result<OwnIp> {
        let response = Request::get(&self.own_ip_url).send().await?;
        into_json(response).await
    }

    pub async fn fetch_lookup(&self, ip: &str) -> Result<IpLookup> {
        let url = address_url(&self.lookup_url, ip);
        let response = Request::get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        decode_lookup(status, &body)
    }
}

/// The lookup service flags unresolvable addresses in the body,
/// so the body is decoded regardless of the HTTP status.
fn decode_lookup(status: u16, body: &str) -> Result<IpLookup> {
    match serde_json::from_str(body) {
        Ok(lookup) => Ok(lookup),
        Err(_) if !(200..300).contains(&status) => Err(Error::Status(status)),
        Err(err) => Err(Error::Fetch(format!("{err}"))),
    }
}

fn address_url(base_url: &str, ip: &str) -> String {
    let encoded_ip = utf8_percent_encode(ip, PATH_SEGMENT);
    format!("{}/{encoded_ip}", base_url.trim_end_matches('/'))
}

#[async_trait(?Send)]
impl IpLookupGateway for LookupApi {
    async fn own_ip(&self) -> std::result::Result<String, GatewayError> {
        let OwnIp { ip } = self.fetch_own_ip().await?;
        log::debug!("Discovered own IP address {ip}");
        Ok(ip)
    }

    async fn lookup(&self, ip: &str) -> std::result::Result<GeoLookup, GatewayError> {
        let lookup = self.fetch_lookup(ip).await?;
        let lookup = GeoLookup::try_from(lookup).map_err(crate::Error::from)?;
        Ok(lookup)
    }
}
