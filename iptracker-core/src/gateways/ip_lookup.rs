use async_trait::async_trait;
use thiserror::Error;

use crate::entities::GeoLookup;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Remote services that resolve public IP addresses.
///
/// Requests are neither retried nor cancelled:
/// each call runs until the transport completes or fails.
#[async_trait(?Send)]
pub trait IpLookupGateway {
    /// Discover the public address of the caller.
    async fn own_ip(&self) -> Result<String, GatewayError>;

    /// Look up the geolocation of an address.
    ///
    /// The address is passed on as is, the service
    /// decides whether it is valid or not.
    async fn lookup(&self, ip: &str) -> Result<GeoLookup, GatewayError>;
}
