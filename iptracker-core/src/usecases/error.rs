use crate::gateways::GatewayError;
use thiserror::Error;

const TRANSPORT_NOTICE: &str = "Something went wrong. Please try again later.";
const INVALID_ADDRESS_NOTICE: &str = "Enter a valid IP address!";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Unable to resolve the location: {0}")]
    Transport(#[from] GatewayError),
    #[error("Invalid IP address {ip:?}")]
    InvalidAddress {
        ip: String,
        /// The reason given by the lookup service
        message: Option<String>,
    },
}

impl Error {
    /// The message that is shown to the user.
    #[must_use]
    pub const fn notice(&self) -> &'static str {
        match self {
            Self::Transport(_) => TRANSPORT_NOTICE,
            Self::InvalidAddress { .. } => INVALID_ADDRESS_NOTICE,
        }
    }
}
