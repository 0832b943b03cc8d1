use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use iptracker_boundary::IncompleteLookup;
use iptracker_core::gateways::GatewayError;

mod lookup;

pub use self::lookup::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error(transparent)]
    Incomplete(#[from] IncompleteLookup),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<Error> for GatewayError {
    fn from(err: Error) -> Self {
        match err {
            Error::Fetch(_) | Error::Status(_) => Self::Transport(err.to_string()),
            Error::Incomplete(_) => Self::Decode(err.to_string()),
        }
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(Error::Status(response.status()))
    }
}
