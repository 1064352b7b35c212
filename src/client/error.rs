//! Client-side failures.

use crate::protocol::{ErrorKind, ProtocolError};
use thiserror::Error;

/// Errors returned by [`A2aClient`](super::A2aClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be delivered or the response not read.
    #[error("endpoint {url} unreachable: {source}")]
    Unreachable {
        /// Target endpoint.
        url: String,
        /// Transport failure.
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with something other than a response envelope.
    #[error("endpoint {url} returned an undecodable response: {source}")]
    Decode {
        /// Target endpoint.
        url: String,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// The endpoint answered with an error envelope.
    #[error(transparent)]
    Remote(#[from] ProtocolError),

    /// The HTTP client could not be constructed.
    #[error("http client could not be built: {0}")]
    Build(#[source] reqwest::Error),
}

impl ClientError {
    /// Returns the protocol error kind this failure corresponds to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Unreachable { .. } | Self::Decode { .. } => ErrorKind::Unreachable,
            Self::Remote(err) => err.kind,
            Self::Build(_) => ErrorKind::Internal,
        }
    }
}

impl From<ClientError> for ProtocolError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Remote(remote) => remote,
            other => Self::new(other.kind(), other.to_string()),
        }
    }
}
