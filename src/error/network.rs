//! Transport-level error types

use std::error::Error as StdError;
use thiserror::Error;

/// Errors raised by the HTTP transport before any device response could be
/// interpreted.
///
/// A value of this type means the request never completed an HTTP round trip:
/// the device may be unreachable, slow, or the connection broke mid-transfer.
/// Responses that did arrive are reported through
/// [`Error::Device`](crate::error::Error::Device) instead.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NetworkError {
    /// The request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Connection to the device could not be established
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other transport failure (TLS, protocol, broken body stream)
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync + 'static>),
}

impl NetworkError {
    /// Returns true if retrying the same request later could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout | Self::ConnectionFailed(_))
    }
}
