//! Error handling for the digest client.
//!
//! # Error Hierarchy
//!
//! ```text
//! Error
//! ├── Network(NetworkError)              transport never completed a round trip
//! │   ├── Timeout
//! │   ├── ConnectionFailed
//! │   └── Transport
//! ├── Device(DeviceErrorDetails)         device answered with an HTTP error status
//! ├── ServerMisconfigured                401 without a usable Digest challenge
//! ├── MalformedChallenge(ChallengeError) Digest challenge that cannot be answered
//! │   ├── MissingDirective
//! │   ├── UnsupportedQop
//! │   └── InvalidValue
//! ├── AuthenticationFailed               the authorized retry itself failed
//! ├── ResponseTooLarge                   body exceeded the configured size limit
//! ├── Config                             client misconfiguration
//! └── Context                            wrapper carrying caller-supplied context
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use isapi_client::{DeviceCredentials, DigestClient, Error};
//!
//! async fn read_info(client: &DigestClient, creds: &DeviceCredentials) {
//!     match client.get(creds, "/ISAPI/System/deviceInfo").await {
//!         Ok(body) => println!("{body}"),
//!         Err(e) if e.is_auth_failure() => eprintln!("check the password: {}", e.report()),
//!         Err(e) if e.device_status() == Some(404) => eprintln!("endpoint not supported"),
//!         Err(Error::Network(n)) if n.is_retryable() => eprintln!("device unreachable"),
//!         Err(e) => eprintln!("{}", e.report()),
//!     }
//! }
//! ```

mod challenge;
mod config;
mod context;
mod convert;
mod device;
mod network;

#[cfg(test)]
mod tests;

pub use challenge::ChallengeError;
pub use config::{ConfigValidationError, ValidationResult};
pub use context::ContextExt;
pub use device::DeviceErrorDetails;
pub use network::NetworkError;

use std::borrow::Cow;
use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All failures the digest client can report.
///
/// Large payloads are boxed so the enum stays cheap to move through `Result`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Transport-level failure; no interpretable response was received
    #[error("Network error: {0}")]
    Network(Box<NetworkError>),

    /// The device responded with a non-success HTTP status other than the
    /// initial 401 challenge
    #[error("Device error: {0}")]
    Device(Box<DeviceErrorDetails>),

    /// The device answered 401 without a `WWW-Authenticate` Digest challenge.
    /// Retrying cannot help; the endpoint does not speak Digest auth.
    #[error("Server misconfigured: {0}")]
    ServerMisconfigured(Cow<'static, str>),

    /// The Digest challenge was present but could not be answered
    #[error("Malformed digest challenge: {0}")]
    MalformedChallenge(Box<ChallengeError>),

    /// The authorized retry was itself rejected. Usually wrong credentials;
    /// the underlying rejection is kept as the source.
    #[error("Digest authentication failed")]
    AuthenticationFailed {
        /// What went wrong on the authorized attempt
        #[source]
        cause: Box<Error>,
    },

    /// The response body exceeded the configured size limit
    #[error("Response size {size} exceeds limit of {limit} bytes")]
    ResponseTooLarge {
        /// Advertised or accumulated body size in bytes
        size: u64,
        /// Configured maximum in bytes
        limit: u64,
    },

    /// The client was built with an unusable configuration
    #[error("Configuration error: {0}")]
    Config(Cow<'static, str>),

    /// Wrapper adding caller-supplied context around another error
    #[error("{context}")]
    Context {
        /// Human-readable description of the failed operation
        context: String,
        /// The wrapped error
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    // ==================== Constructor Methods ====================

    /// Creates a network error for a failed connection.
    pub fn network(msg: impl Into<String>) -> Self {
        Error::Network(Box::new(NetworkError::ConnectionFailed(msg.into())))
    }

    /// Creates a device error from a status code and response body.
    pub fn device(status: u16, body: impl Into<String>) -> Self {
        Error::Device(Box::new(DeviceErrorDetails::new(status, body)))
    }

    /// Creates a server misconfiguration error.
    pub fn server_misconfigured(msg: impl Into<Cow<'static, str>>) -> Self {
        Error::ServerMisconfigured(msg.into())
    }

    /// Wraps the failure of an authorized retry.
    pub fn authentication_failed(cause: Error) -> Self {
        Error::AuthenticationFailed {
            cause: Box::new(cause),
        }
    }

    /// Creates a response size limit error.
    pub fn response_too_large(size: u64, limit: u64) -> Self {
        Error::ResponseTooLarge { size, limit }
    }

    /// Creates a configuration error.
    pub fn config(msg: impl Into<Cow<'static, str>>) -> Self {
        Error::Config(msg.into())
    }

    // ==================== Context Methods ====================

    /// Wraps this error with a description of the operation that failed.
    ///
    /// Usually reached through [`ContextExt::context`] on a `Result`.
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    // ==================== Inspection Methods ====================

    /// Iterates this error and every wrapped error beneath it, outermost
    /// first. Follows both [`Error::Context`] and
    /// [`Error::AuthenticationFailed`] wrappers.
    pub fn iter_chain(&self) -> impl Iterator<Item = &Error> {
        std::iter::successors(Some(self), |err| match err {
            Error::Context { source, .. } => Some(source.as_ref()),
            Error::AuthenticationFailed { cause } => Some(cause.as_ref()),
            _ => None,
        })
    }

    /// Returns the innermost error in the chain.
    pub fn root_cause(&self) -> &Error {
        self.iter_chain().last().unwrap_or(self)
    }

    /// Renders the full error chain as a multi-line report.
    pub fn report(&self) -> String {
        use std::fmt::Write;

        let mut out = String::new();
        let _ = write!(out, "{self}");
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let _ = write!(out, "\nCaused by: {cause}");
            source = cause.source();
        }
        out
    }

    /// Returns true if retrying the same request later could plausibly
    /// succeed. Authentication and challenge failures are definitive and
    /// never retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network(e) => e.is_retryable(),
            Error::Context { source, .. } => source.is_retryable(),
            _ => false,
        }
    }

    /// Returns true if this error (possibly under context wrappers) is an
    /// [`Error::AuthenticationFailed`].
    pub fn is_auth_failure(&self) -> bool {
        self.iter_chain()
            .any(|e| matches!(e, Error::AuthenticationFailed { .. }))
    }

    /// Returns the failure of the authorized retry, if this error is an
    /// authentication failure.
    pub fn auth_failure_cause(&self) -> Option<&Error> {
        self.iter_chain().find_map(|e| match e {
            Error::AuthenticationFailed { cause } => Some(cause.as_ref()),
            _ => None,
        })
    }

    /// Returns the HTTP status the device answered with, if any error in the
    /// chain carries one.
    pub fn device_status(&self) -> Option<u16> {
        self.iter_chain().find_map(|e| match e {
            Error::Device(details) => Some(details.status),
            _ => None,
        })
    }

    /// Returns the device response body, if any error in the chain carries
    /// one.
    pub fn device_body(&self) -> Option<&str> {
        self.iter_chain().find_map(|e| match e {
            Error::Device(details) => Some(details.body.as_str()),
            _ => None,
        })
    }

    /// Returns the transport error, if any error in the chain is one.
    pub fn as_network(&self) -> Option<&NetworkError> {
        self.iter_chain().find_map(|e| match e {
            Error::Network(n) => Some(n.as_ref()),
            _ => None,
        })
    }

    /// Returns the challenge parse error, if any error in the chain is one.
    pub fn as_malformed_challenge(&self) -> Option<&ChallengeError> {
        self.iter_chain().find_map(|e| match e {
            Error::MalformedChallenge(c) => Some(c.as_ref()),
            _ => None,
        })
    }
}
