//! Digest Authentication Client for Device APIs
//!
//! An async HTTP client for IP cameras and similar network devices that guard
//! their APIs with HTTP Digest access authentication (RFC 2617). The client
//! performs the challenge/response exchange per request: it probes without
//! credentials, answers the 401 challenge, and replays the request exactly
//! once with a computed `Authorization` header.
//!
//! # Features
//!
//! - **RFC 2617 with qop=auth**, falling back to the legacy RFC 2069 form for
//!   old firmware that omits qop
//! - **Bounded retries**: at most one authorized retry per request, never more
//! - **Stateless**: credentials are passed per call, challenges are answered
//!   fresh, and nothing secret is cached in the client
//! - **Async**: built on tokio and reqwest with connection pooling
//!
//! # Example
//!
//! ```rust,no_run
//! use isapi_client::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let client = DigestClient::with_defaults()?;
//! let credentials = DeviceCredentials::new("192.168.1.64", 80, "admin", "12345");
//!
//! let info = client.get(&credentials, "/ISAPI/System/deviceInfo").await?;
//! println!("{info}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// =============================================================================
// Global Clippy Lint Suppressions
// =============================================================================
// These lints are suppressed globally because they apply broadly across the
// codebase and would require excessive local annotations.
//
// - module_name_repetitions: library naming keeps types self-describing
//   (DigestChallenge in digest, HttpConfig in http_client)
// - missing_errors_doc: not every Result-returning function carries a full
//   # Errors section
// - missing_panics_doc: too verbose to document every potential panic
// - must_use_candidate: not all return values need #[must_use]
// - doc_markdown: protocol terms (qop, cnonce, nc) don't need backticks
// - return_self_not_must_use: request builder methods return Self
// - needless_pass_by_value: request() consumes its descriptor like
//   reqwest::Client::execute consumes its Request
// =============================================================================
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::needless_pass_by_value)]

// Re-exports of external dependencies that appear in the public API
pub use reqwest;

// Core modules
pub mod credentials;
pub mod digest;
pub mod error;
pub mod http_client;
pub mod logging;
pub mod request;

// Re-exports of core types for convenience
pub use credentials::{DeviceCredentials, SecretString};
pub use digest::DigestChallenge;
pub use error::{
    ChallengeError, ConfigValidationError, ContextExt, DeviceErrorDetails, Error, NetworkError,
    Result, ValidationResult,
};
pub use http_client::{DigestClient, HttpConfig};
pub use request::{DeviceRequest, HttpMethod};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```rust
/// use isapi_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::credentials::{DeviceCredentials, SecretString};
    pub use crate::digest::DigestChallenge;
    pub use crate::error::{ContextExt, Error, Result};
    pub use crate::http_client::{DigestClient, HttpConfig};
    pub use crate::logging::{LogConfig, LogFormat, LogLevel, init_logging, try_init_logging};
    pub use crate::request::{DeviceRequest, HttpMethod};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
