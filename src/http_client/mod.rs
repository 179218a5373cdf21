//! Digest-authenticating HTTP client.
//!
//! [`DigestClient`] owns the connection pool and drives the challenge flow:
//! probe unauthenticated, parse the 401 challenge, replay the request once
//! with an `Authorization` header. Split across focused submodules:
//!
//! - `config`: transport configuration and validation
//! - `builder`: client construction
//! - `request`: the probe/retry flow and method wrappers
//! - `response`: size-capped body reads and device error mapping

mod builder;
mod config;
mod request;
mod response;

#[cfg(test)]
mod tests;

pub use builder::DigestClient;
pub use config::HttpConfig;
