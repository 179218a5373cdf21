//! Client construction.

use crate::error::{Error, Result};
use reqwest::Client;
use tracing::warn;

use super::config::HttpConfig;

/// HTTP client that authenticates against devices with Digest challenges.
///
/// Holds nothing but the connection pool and its configuration. Credentials
/// are taken per call and challenges are answered per request, so a single
/// instance can be shared across tasks and devices; cloning is cheap and
/// clones share the pool.
#[derive(Debug, Clone)]
pub struct DigestClient {
    client: Client,
    config: HttpConfig,
}

impl DigestClient {
    /// Creates a client from a configuration.
    ///
    /// Validation warnings are logged and do not block construction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the configuration fails validation or
    /// the transport cannot be built.
    pub fn new(config: HttpConfig) -> Result<Self> {
        let report = config.validate()?;
        for warning in &report.warnings {
            warn!(%warning, "HTTP configuration warning");
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(config.pool_idle_timeout)
            .gzip(true)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Creates a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the transport cannot be built.
    pub fn with_defaults() -> Result<Self> {
        Self::new(HttpConfig::default())
    }

    /// The active configuration.
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// The underlying reqwest client.
    pub(crate) fn client(&self) -> &Client {
        &self.client
    }
}
