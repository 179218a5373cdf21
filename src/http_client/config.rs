//! HTTP client configuration.

use crate::error::{ConfigValidationError, ValidationResult};
use std::time::Duration;

/// Transport configuration for [`DigestClient`](super::DigestClient).
///
/// Defaults suit LAN cameras; loosen the timeouts for devices reached over
/// cellular uplinks.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Timeout for one HTTP round trip. A challenged request makes two round
    /// trips, so the worst case per call is twice this value.
    pub timeout: Duration,
    /// Timeout for establishing a TCP connection.
    pub connect_timeout: Duration,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Largest response body the client will buffer, in bytes.
    pub max_response_size: usize,
    /// Idle connections kept alive per device.
    pub pool_max_idle_per_host: usize,
    /// How long an idle connection is kept for reuse.
    pub pool_idle_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("isapi-client/{}", env!("CARGO_PKG_VERSION")),
            max_response_size: 10 * 1024 * 1024,
            pool_max_idle_per_host: 10,
            pool_idle_timeout: Duration::from_secs(90),
        }
    }
}

impl HttpConfig {
    /// Upper bound on the per-round-trip timeout.
    const MAX_TIMEOUT: Duration = Duration::from_secs(300);

    /// Upper bound on the response body buffer.
    const MAX_RESPONSE_SIZE: usize = 100 * 1024 * 1024;

    /// Checks the configuration and reports hard errors and warnings.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigValidationError`] naming the first offending field.
    pub fn validate(&self) -> Result<ValidationResult, ConfigValidationError> {
        let mut result = ValidationResult::new();

        if self.timeout > Self::MAX_TIMEOUT {
            return Err(ConfigValidationError::too_high(
                "timeout",
                self.timeout.as_secs(),
                Self::MAX_TIMEOUT.as_secs(),
            ));
        }
        if self.timeout < Duration::from_secs(1) {
            result.add_warning(format!(
                "timeout of {}ms is very short; slow camera firmware will miss it",
                self.timeout.as_millis()
            ));
        }
        if self.connect_timeout.is_zero() {
            return Err(ConfigValidationError::invalid(
                "connect_timeout",
                "must be non-zero",
            ));
        }
        if self.max_response_size == 0 {
            return Err(ConfigValidationError::invalid(
                "max_response_size",
                "must be non-zero",
            ));
        }
        if self.max_response_size > Self::MAX_RESPONSE_SIZE {
            return Err(ConfigValidationError::too_high(
                "max_response_size",
                self.max_response_size,
                Self::MAX_RESPONSE_SIZE,
            ));
        }
        if self.user_agent.is_empty() {
            return Err(ConfigValidationError::invalid(
                "user_agent",
                "must not be empty",
            ));
        }

        Ok(result)
    }
}
