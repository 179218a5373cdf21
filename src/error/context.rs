//! Context attachment trait and implementations.

use crate::error::{Error, Result};
use std::fmt;

/// Extension trait for ergonomic error context attachment.
///
/// Lets callers describe what they were doing when an operation failed,
/// without losing the underlying error. The original error stays reachable
/// through [`Error::root_cause`] and the standard `source()` chain.
///
/// Use `context()` for a static message and `with_context()` when the message
/// is expensive to build (it is only evaluated on error).
///
/// # Examples
///
/// ```rust
/// use isapi_client::{ContextExt, DeviceCredentials, DigestClient, Result};
///
/// async fn fetch_device_info(
///     client: &DigestClient,
///     credentials: &DeviceCredentials,
/// ) -> Result<String> {
///     client
///         .get(credentials, "/ISAPI/System/deviceInfo")
///         .await
///         .with_context(|| format!("failed to read device info from {}", credentials.host))
/// }
/// ```
pub trait ContextExt<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds lazy context to an error (only evaluated on error).
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ContextExt<T, E> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| e.into().context(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.into().context(f().to_string()))
    }
}
