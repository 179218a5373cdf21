//! Device credentials and secret handling.
//!
//! Passwords are wrapped in [`SecretString`] so they are zeroized on drop and
//! never appear in `Debug` or log output. Credentials are plain values passed
//! to each request; the client itself stores none of them.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string secret that zeroizes its memory on drop and redacts itself in
/// `Debug` and `Display` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    /// Creates a new secret from any string-like value.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Exposes the secret. Callers should keep the borrow short-lived and
    /// never log the value.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Length of the secret in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identity and credentials for one device account.
///
/// This is a plain value: construct it per call site, pass it by reference to
/// the client, drop it when done. The client never caches it, so rotating a
/// password takes effect on the next request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceCredentials {
    /// Device hostname or IP address, without scheme
    pub host: String,
    /// HTTP port the device API listens on, usually 80
    pub port: u16,
    /// Account username
    pub username: String,
    /// Account password, redacted in debug output
    pub password: SecretString,
}

impl DeviceCredentials {
    /// Creates credentials for a device account.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<SecretString>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Base URL for the device API.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
