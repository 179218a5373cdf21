//! Device-reported HTTP error details

use std::fmt;

/// Number of body characters shown when the error is displayed. The full body
/// stays available through the `body` field.
const BODY_PREVIEW_CHARS: usize = 200;

/// An HTTP error response produced by the device itself.
///
/// Cameras report most failures in the response body (usually an XML
/// `ResponseStatus` document), so the body is preserved verbatim for
/// diagnostics rather than being reduced to the status code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct DeviceErrorDetails {
    /// HTTP status code returned by the device
    pub status: u16,
    /// Response body, exactly as received
    pub body: String,
}

impl DeviceErrorDetails {
    /// Creates error details from a status code and response body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl fmt::Display for DeviceErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.body.is_empty() {
            return write!(f, "HTTP {}", self.status);
        }
        let preview: String = self.body.chars().take(BODY_PREVIEW_CHARS).collect();
        if preview.len() < self.body.len() {
            write!(f, "HTTP {}: {preview}...", self.status)
        } else {
            write!(f, "HTTP {}: {preview}", self.status)
        }
    }
}
