//! Request descriptors.
//!
//! A [`DeviceRequest`] describes one endpoint call independently of
//! authentication. The client replays the same descriptor for the authorized
//! retry, so everything here is plain immutable data.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::fmt;

/// HTTP method for device requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    /// GET request
    #[default]
    Get,
    /// POST request
    Post,
    /// PUT request
    Put,
    /// DELETE request
    Delete,
}

impl HttpMethod {
    /// Returns the uppercase method token, as hashed into the digest.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One device API call, described independently of transport and auth.
///
/// Build it with the method constructors and chained setters:
///
/// ```rust
/// use isapi_client::{DeviceRequest, HttpMethod};
///
/// let request = DeviceRequest::put("/ISAPI/System/Video/inputs/channels/1")
///     .query("format", "xml")
///     .header("content-type", "application/xml")
///     .with_body("<VideoInputChannel/>");
///
/// assert_eq!(request.method(), HttpMethod::Put);
/// assert_eq!(
///     request.request_uri(),
///     "/ISAPI/System/Video/inputs/channels/1?format=xml"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct DeviceRequest {
    method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: Option<String>,
}

impl DeviceRequest {
    /// Creates a request with an explicit method. `path` is the absolute
    /// endpoint path, starting with `/`.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Creates a PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// Creates a DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Appends a query parameter. The value is percent-encoded when the URI
    /// is built.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Sets a header. Names and values that are not valid HTTP are ignored.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let Ok(name) = HeaderName::from_bytes(name.as_bytes())
            && let Ok(value) = HeaderValue::from_str(value)
        {
            self.headers.insert(name, value);
        }
        self
    }

    /// Sets the request body, sent on both the probe and the retry.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The endpoint path without query parameters.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Extra headers to send with the request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The request body, if any.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Path plus encoded query string. This exact string is both appended to
    /// the device base URL and hashed into the digest `uri` directive, which
    /// keeps the two in agreement.
    pub fn request_uri(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_as_str() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Put.as_str(), "PUT");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_method_default_is_get() {
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Post.to_string(), "POST");
    }

    #[test]
    fn test_request_uri_without_query() {
        let request = DeviceRequest::get("/ISAPI/System/deviceInfo");
        assert_eq!(request.request_uri(), "/ISAPI/System/deviceInfo");
    }

    #[test]
    fn test_request_uri_with_query() {
        let request = DeviceRequest::get("/ISAPI/Streaming/channels")
            .query("videoResolutionWidth", "1920")
            .query("videoResolutionHeight", "1080");
        assert_eq!(
            request.request_uri(),
            "/ISAPI/Streaming/channels?videoResolutionWidth=1920&videoResolutionHeight=1080"
        );
    }

    #[test]
    fn test_request_uri_encodes_values() {
        let request = DeviceRequest::get("/ISAPI/ContentMgmt/search").query("name", "front door");
        assert_eq!(
            request.request_uri(),
            "/ISAPI/ContentMgmt/search?name=front%20door"
        );
    }

    #[test]
    fn test_header_builder() {
        let request =
            DeviceRequest::post("/ISAPI/System/reboot").header("content-type", "application/xml");
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/xml"
        );
    }

    #[test]
    fn test_invalid_header_is_ignored() {
        let request = DeviceRequest::get("/ISAPI/System/deviceInfo").header("bad name", "value");
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_body_builder() {
        let request = DeviceRequest::put("/ISAPI/System/time").with_body("<Time/>");
        assert_eq!(request.body(), Some("<Time/>"));
        assert!(DeviceRequest::get("/ISAPI/System/time").body().is_none());
    }

    #[test]
    fn test_clone_preserves_everything() {
        let request = DeviceRequest::post("/ISAPI/System/reboot")
            .query("delay", "5")
            .header("content-type", "application/xml")
            .with_body("<Reboot/>");
        let copy = request.clone();

        assert_eq!(copy.method(), request.method());
        assert_eq!(copy.request_uri(), request.request_uri());
        assert_eq!(copy.body(), request.body());
        assert_eq!(copy.headers().len(), request.headers().len());
    }
}
