//! Shared fixtures for exercising the client against a mock device.
//!
//! The mock device is built from two disjoint wiremock mocks: unauthenticated
//! requests receive the 401 challenge, requests carrying an `Authorization`
//! header receive the real response. The split keeps mock matching
//! order-independent and lets tests assert exact round-trip counts.

#![allow(dead_code)]

use isapi_client::{DeviceCredentials, DigestClient};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use wiremock::matchers::{method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// Realm served by the standard mock device.
pub const REALM: &str = "DS-2CD";

/// Server nonce served by the standard mock device.
pub const NONCE: &str = "abc123";

/// Matches requests without an `Authorization` header.
pub struct WithoutAuthorization;

impl Match for WithoutAuthorization {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

/// Matches requests carrying an `Authorization` header.
pub struct WithAuthorization;

impl Match for WithAuthorization {
    fn matches(&self, request: &Request) -> bool {
        request.headers.contains_key("authorization")
    }
}

/// Captures formatted log output so tests can assert on emitted events.
///
/// Install with `tracing::subscriber::set_default` and keep the guard alive
/// for the duration of the test.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// The standard challenge header value.
pub fn challenge_header() -> String {
    format!(r#"Digest realm="{REALM}", nonce="{NONCE}", qop="auth""#)
}

/// A 401 response carrying the standard challenge.
pub fn challenge_response() -> ResponseTemplate {
    ResponseTemplate::new(401).insert_header("WWW-Authenticate", challenge_header().as_str())
}

/// Credentials pointing at the mock server, using the well-known default
/// account of camera firmware.
pub fn credentials_for(server: &MockServer) -> DeviceCredentials {
    let address = server.address();
    DeviceCredentials::new(address.ip().to_string(), address.port(), "admin", "12345")
}

/// A client with default configuration.
pub fn digest_client() -> DigestClient {
    DigestClient::with_defaults().expect("default config should build")
}

/// Mounts the standard mock device: `method_name` requests to `endpoint` are
/// challenged when unauthenticated and answered with `body` when authorized.
pub async fn mount_digest_device(
    server: &MockServer,
    method_name: &str,
    endpoint: &str,
    body: &str,
) {
    Mock::given(method(method_name))
        .and(path(endpoint))
        .and(WithoutAuthorization)
        .respond_with(challenge_response())
        .mount(server)
        .await;
    Mock::given(method(method_name))
        .and(path(endpoint))
        .and(WithAuthorization)
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// The `Authorization` header of a recorded request.
pub fn authorization_of(request: &Request) -> String {
    request
        .headers
        .get("authorization")
        .expect("request should carry an Authorization header")
        .to_str()
        .expect("Authorization header should be ASCII")
        .to_string()
}

/// Extracts one directive value from a Digest `Authorization` header.
pub fn directive(header: &str, name: &str) -> Option<String> {
    let rest = header.strip_prefix("Digest ")?;
    for part in rest.split(", ") {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        if key == name {
            return Some(value.trim_matches('"').to_string());
        }
    }
    None
}
