//! Request execution and the digest retry flow.

use crate::credentials::DeviceCredentials;
use crate::digest::{self, DigestChallenge};
use crate::error::{ChallengeError, Error, Result};
use crate::request::DeviceRequest;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderValue, WWW_AUTHENTICATE};
use tracing::{debug, instrument, warn};

use super::builder::DigestClient;

impl DigestClient {
    /// Executes one request against a device, answering a Digest challenge
    /// if the device issues one.
    ///
    /// The flow is strictly bounded at two round trips. The request is first
    /// sent without credentials; if the device answers anything but 401, that
    /// is the result. On 401 the challenge is parsed, an `Authorization`
    /// header is computed from `credentials`, and the same request is sent
    /// exactly once more. A second rejection is reported as
    /// [`Error::AuthenticationFailed`], never retried again.
    ///
    /// # Errors
    ///
    /// - [`Error::Network`] when a round trip fails at the transport level
    /// - [`Error::Device`] when the device answers a non-401 error status
    /// - [`Error::ServerMisconfigured`] when a 401 carries no Digest challenge
    /// - [`Error::MalformedChallenge`] when the challenge cannot be answered
    /// - [`Error::AuthenticationFailed`] when the authorized retry fails
    #[instrument(
        name = "device_request",
        skip(self, credentials, request),
        fields(method = %request.method(), host = %credentials.host, uri = %request.request_uri())
    )]
    pub async fn request(
        &self,
        credentials: &DeviceCredentials,
        request: DeviceRequest,
    ) -> Result<String> {
        let uri = request.request_uri();
        let url = format!("{}{uri}", credentials.base_url());

        let probe = self.send(&url, &request, None).await?;
        if probe.status() != StatusCode::UNAUTHORIZED {
            return self.read_body(probe).await;
        }

        let challenge_header = probe
            .headers()
            .get(WWW_AUTHENTICATE)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                Error::server_misconfigured(
                    "device sent 401 without a readable WWW-Authenticate header",
                )
            })?
            .to_owned();

        let challenge = DigestChallenge::parse(&challenge_header)?;
        debug!(realm = %challenge.realm, qop = ?challenge.qop, "answering digest challenge");

        let cnonce = digest::generate_cnonce();
        let authorization = digest::authorization_header(
            credentials,
            &challenge,
            request.method().as_str(),
            &uri,
            &cnonce,
        );
        let authorization = HeaderValue::from_str(&authorization).map_err(|_| {
            ChallengeError::invalid_value(
                "challenge",
                "contains bytes that cannot be sent back in an HTTP header",
            )
        })?;

        let outcome = match self.send(&url, &request, Some(authorization)).await {
            Ok(response) => self.read_body(response).await,
            Err(err) => Err(err),
        };
        outcome.map_err(|err| {
            // only a rejection counts as failed authentication; local limits
            // such as the body size cap keep their own error kind
            if matches!(err, Error::Network(_) | Error::Device(_)) {
                warn!(host = %credentials.host, "authorized retry was rejected");
                Error::authentication_failed(err)
            } else {
                err
            }
        })
    }

    /// Convenience GET request.
    ///
    /// # Errors
    ///
    /// See [`DigestClient::request`].
    #[instrument(name = "device_get", skip(self, credentials), fields(host = %credentials.host))]
    pub async fn get(&self, credentials: &DeviceCredentials, path: &str) -> Result<String> {
        self.request(credentials, DeviceRequest::get(path)).await
    }

    /// Convenience POST request with a body.
    ///
    /// # Errors
    ///
    /// See [`DigestClient::request`].
    #[instrument(name = "device_post", skip(self, credentials, body), fields(host = %credentials.host))]
    pub async fn post(
        &self,
        credentials: &DeviceCredentials,
        path: &str,
        body: impl Into<String>,
    ) -> Result<String> {
        self.request(credentials, DeviceRequest::post(path).with_body(body))
            .await
    }

    /// Convenience PUT request with a body.
    ///
    /// # Errors
    ///
    /// See [`DigestClient::request`].
    #[instrument(name = "device_put", skip(self, credentials, body), fields(host = %credentials.host))]
    pub async fn put(
        &self,
        credentials: &DeviceCredentials,
        path: &str,
        body: impl Into<String>,
    ) -> Result<String> {
        self.request(credentials, DeviceRequest::put(path).with_body(body))
            .await
    }

    /// Convenience DELETE request.
    ///
    /// # Errors
    ///
    /// See [`DigestClient::request`].
    #[instrument(name = "device_delete", skip(self, credentials), fields(host = %credentials.host))]
    pub async fn delete(&self, credentials: &DeviceCredentials, path: &str) -> Result<String> {
        self.request(credentials, DeviceRequest::delete(path)).await
    }

    /// Sends the descriptor once, with or without an `Authorization` header.
    async fn send(
        &self,
        url: &str,
        request: &DeviceRequest,
        authorization: Option<HeaderValue>,
    ) -> Result<reqwest::Response> {
        let mut builder = self.client().request(request.method().into(), url);
        if !request.headers().is_empty() {
            builder = builder.headers(request.headers().clone());
        }
        if let Some(authorization) = authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }
        if let Some(body) = request.body() {
            builder = builder.body(body.to_string());
        }
        Ok(builder.send().await?)
    }
}
