//! `Authorization` header construction.

use crate::credentials::DeviceCredentials;
use md5::{Digest, Md5};
use rand::Rng;
use std::fmt::Write;

use super::DigestChallenge;

/// Nonce count sent with every authorized request.
///
/// Each request answers a fresh challenge with a fresh client nonce, so the
/// count never advances past one. Devices accept this; it trades nonce reuse
/// bookkeeping for a stateless client.
pub const NONCE_COUNT: &str = "00000001";

/// Random bytes drawn for a client nonce, doubled by hex encoding.
const CNONCE_BYTES: usize = 8;

/// MD5 over the `:`-joined parts, as lowercase hex.
pub(super) fn md5_hex(parts: &[&str]) -> String {
    let mut hasher = Md5::new();
    hasher.update(parts.join(":").as_bytes());
    hex::encode(hasher.finalize())
}

/// Generates a fresh client nonce from the thread-local CSPRNG.
pub fn generate_cnonce() -> String {
    let bytes: [u8; CNONCE_BYTES] = rand::rng().random();
    hex::encode(bytes)
}

/// Computes the `response` directive for a challenge.
///
/// `method` is the uppercase request method and `uri` the path plus query
/// string, exactly as sent on the wire. With qop the computation follows
/// RFC 2617; without it the legacy RFC 2069 form is used and `cnonce` is
/// not hashed.
pub fn compute_response(
    credentials: &DeviceCredentials,
    challenge: &DigestChallenge,
    method: &str,
    uri: &str,
    cnonce: &str,
) -> String {
    let ha1 = md5_hex(&[
        credentials.username.as_str(),
        challenge.realm.as_str(),
        credentials.password.expose_secret(),
    ]);
    let ha2 = md5_hex(&[method, uri]);

    match challenge.qop.as_deref() {
        Some(qop) => md5_hex(&[
            ha1.as_str(),
            challenge.nonce.as_str(),
            NONCE_COUNT,
            cnonce,
            qop,
            ha2.as_str(),
        ]),
        None => md5_hex(&[ha1.as_str(), challenge.nonce.as_str(), ha2.as_str()]),
    }
}

/// Builds the full `Authorization` header value for an authorized retry.
///
/// Directive order follows the RFC examples: username, realm, nonce, uri,
/// then qop, nc and cnonce when qop is in play, then response and finally
/// opaque when the device sent one. `qop` and `nc` are deliberately unquoted.
pub fn authorization_header(
    credentials: &DeviceCredentials,
    challenge: &DigestChallenge,
    method: &str,
    uri: &str,
    cnonce: &str,
) -> String {
    let response = compute_response(credentials, challenge, method, uri, cnonce);

    let mut header = format!(
        r#"Digest username="{}", realm="{}", nonce="{}", uri="{}""#,
        credentials.username, challenge.realm, challenge.nonce, uri
    );
    if let Some(qop) = &challenge.qop {
        let _ = write!(header, r#", qop={qop}, nc={NONCE_COUNT}, cnonce="{cnonce}""#);
    }
    let _ = write!(header, r#", response="{response}""#);
    if let Some(opaque) = &challenge.opaque {
        let _ = write!(header, r#", opaque="{opaque}""#);
    }
    header
}
