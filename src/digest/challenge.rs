//! `WWW-Authenticate` challenge parsing.

use crate::error::{ChallengeError, Error, Result};

/// A Digest challenge extracted from a 401 response.
///
/// Parsed fresh for every challenged request and dropped once the authorized
/// retry is sent; nonces are never reused across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestChallenge {
    /// Protection realm, hashed into HA1
    pub realm: String,
    /// Server nonce, echoed back and hashed into the response
    pub nonce: String,
    /// Quality of protection selected for the reply: `Some("auth")` when the
    /// device offered it, `None` for legacy RFC 2069 devices
    pub qop: Option<String>,
    /// Opaque token to echo back verbatim, if the device sent one
    pub opaque: Option<String>,
}

impl DigestChallenge {
    /// Parses a `WWW-Authenticate` header value.
    ///
    /// Directive names are matched case-insensitively and values may be
    /// quoted or bare, which covers the spread of firmware in the field.
    /// Unknown directives such as `stale` or `algorithm` are ignored; the
    /// first exchange never replays a stale nonce and MD5 is the only
    /// algorithm these devices use.
    ///
    /// # Errors
    ///
    /// [`Error::ServerMisconfigured`] when the scheme is not `Digest`, and
    /// [`Error::MalformedChallenge`] when required directives are missing or
    /// no supported qop is offered.
    pub fn parse(www_authenticate: &str) -> Result<Self> {
        let Some(directives) = strip_digest_scheme(www_authenticate) else {
            let scheme = www_authenticate
                .trim()
                .split_ascii_whitespace()
                .next()
                .unwrap_or("");
            return Err(Error::server_misconfigured(format!(
                "unsupported authentication scheme '{scheme}'"
            )));
        };

        let mut realm = None;
        let mut nonce = None;
        let mut qop = None;
        let mut opaque = None;

        for directive in split_directives(directives) {
            let Some((key, value)) = directive.split_once('=') else {
                continue;
            };
            let key = key.trim().to_ascii_lowercase();
            let value = unquote(value.trim());
            match key.as_str() {
                "realm" => realm = Some(value.to_string()),
                "nonce" => nonce = Some(value.to_string()),
                "qop" => qop = Some(value.to_string()),
                "opaque" => opaque = Some(value.to_string()),
                _ => {}
            }
        }

        let realm = realm.ok_or_else(|| ChallengeError::missing_directive("realm"))?;
        let nonce = nonce.ok_or_else(|| ChallengeError::missing_directive("nonce"))?;
        let qop = qop.map(|offered| select_qop(&offered)).transpose()?;

        Ok(Self {
            realm,
            nonce,
            qop,
            opaque,
        })
    }
}

/// Returns the directive list if the header carries the `Digest` scheme
/// token, `None` otherwise.
fn strip_digest_scheme(header: &str) -> Option<&str> {
    let header = header.trim_start();
    let (scheme, rest) = header
        .split_once(|c: char| c.is_ascii_whitespace())
        .unwrap_or((header, ""));
    scheme
        .eq_ignore_ascii_case("digest")
        .then(|| rest.trim_start())
}

/// Splits the directive list on commas, but not on commas inside quoted
/// values, so `qop="auth,auth-int"` stays one directive.
fn split_directives(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    for (i, byte) in input.bytes().enumerate() {
        match byte {
            b'"' => in_quotes = !in_quotes,
            b',' if !in_quotes => {
                parts.push(&input[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Strips one layer of surrounding double quotes, if present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Picks `auth` out of the offered qop list, or reports the list as
/// unsupported. `auth-int` would require hashing request bodies and no
/// camera firmware insists on it.
fn select_qop(offered: &str) -> std::result::Result<String, ChallengeError> {
    let supports_auth = offered
        .split(',')
        .map(str::trim)
        .any(|qop| qop.eq_ignore_ascii_case("auth"));
    if supports_auth {
        Ok("auth".to_string())
    } else {
        Err(ChallengeError::unsupported_qop(offered))
    }
}
