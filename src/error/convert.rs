//! Error conversion implementations.
//!
//! Centralizes all `From` implementations so transport and parsing failures
//! can be propagated with the `?` operator.

use std::borrow::Cow;

use super::{ChallengeError, ConfigValidationError, Error, NetworkError};

/// Maximum length of messages captured from foreign errors. Device and proxy
/// failures can embed whole HTML pages in their description.
pub(crate) const MAX_ERROR_MESSAGE_LEN: usize = 1024;

/// Truncates a message to at most [`MAX_ERROR_MESSAGE_LEN`] bytes, cutting
/// back to the nearest character boundary.
pub(crate) fn truncate_message(mut msg: String) -> String {
    if msg.len() > MAX_ERROR_MESSAGE_LEN {
        let mut cut = MAX_ERROR_MESSAGE_LEN;
        while !msg.is_char_boundary(cut) {
            cut -= 1;
        }
        msg.truncate(cut);
        msg.push_str("... (truncated)");
    }
    msg
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Network(Box::new(NetworkError::Timeout))
        } else if e.is_connect() {
            Error::Network(Box::new(NetworkError::ConnectionFailed(truncate_message(
                e.to_string(),
            ))))
        } else {
            Error::Network(Box::new(NetworkError::Transport(Box::new(e))))
        }
    }
}

impl From<NetworkError> for Error {
    fn from(e: NetworkError) -> Self {
        Error::Network(Box::new(e))
    }
}

impl From<ChallengeError> for Error {
    fn from(e: ChallengeError) -> Self {
        Error::MalformedChallenge(Box::new(e))
    }
}

impl From<ConfigValidationError> for Error {
    fn from(e: ConfigValidationError) -> Self {
        Error::Config(Cow::Owned(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_message() {
        let msg = "connection refused".to_string();
        assert_eq!(truncate_message(msg.clone()), msg);
    }

    #[test]
    fn test_truncate_long_message() {
        let msg = "x".repeat(MAX_ERROR_MESSAGE_LEN + 100);
        let truncated = truncate_message(msg);
        assert!(truncated.ends_with("... (truncated)"));
        assert!(truncated.len() < MAX_ERROR_MESSAGE_LEN + 20);
    }

    #[test]
    fn test_truncate_multibyte_message() {
        // 400 euro signs: over the byte limit, under it in characters
        let msg = "\u{20ac}".repeat(400);
        assert!(msg.len() > MAX_ERROR_MESSAGE_LEN);
        let truncated = truncate_message(msg.clone());
        assert!(truncated.ends_with("... (truncated)"));
        assert!(truncated.len() < msg.len());
        assert!(truncated.len() <= MAX_ERROR_MESSAGE_LEN + "... (truncated)".len());
    }

    #[test]
    fn test_challenge_error_converts_to_malformed_challenge() {
        let err: Error = ChallengeError::missing_directive("nonce").into();
        assert!(matches!(err, Error::MalformedChallenge(_)));
        assert!(err.to_string().contains("nonce"));
    }

    #[test]
    fn test_network_error_converts() {
        let err: Error = NetworkError::Timeout.into();
        assert!(matches!(err, Error::Network(_)));
    }

    #[test]
    fn test_config_error_converts() {
        let err: Error = ConfigValidationError::too_high("timeout", 600, 300).into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("timeout"));
    }
}
