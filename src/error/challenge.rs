//! Digest challenge parse errors

use std::borrow::Cow;
use thiserror::Error;

/// Errors describing why a `WWW-Authenticate` Digest challenge could not be
/// turned into an authorized retry.
///
/// These only cover challenges that did use the Digest scheme; a missing
/// header or a different scheme is reported as
/// [`Error::ServerMisconfigured`](crate::error::Error::ServerMisconfigured).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ChallengeError {
    /// A directive required by RFC 2617 is absent
    #[error("missing required directive '{0}'")]
    MissingDirective(Cow<'static, str>),

    /// The challenge offered qop values, but none of them was `auth`
    #[error("qop '{offered}' does not offer auth")]
    UnsupportedQop {
        /// The qop list exactly as the device sent it
        offered: String,
    },

    /// A directive was present but unusable
    #[error("invalid value for directive '{directive}': {message}")]
    InvalidValue {
        /// Directive name
        directive: Cow<'static, str>,
        /// What was wrong with it
        message: Cow<'static, str>,
    },
}

impl ChallengeError {
    /// Creates a missing directive error with a static name
    pub fn missing_directive(directive: &'static str) -> Self {
        Self::MissingDirective(Cow::Borrowed(directive))
    }

    /// Creates an unsupported qop error from the offered list
    pub fn unsupported_qop(offered: impl Into<String>) -> Self {
        Self::UnsupportedQop {
            offered: offered.into(),
        }
    }

    /// Creates an invalid value error
    pub fn invalid_value(
        directive: &'static str,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::InvalidValue {
            directive: Cow::Borrowed(directive),
            message: message.into(),
        }
    }
}
