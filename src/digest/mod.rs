//! RFC 2617 Digest access authentication.
//!
//! Split by direction: `challenge` parses what the device sent in
//! `WWW-Authenticate`, `authorization` builds what goes back in
//! `Authorization`. Everything here is pure computation over strings, which
//! is what makes the exchange testable without a device on the wire.

mod authorization;
mod challenge;


pub use authorization::{NONCE_COUNT, authorization_header, compute_response, generate_cnonce};
pub use challenge::DigestChallenge;
