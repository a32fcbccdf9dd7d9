//! Base64url segment decoding.
//!
//! Segments are checked against the accepted alphabet before decoding so that
//! a rejected character classifies as an encoding problem instead of leaking
//! out of the engine as something else.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::services::auth::error::AuthError;

// '.' is admitted by the pre-check (deliberate wire behavior); the engine
// still rejects it during decode, so callers see InvalidEncoding either way.
fn in_alphabet(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.')
}

/// Decode a single base64url segment. No padding is accepted or produced.
pub fn decode(segment: &str) -> Result<Vec<u8>, AuthError> {
    if segment.is_empty() || !segment.bytes().all(in_alphabet) {
        return Err(AuthError::InvalidEncoding);
    }

    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| AuthError::InvalidEncoding)
}
