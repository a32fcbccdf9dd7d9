//! Token structure: three '.'-separated base64url segments, the first two of
//! which carry JSON documents.
//!
//! Decode failures classify by layer: a segment that does not base64url-decode
//! is `InvalidEncoding`; decoded bytes that are not the expected JSON shape
//! are `MalformedHeader` / `MalformedPayload`.

use serde::Deserialize;

use crate::services::auth::base64url;
use crate::services::auth::error::AuthError;

/// Borrowed view of a raw token. Lives only as long as the request.
#[derive(Debug, Clone, Copy)]
pub struct TokenSegments<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

/// Token header. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct TokenHeader {
    pub alg: String,
    pub kid: String,
    #[serde(default)]
    pub typ: Option<String>,
}

/// The claims this gate interprets. Everything else in the payload passes
/// through undecoded.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessClaims {
    // Expiry, seconds since epoch.
    pub exp: i64,
    // Space-delimited scope tokens.
    pub scope: String,
}

impl<'a> TokenSegments<'a> {
    /// Split a raw token into its three segments.
    pub fn split(raw: &'a str) -> Result<Self, AuthError> {
        let mut parts = raw.split('.');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(header), Some(payload), Some(signature), None)
                if !header.is_empty() && !payload.is_empty() && !signature.is_empty() =>
            {
                Ok(Self {
                    header,
                    payload,
                    signature,
                })
            }
            _ => Err(AuthError::MalformedToken),
        }
    }

    pub fn decode_header(&self) -> Result<TokenHeader, AuthError> {
        let bytes = base64url::decode(self.header)?;
        serde_json::from_slice(&bytes).map_err(|_| AuthError::MalformedHeader)
    }

    pub fn decode_claims(&self) -> Result<AccessClaims, AuthError> {
        let bytes = base64url::decode(self.payload)?;
        serde_json::from_slice(&bytes).map_err(|_| AuthError::MalformedPayload)
    }

    /// The byte sequence the signature covers: the original header and payload
    /// segments joined by '.', no re-encoding.
    pub fn signing_input(&self) -> String {
        format!("{}.{}", self.header, self.payload)
    }
}
