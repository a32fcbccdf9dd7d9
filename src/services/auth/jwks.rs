//! Key resolution against a remote JWKS endpoint.
//!
//! Every protected request refetches the full key set: there is no cache and
//! no retry, so rotated keys are visible immediately at the cost of one JWKS
//! round-trip per request. The client-level timeout is the only bound on that
//! round-trip. Known latency/availability liability; see DESIGN.md before
//! "fixing" it, since a cache changes the observable failure modes.

use std::time::Duration;

use jsonwebtoken::DecodingKey;
use serde::Deserialize;
use url::Url;

use crate::services::auth::error::AuthError;

/// One entry of a JSON Web Key Set. Only the RSA parameters are interpreted.
#[derive(Debug, Clone, Deserialize)]
pub struct Jwk {
    pub kty: String,
    #[serde(default)]
    pub kid: Option<String>,
    #[serde(default)]
    pub n: Option<String>,
    #[serde(default)]
    pub e: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

impl Jwk {
    /// Build a verification key from the RSA public components.
    fn to_decoding_key(&self) -> Result<DecodingKey, AuthError> {
        if self.kty != "RSA" {
            return Err(AuthError::KeyServiceUnavailable(format!(
                "unsupported key type in key set: {}",
                self.kty
            )));
        }

        let n = self.n.as_deref().ok_or_else(|| {
            AuthError::KeyServiceUnavailable("key set RSA entry missing 'n'".to_string())
        })?;
        let e = self.e.as_deref().ok_or_else(|| {
            AuthError::KeyServiceUnavailable("key set RSA entry missing 'e'".to_string())
        })?;

        DecodingKey::from_rsa_components(n, e).map_err(|e| {
            AuthError::KeyServiceUnavailable(format!("unusable key set RSA entry: {}", e))
        })
    }
}

#[derive(Debug, Clone)]
pub struct KeyResolver {
    client: reqwest::Client,
    jwks_url: Url,
}

impl KeyResolver {
    pub fn new(jwks_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, jwks_url })
    }

    /// Fetch the key set and select the single entry matching `kid`.
    ///
    /// An absent kid is the caller's problem (`KeyNotFound`, a 401); anything
    /// wrong with the fetch or the document itself is the service's problem
    /// (`KeyServiceUnavailable`, a generic 500).
    pub async fn resolve(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        let response = self
            .client
            .get(self.jwks_url.clone())
            .send()
            .await
            .map_err(|e| AuthError::KeyServiceUnavailable(format!("key set fetch failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AuthError::KeyServiceUnavailable(format!(
                "key set endpoint returned {}",
                response.status()
            )));
        }

        let set: JwkSet = response.json().await.map_err(|e| {
            AuthError::KeyServiceUnavailable(format!("invalid key set document: {}", e))
        })?;

        let mut matches = set.keys.iter().filter(|k| k.kid.as_deref() == Some(kid));
        let jwk = matches.next().ok_or(AuthError::KeyNotFound)?;
        if matches.next().is_some() {
            // A key set that answers one kid twice is defective as a whole.
            return Err(AuthError::KeyServiceUnavailable(format!(
                "duplicate kid in key set: {}",
                kid
            )));
        }

        jwk.to_decoding_key()
    }
}
