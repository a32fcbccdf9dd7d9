//! The validation pipeline the access gate runs for each protected request.

use chrono::Utc;
use chrono_tz::Tz;

use crate::services::auth::claims;
use crate::services::auth::error::AuthError;
use crate::services::auth::jwks::KeyResolver;
use crate::services::auth::signature;
use crate::services::auth::token::TokenSegments;

/// Validates bearer access tokens against the configured key set, required
/// scope and time zone. Built once at startup and shared read-only; holds no
/// per-request state.
#[derive(Debug, Clone)]
pub struct AccessTokenValidator {
    keys: KeyResolver,
    required_scope: String,
    timezone: Tz,
}

impl AccessTokenValidator {
    pub fn new(keys: KeyResolver, required_scope: String, timezone: Tz) -> Self {
        Self {
            keys,
            required_scope,
            timezone,
        }
    }

    /// Run the full pipeline. The first failing stage wins; stages never mask
    /// one another's error kinds.
    pub async fn validate(&self, token: &str) -> Result<(), AuthError> {
        // 1) Structure: exactly three non-empty '.'-separated segments.
        let segments = TokenSegments::split(token)?;

        // 2) Decode both JSON documents before touching the network.
        let header = segments.decode_header()?;
        let claims = segments.decode_claims()?;

        tracing::debug!(kid = %header.kid, alg = %header.alg, typ = ?header.typ, "token parsed");

        // 3) Resolve the signing key (fresh key-set fetch, see jwks.rs).
        let key = self.keys.resolve(&header.kid).await?;

        // 4) Signature over the original header/payload segments.
        signature::verify(&segments, &key)?;

        // 5) Claims: expiry, then required scope.
        claims::check_expiry(&claims, Utc::now(), self.timezone)?;
        claims::check_scope(&claims, &self.required_scope)?;

        Ok(())
    }
}
