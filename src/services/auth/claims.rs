//! Time and scope claim checks.

use chrono::{DateTime, LocalResult, TimeZone, Utc};
use chrono_tz::Tz;

use crate::services::auth::error::AuthError;
use crate::services::auth::token::AccessClaims;

/// Reject tokens whose expiry lies strictly before `now`.
///
/// `exp` is epoch seconds; both sides of the comparison are evaluated in the
/// process-configured zone.
pub fn check_expiry(claims: &AccessClaims, now: DateTime<Utc>, tz: Tz) -> Result<(), AuthError> {
    let expiry = match tz.timestamp_opt(claims.exp, 0) {
        LocalResult::Single(expiry) => expiry,
        // Present but not representable as a timestamp.
        _ => return Err(AuthError::MalformedPayload),
    };

    if now.with_timezone(&tz) > expiry {
        return Err(AuthError::TokenExpired);
    }

    Ok(())
}

/// Reject tokens whose scope claim does not contain `required`.
///
/// The claim is a set of tokens delimited by single spaces; membership is
/// exact, never substring.
pub fn check_scope(claims: &AccessClaims, required: &str) -> Result<(), AuthError> {
    if claims.scope.split(' ').any(|scope| scope == required) {
        Ok(())
    } else {
        Err(AuthError::InsufficientScope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZONE: Tz = chrono_tz::Asia::Kolkata;

    fn claims(exp: i64, scope: &str) -> AccessClaims {
        AccessClaims {
            exp,
            scope: scope.to_string(),
        }
    }

    #[test]
    fn future_expiry_passes() {
        let now = Utc::now();
        let c = claims(now.timestamp() + 3600, "read:heroes");
        assert!(check_expiry(&c, now, ZONE).is_ok());
    }

    #[test]
    fn past_expiry_is_rejected() {
        let now = Utc::now();
        let c = claims(now.timestamp() - 10, "read:heroes");
        assert!(matches!(
            check_expiry(&c, now, ZONE),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn expiry_equal_to_now_still_passes() {
        // "now strictly after expiry" rejects; equality does not.
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let c = claims(1_700_000_000, "read:heroes");
        assert!(check_expiry(&c, now, ZONE).is_ok());
    }

    #[test]
    fn unrepresentable_expiry_is_a_payload_problem() {
        let now = Utc::now();
        let c = claims(i64::MAX, "read:heroes");
        assert!(matches!(
            check_expiry(&c, now, ZONE),
            Err(AuthError::MalformedPayload)
        ));
    }

    #[test]
    fn required_scope_membership_passes() {
        let c = claims(0, "write:heroes read:heroes admin");
        assert!(check_scope(&c, "read:heroes").is_ok());
    }

    #[test]
    fn missing_scope_is_rejected() {
        let c = claims(0, "write:heroes");
        assert!(matches!(
            check_scope(&c, "read:heroes"),
            Err(AuthError::InsufficientScope)
        ));
    }

    #[test]
    fn scope_matching_is_exact_not_substring() {
        let c = claims(0, "read:heroes-admin read:hero");
        assert!(matches!(
            check_scope(&c, "read:heroes"),
            Err(AuthError::InsufficientScope)
        ));
    }
}
