use thiserror::Error;

/// Classified access-token rejection kinds.
///
/// The `Display` strings of the 401 kinds are part of the HTTP contract: the
/// gate returns them verbatim as the rejection message.
/// `KeyServiceUnavailable` never reaches a response body; its reason is for
/// logs only and the client sees a generic 500.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("There is no authorization header specified")]
    MissingAuthorizationHeader,

    #[error("Bearer token not available")]
    InvalidScheme,

    #[error("Access token is not valid")]
    MalformedToken,

    #[error("Invalid token encoding")]
    InvalidEncoding,

    #[error("Invalid Header")]
    MalformedHeader,

    #[error("Invalid Payload")]
    MalformedPayload,

    #[error("Signing key not found")]
    KeyNotFound,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token expired")]
    TokenExpired,

    #[error("Scope not available")]
    InsufficientScope,

    #[error("key service unavailable: {0}")]
    KeyServiceUnavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // The 401 messages are observable behavior, not cosmetics. Lock them in.
    #[test]
    fn rejection_messages_are_stable() {
        let cases = [
            (
                AuthError::MissingAuthorizationHeader,
                "There is no authorization header specified",
            ),
            (AuthError::InvalidScheme, "Bearer token not available"),
            (AuthError::MalformedToken, "Access token is not valid"),
            (AuthError::InvalidEncoding, "Invalid token encoding"),
            (AuthError::MalformedHeader, "Invalid Header"),
            (AuthError::MalformedPayload, "Invalid Payload"),
            (AuthError::KeyNotFound, "Signing key not found"),
            (AuthError::InvalidSignature, "Invalid signature"),
            (AuthError::TokenExpired, "Token expired"),
            (AuthError::InsufficientScope, "Scope not available"),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }
}
