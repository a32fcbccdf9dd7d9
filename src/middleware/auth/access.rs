//! Bearer access-token gate in front of the heroes endpoint.
//!
//! Requests that do not match the protected route bypass the pipeline and are
//! forwarded untouched. Matched requests run the validator; the first failure
//! becomes the HTTP rejection and the downstream handler never runs. Nothing
//! is attached to the request on success: the gate forwards, it does not
//! inject identity.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Method, Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::error::AuthError;
use crate::state::AppState;

const PROTECTED_PATH: &str = "/api/v1.0/heroes";

/// Apply the access gate to the given Router.
pub fn apply(router: Router, state: AppState) -> Router {
    // axum 0.8's from_fn cannot take a State extractor on its own, so state is
    // passed explicitly via from_fn_with_state.
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

fn is_protected(method: &Method, path: &str) -> bool {
    method == Method::GET && path == PROTECTED_PATH
}

async fn access_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !is_protected(req.method(), req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let outcome = match bearer_token(req.headers()) {
        Ok(token) => state.validator.validate(token).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(()) => Ok(next.run(req).await),
        Err(err @ AuthError::KeyServiceUnavailable(_)) => {
            tracing::error!(error = %err, "access token check could not complete");
            Err(AppError::Internal)
        }
        Err(err) => {
            tracing::warn!(error = %err, "access token rejected");
            Err(err.into())
        }
    }
}

/// Pull the bearer credential out of the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuthorizationHeader)?;

    // An unreadable value cannot carry a Bearer credential.
    let value = value.to_str().map_err(|_| AuthError::InvalidScheme)?;

    match value.split_once(' ') {
        Some(("Bearer", token)) => Ok(token),
        _ => Err(AuthError::InvalidScheme),
    }
}
