/*
 * Responsibility
 * - URL structure for the v1.0 API
 * - /health and /heroes; which of these the access gate protects is decided
 *   by the gate's route predicate, not here
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, heroes::list_heroes};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/heroes", get(list_heroes))
}
