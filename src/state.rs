/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 * - Clone assumed cheap (inner Arc)
 */
use std::sync::Arc;

use crate::services::auth::validator::AccessTokenValidator;

#[derive(Clone, Debug)]
pub struct AppState {
    pub validator: Arc<AccessTokenValidator>,
}

impl AppState {
    pub fn new(validator: Arc<AccessTokenValidator>) -> Self {
        Self { validator }
    }
}
