/*
 * Responsibility
 * - GET /heroes: the protected demo resource
 * - Static data; authorization happens entirely in the access gate, so this
 *   handler only runs for requests the gate let through
 */
use axum::{Json, http::StatusCode, response::IntoResponse};

use crate::api::v1::dto::heroes::HeroResponse;

pub async fn list_heroes() -> impl IntoResponse {
    let heroes = vec![
        HeroResponse {
            id: 1,
            name: "Superman",
        },
        HeroResponse {
            id: 2,
            name: "Batman",
        },
        HeroResponse {
            id: 3,
            name: "Aquaman",
        },
    ];

    (StatusCode::OK, Json(heroes))
}
