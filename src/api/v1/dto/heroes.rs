/*
 * Responsibility
 * - Heroes response DTO
 */
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HeroResponse {
    pub id: i32,
    pub name: &'static str,
}
