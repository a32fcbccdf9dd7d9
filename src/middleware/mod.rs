/*
 * Responsibility
 * - middleware public interface (re-export)
 */
pub mod auth;
pub mod cors;
pub mod http;
