/*
 * Responsibility
 * - Config load -> dependency construction -> Router assembly
 * - Middleware application (access gate / CORS / HTTP hygiene)
 * - axum::serve() startup
 */
use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    config::Config,
    middleware,
    services::auth::{jwks::KeyResolver, validator::AccessTokenValidator},
    state::AppState,
};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,heroes_resource_server=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location/payload).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Surface panics via tracing so they don't get lost when stderr is hidden.
        tracing::error!(?info, "panic");

        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    // Fail fast in development; keep serving in production.
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting resource server in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config)?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_state(config: &Config) -> Result<AppState> {
    let keys = KeyResolver::new(config.jwks_url.clone(), config.jwks_timeout)
        .context("failed to build the key-set HTTP client")?;

    let validator =
        AccessTokenValidator::new(keys, config.required_scope.clone(), config.timezone);

    Ok(AppState::new(Arc::new(validator)))
}

pub(crate) fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .nest("/api/v1.0", api::v1::routes())
        .with_state(state.clone());

    // The gate must see requests before handlers run; CORS and hygiene wrap
    // everything, preflight included.
    let router = middleware::auth::access::apply(router, state);
    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router)
}
