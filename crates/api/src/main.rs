//! Inkwell API server entrypoint

use anyhow::Context;
use axum::{middleware::map_request_with_state, ServiceExt};
use tower::Layer;
use tracing_subscriber::EnvFilter;

use inkwell_api::{routes, routing::rewrite_request, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    let pool = inkwell_shared::create_pool(&config.database_url, config.database_max_connections)
        .await
        .context("failed to connect to database")?;

    inkwell_shared::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;

    let bind_address = config.bind_address.clone();
    tracing::info!(
        bind_address = %bind_address,
        base_domain = %config.base_domain,
        environment = ?config.environment,
        "starting inkwell-api"
    );

    let state = AppState::new(config, pool);
    let router = routes::create_router(state.clone());

    // The rewrite layer wraps the finished router so it runs before path
    // matching; see routes::create_router.
    let app = map_request_with_state(state, rewrite_request).layer(router);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;

    axum::serve(listener, ServiceExt::<axum::extract::Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install shutdown handler");
        // Without a signal handler there is nothing to wait for.
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
