//! Registry server: reads settings, prepares the database, serves the entity and common routes.
//!
//! Run from repo root: `cargo run -p registry-server`

use axum::Router;
use student_registry::{
    api_routes, common_routes_with_ready, ensure_database_exists, ensure_tables, telemetry,
    AppState, PgStore, Settings,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Before the subscriber so RUST_LOG from .env applies.
    let dotenv = dotenvy::dotenv();
    telemetry::init_tracing();
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }
    let settings = Settings::from_env()?;

    ensure_database_exists(&settings.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    ensure_tables(&pool, &settings.schema).await?;

    let state = AppState::new(PgStore::new(pool.clone(), settings.schema.clone()));
    let app = Router::new()
        .merge(common_routes_with_ready(pool))
        .merge(api_routes(state, settings.body_limit));

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!(schema = %settings.schema, "listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
