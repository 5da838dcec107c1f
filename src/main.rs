use std::sync::Arc;

use mindtrack::{
    AppState, load_config, routes,
    services::analysis::HttpAnalysisService,
};
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = load_config()?;
    tracing::info!("configuration loaded");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(config.database.connection_string().expose_secret())
        .await?;

    sqlx::migrate!().run(&pool).await?;
    tracing::info!("database migrations applied");

    let analysis = Arc::new(HttpAnalysisService::new(&config.analysis)?);

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(pool, config, analysis);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("mindtrack server listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown signal handler");
    }
}
