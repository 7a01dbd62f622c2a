//! Serves the assignment history API over HTTP.
//!
//! Usage:
//!
//! ```text
//! filingtrail-server [--bind ADDR] [--database-url URL] [--pool-size N] [--log-filter FILTER]
//! ```
//!
//! Without a database URL the server keeps history in memory and accepts any
//! assignment identifier. With one, the `PostgreSQL` schema under
//! `migrations/` must already be applied.

use clap::Parser;
use diesel::{
    PgConnection,
    r2d2::{ConnectionManager, Pool},
};
use eyre::WrapErr;
use filingtrail::{
    config::{ServerConfig, StorageBackend},
    http::{AppState, SharedClock, router},
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::parse();
    init_tracing(&config.log_filter);

    let state = build_state(&config)?;
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.bind))?;
    info!(addr = %config.bind, "filingtrail server listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server error")?;

    info!("filingtrail server stopped");
    Ok(())
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn build_state(config: &ServerConfig) -> eyre::Result<AppState> {
    match config.storage() {
        StorageBackend::InMemory => {
            warn!("no database configured; history is kept in memory and lost on exit");
            Ok(AppState::in_memory(SharedClock::system()))
        }
        StorageBackend::Postgres { url, pool_size } => {
            let pool = Pool::builder()
                .max_size(pool_size)
                .build(ConnectionManager::<PgConnection>::new(url))
                .wrap_err("failed to build PostgreSQL connection pool")?;
            info!(pool_size, "connected to PostgreSQL");
            Ok(AppState::postgres(&pool, SharedClock::system()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
