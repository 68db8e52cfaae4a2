//! Server binary for the shift dashboard API.
//!
//! Wires configuration, logging, the store connection pools and the
//! system clock into the router, then serves until shutdown.

use std::sync::Arc;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shiftboard::api::{AppState, create_router};
use shiftboard::clock::SystemClock;
use shiftboard::config::AppConfig;
use shiftboard::error::{DashboardError, DashboardResult};
use shiftboard::store::{PgAttendanceStore, PgSalesStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        error!(error = %err, "Startup failed");
        std::process::exit(1);
    }
}

async fn run() -> DashboardResult<()> {
    let config = AppConfig::from_env()?;

    let sales_pool = pool_for(&config.sales_db_url, "sales")?;
    let attend_pool = pool_for(&config.attend_db_url, "attendance")?;

    let state = AppState::new(
        Arc::new(SystemClock),
        Arc::new(PgSalesStore::new(sales_pool)),
        Arc::new(PgAttendanceStore::new(attend_pool)),
        &config.internal_key,
    );
    let app = create_router(state);

    info!(addr = %config.bind_addr, "Shift dashboard API listening");
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|err| DashboardError::ServerStartup {
            message: err.to_string(),
        })?;
    axum::serve(listener, app)
        .await
        .map_err(|err| DashboardError::ServerStartup {
            message: err.to_string(),
        })?;

    Ok(())
}

/// Builds a connection pool for one of the read-only stores.
///
/// Connections are established lazily, so a store outage surfaces on the
/// failing request as the upstream-unavailable condition instead of
/// preventing startup.
fn pool_for(url: &str, store: &str) -> DashboardResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(url)
        .map_err(|err| DashboardError::StoreUnavailable {
            store: store.to_string(),
            message: err.to_string(),
        })
}
