//! Sales store port and Postgres adapter.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use sqlx::PgPool;

use crate::error::{DashboardError, DashboardResult};
use crate::models::SalesRow;

/// Read-only access to the sales ledger.
#[async_trait]
pub trait SalesStore: Send + Sync {
    /// Returns the distinct team names, ascending.
    async fn team_names(&self) -> DashboardResult<Vec<String>>;

    /// Returns all transaction rows for `team` with event time at or
    /// after `since` (inclusive lower bound, no upper bound).
    async fn sales_since(
        &self,
        team: &str,
        since: DateTime<Tz>,
    ) -> DashboardResult<Vec<SalesRow>>;
}

/// [`SalesStore`] backed by the read-only sales Postgres database.
#[derive(Debug, Clone)]
pub struct PgSalesStore {
    pool: PgPool,
}

impl PgSalesStore {
    /// Creates an adapter over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn sales_error(err: sqlx::Error) -> DashboardError {
    DashboardError::StoreUnavailable {
        store: "sales".to_string(),
        message: err.to_string(),
    }
}

#[async_trait]
impl SalesStore for PgSalesStore {
    async fn team_names(&self) -> DashboardResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT name FROM teams ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(sales_error)
    }

    async fn sales_since(
        &self,
        team: &str,
        since: DateTime<Tz>,
    ) -> DashboardResult<Vec<SalesRow>> {
        // The ledger stores event times in UTC.
        let since_utc: DateTime<Utc> = since.with_timezone(&Utc);

        sqlx::query_as::<_, SalesRow>(
            "SELECT category, amount FROM sales WHERE team = $1 AND ts >= $2",
        )
        .bind(team)
        .bind(since_utc)
        .fetch_all(&self.pool)
        .await
        .map_err(sales_error)
    }
}
