//! Attendance store port and Postgres adapter.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::clock::ORG_TZ;
use crate::error::{DashboardError, DashboardResult};
use crate::models::{ClockInRow, Shift};

/// Read-only access to the attendance log.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Returns all clock-in rows whose business day equals `day`,
    /// ordered by (shift, location key, covering flag, clock-in time).
    ///
    /// The ordering is load-bearing: the grouping fold preserves it
    /// inside every bucket instead of re-sorting.
    async fn clock_ins_for(&self, day: NaiveDate) -> DashboardResult<Vec<ClockInRow>>;
}

/// Raw row shape as stored, before conversion into the organization zone.
///
/// The `shift` column decodes straight into [`Shift`], so a label outside
/// the three known windows fails the read instead of creating a phantom
/// bucket downstream.
#[derive(Debug, sqlx::FromRow)]
struct ClockInRecord {
    shift: Shift,
    location_key: String,
    person: String,
    is_cover: bool,
    clocked_in_at: DateTime<Utc>,
}

impl From<ClockInRecord> for ClockInRow {
    fn from(record: ClockInRecord) -> Self {
        Self {
            shift: record.shift,
            location_key: record.location_key,
            name: record.person,
            covering: record.is_cover,
            clocked_in_at: record.clocked_in_at.with_timezone(&ORG_TZ),
        }
    }
}

/// [`AttendanceStore`] backed by the read-only attendance Postgres database.
#[derive(Debug, Clone)]
pub struct PgAttendanceStore {
    pool: PgPool,
}

impl PgAttendanceStore {
    /// Creates an adapter over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceStore for PgAttendanceStore {
    async fn clock_ins_for(&self, day: NaiveDate) -> DashboardResult<Vec<ClockInRow>> {
        let records = sqlx::query_as::<_, ClockInRecord>(
            "SELECT shift, location_key, person, is_cover, clocked_in_at \
             FROM attendance_clockins \
             WHERE attendance_day = $1 \
             ORDER BY shift, location_key, is_cover, clocked_in_at",
        )
        .bind(day)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| DashboardError::StoreUnavailable {
            store: "attendance".to_string(),
            message: err.to_string(),
        })?;

        Ok(records.into_iter().map(ClockInRow::from).collect())
    }
}
