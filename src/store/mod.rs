//! Store ports and Postgres adapters.
//!
//! The service reads from two independent stores: a sales ledger and an
//! attendance log. Each is modeled as an async port so handlers and
//! tests stay independent of the concrete driver; the Postgres adapters
//! validate raw rows into typed records at this boundary. No operation
//! mutates either store.

mod attendance;
mod sales;

pub use attendance::{AttendanceStore, PgAttendanceStore};
pub use sales::{PgSalesStore, SalesStore};
