//! Core data models for the shift dashboard.
//!
//! This module contains the typed domain records used throughout the
//! service. All of them are per-request projections built from store
//! rows; nothing here is persisted or mutated.

mod attendance;
mod sales;
mod shift;

pub use attendance::{AttendanceBoard, AttendanceBucket, AttendanceEntry, ClockInRow, LocationMap};
pub use sales::{SalesRow, SalesTotal};
pub use shift::Shift;
