//! The aggregation core: pure functions reshaping raw store rows into
//! shift-bucketed summaries.
//!
//! This module contains shift containment and shift-start resolution,
//! the attendance business-day cutoff, the sales group-and-sum fold and
//! the three-level attendance grouping fold. Everything here is
//! deterministic and free of I/O; the store adapters and HTTP layer
//! feed it typed rows and zone-aware instants.

mod attendance;
mod business_day;
mod sales;
mod shift_window;

pub use attendance::group_clock_ins;
pub use business_day::business_day_for;
pub use sales::summarize_sales;
pub use shift_window::{shift_for, shift_start_for};
