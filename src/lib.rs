//! Shift-bucketed sales and attendance reporting API.
//!
//! This crate exposes a small internal, key-authenticated HTTP API that
//! reports near-real-time sales totals and staff attendance for a retail
//! organization operating in a single fixed time zone. Raw rows from two
//! read-only stores are reshaped into summaries keyed by operational
//! shift and attendance business day.

#![warn(missing_docs)]

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod rollup;
pub mod store;
