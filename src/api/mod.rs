//! HTTP API module for the shift dashboard.
//!
//! Thin request handlers binding the injected clock, the pure resolvers
//! and the store ports into JSON responses.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{INTERNAL_KEY_HEADER, create_router};
pub use request::SalesShiftParams;
pub use response::{ApiError, AttendanceTodayResponse, HealthResponse, SalesShiftResponse};
pub use state::AppState;
