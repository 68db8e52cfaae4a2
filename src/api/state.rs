//! Application state for the shift dashboard API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::clock::Clock;
use crate::store::{AttendanceStore, SalesStore};

/// Shared application state.
///
/// Holds the injected clock, the two store ports and the shared secret.
/// Cloned per request by axum; all members are immutable after startup.
#[derive(Clone)]
pub struct AppState {
    clock: Arc<dyn Clock>,
    sales: Arc<dyn SalesStore>,
    attendance: Arc<dyn AttendanceStore>,
    internal_key: Arc<str>,
}

impl AppState {
    /// Creates application state from the injected collaborators.
    pub fn new(
        clock: Arc<dyn Clock>,
        sales: Arc<dyn SalesStore>,
        attendance: Arc<dyn AttendanceStore>,
        internal_key: &str,
    ) -> Self {
        Self {
            clock,
            sales,
            attendance,
            internal_key: Arc::from(internal_key),
        }
    }

    /// Returns the injected time source.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Returns the sales store port.
    pub fn sales(&self) -> &dyn SalesStore {
        self.sales.as_ref()
    }

    /// Returns the attendance store port.
    pub fn attendance(&self) -> &dyn AttendanceStore {
        self.attendance.as_ref()
    }

    /// Returns the expected internal key.
    pub fn internal_key(&self) -> &str {
        &self.internal_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
