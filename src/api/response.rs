//! Response types for the shift dashboard API.
//!
//! This module defines the success bodies, the error response structure
//! and the mapping from service errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::DashboardError;
use crate::models::{AttendanceBoard, SalesTotal};

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `true` when the service is up.
    pub ok: bool,
}

/// Body of `GET /sales/shift`.
#[derive(Debug, Clone, Serialize)]
pub struct SalesShiftResponse {
    /// Team the totals were computed for.
    pub team: String,
    /// Start of the current shift, local ISO-8601 with offset.
    pub shift_start: DateTime<Tz>,
    /// Instant the report was produced, local ISO-8601 with offset.
    pub updated: DateTime<Tz>,
    /// Per-category totals, summed amount descending.
    pub rows: Vec<SalesTotal>,
}

/// Body of `GET /attendance/today`.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceTodayResponse {
    /// Business day the board covers.
    pub attendance_day: NaiveDate,
    /// Instant the report was produced, local ISO-8601 with offset.
    pub updated: DateTime<Tz>,
    /// Clock-ins grouped by shift and location.
    pub data: AttendanceBoard,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<DashboardError> for ApiErrorResponse {
    fn from(error: DashboardError) -> Self {
        match error {
            // Deliberately detail-free: nothing about the expected key
            // leaks to the caller.
            DashboardError::Unauthorized => ApiErrorResponse {
                status: StatusCode::UNAUTHORIZED,
                error: ApiError::new("UNAUTHORIZED", "unauthorized"),
            },
            DashboardError::MissingParam { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "MISSING_PARAM",
                    format!("Missing required query parameter: {}", name),
                ),
            },
            // Which store failed is useful to the caller; the driver
            // detail goes to the log only.
            DashboardError::StoreUnavailable { store, .. } => ApiErrorResponse {
                status: StatusCode::BAD_GATEWAY,
                error: ApiError::new(
                    "STORE_UNAVAILABLE",
                    format!("The {} store is currently unavailable", store),
                ),
            },
            DashboardError::MissingEnvVar { .. }
            | DashboardError::InvalidEnvVar { .. }
            | DashboardError::ServerStartup { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("INTERNAL", "Internal server error"),
            },
        }
    }
}
