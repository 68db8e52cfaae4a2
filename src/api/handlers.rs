//! HTTP request handlers for the shift dashboard API.
//!
//! This module contains the handler functions for all API endpoints.
//! Every protected handler checks the shared-secret header before any
//! clock read or store access.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::HeaderMap,
    response::IntoResponse,
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::DashboardError;
use crate::rollup::{business_day_for, group_clock_ins, shift_start_for, summarize_sales};

use super::request::SalesShiftParams;
use super::response::{
    ApiErrorResponse, AttendanceTodayResponse, HealthResponse, SalesShiftResponse,
};
use super::state::AppState;

/// Name of the shared-secret request header.
pub const INTERNAL_KEY_HEADER: &str = "x-internal-key";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/teams", get(teams_handler))
        .route("/sales/shift", get(sales_shift_handler))
        .route("/attendance/today", get(attendance_today_handler))
        .with_state(state)
}

/// Checks the shared-secret header.
///
/// A missing key and a mismatched key produce the same response.
fn require_internal_key(state: &AppState, headers: &HeaderMap) -> Result<(), ApiErrorResponse> {
    let supplied = headers
        .get(INTERNAL_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    if supplied != Some(state.internal_key()) {
        return Err(DashboardError::Unauthorized.into());
    }
    Ok(())
}

/// Handler for the `GET /health` endpoint. Unauthenticated.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Handler for the `GET /teams` endpoint.
async fn teams_handler(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Err(unauthorized) = require_internal_key(&state, &headers) {
        return unauthorized.into_response();
    }

    let correlation_id = Uuid::new_v4();
    match state.sales().team_names().await {
        Ok(teams) => {
            info!(
                correlation_id = %correlation_id,
                teams = teams.len(),
                "Listed teams"
            );
            Json(teams).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Team listing failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the `GET /sales/shift` endpoint.
///
/// Reports per-category totals for the requested team since the start
/// of the shift containing "now".
async fn sales_shift_handler(
    State(state): State<AppState>,
    Query(params): Query<SalesShiftParams>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Err(unauthorized) = require_internal_key(&state, &headers) {
        return unauthorized.into_response();
    }

    let correlation_id = Uuid::new_v4();

    // Validate before touching the clock or the store.
    let Some(team) = params.team else {
        warn!(
            correlation_id = %correlation_id,
            "Sales shift request without team parameter"
        );
        return ApiErrorResponse::from(DashboardError::MissingParam {
            name: "team".to_string(),
        })
        .into_response();
    };

    let now = state.clock().now();
    let shift_start = shift_start_for(now);

    match state.sales().sales_since(&team, shift_start).await {
        Ok(rows) => {
            let totals = summarize_sales(&rows);
            info!(
                correlation_id = %correlation_id,
                team = %team,
                shift_start = %shift_start,
                categories = totals.len(),
                "Sales shift report produced"
            );
            Json(SalesShiftResponse {
                team,
                shift_start,
                updated: now,
                rows: totals,
            })
            .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                team = %team,
                error = %err,
                "Sales shift report failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the `GET /attendance/today` endpoint.
///
/// Reports the current business day's clock-ins grouped by shift and
/// location, with regular and covering entries kept apart.
async fn attendance_today_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Err(unauthorized) = require_internal_key(&state, &headers) {
        return unauthorized.into_response();
    }

    let correlation_id = Uuid::new_v4();
    let now = state.clock().now();
    let attendance_day = business_day_for(now);

    match state.attendance().clock_ins_for(attendance_day).await {
        Ok(rows) => {
            let entries = rows.len();
            let data = group_clock_ins(rows);
            info!(
                correlation_id = %correlation_id,
                attendance_day = %attendance_day,
                entries,
                "Attendance report produced"
            );
            Json(AttendanceTodayResponse {
                attendance_day,
                updated: now,
                data,
            })
            .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                attendance_day = %attendance_day,
                error = %err,
                "Attendance report failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
