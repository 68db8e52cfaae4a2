//! Request parameter types for the shift dashboard API.

use serde::Deserialize;

/// Query parameters accepted by `GET /sales/shift`.
///
/// `team` is required by the endpoint but optional here, so its absence
/// surfaces as a typed validation error before any store access rather
/// than as a generic extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalesShiftParams {
    /// Team to report sales for.
    pub team: Option<String>,
}
