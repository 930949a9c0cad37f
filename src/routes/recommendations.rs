//! Recommendation routes: filtered KPIs, chart payloads, and data preview.

use axum::{extract::State, Json};
use axum_extra::extract::Query;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::criteria::FilterCriteria;
use crate::services::analytics::{self, AnalyticsBundle};
use crate::AppState;

/// POST /api/recommendations — filter criteria in the JSON body.
///
/// The body shape is validated explicitly so malformed criteria come back
/// as a 400 with an `INVALID_FILTER` code rather than an extractor rejection.
pub async fn submit(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<AnalyticsBundle>, AppError> {
    let criteria = FilterCriteria::from_body(&body)?;
    Ok(Json(analytics::compute(&state.dataset, &criteria)))
}

/// GET /api/recommendations — criteria as repeated query parameters
/// (`levels_filter=a&levels_filter=b&types_filter=c`).
pub async fn query(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Json<AnalyticsBundle> {
    Json(analytics::compute(&state.dataset, &criteria))
}
