//! Filter option routes: distinct domain values for the dashboard selectors.

use axum::{extract::State, Json};

use crate::services::filter_options::{self, FilterOptions};
use crate::AppState;

/// GET /api/filters — distinct `Level` and `Type` values in the catalog.
pub async fn options(State(state): State<AppState>) -> Json<FilterOptions> {
    Json(filter_options::distinct(&state.dataset))
}
