//! Liveness check endpoint.

use axum::Json;
use serde_json::{json, Value};

/// GET /test — fixed status message confirming the server is up.
pub async fn live() -> Json<Value> {
    Json(json!({ "message": "Learnscope server is running" }))
}
