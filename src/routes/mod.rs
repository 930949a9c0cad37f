//! Route definitions for the Learnscope API.

pub mod filters;
pub mod health;
pub mod recommendations;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the application router: API routes, liveness check, permissive
/// CORS, request tracing, and static dashboard serving at the root.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let dashboard = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/api/filters", get(filters::options))
        .route(
            "/api/recommendations",
            get(recommendations::query).post(recommendations::submit),
        )
        .route("/test", get(health::live))
        .fallback_service(dashboard)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
