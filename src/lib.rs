pub mod config;
pub mod errors;
pub mod loaders;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use models::dataset::Dataset;

/// Shared application state passed to all Axum handlers.
///
/// The dataset is loaded once at startup and never mutated, so handlers on
/// any worker thread read it through the `Arc` without coordination.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub config: config::AppConfig,
}
