use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use learnscope::config::AppConfig;
use learnscope::{loaders, routes, AppState};
use mimalloc::MiMalloc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "learnscope=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = AppConfig::from_env();

    // The server must not come up without a loaded catalog.
    let dataset = loaders::load_dataset(&config.data_path)
        .with_context(|| format!("failed to load dataset from `{}`", config.data_path))?;
    tracing::info!(
        rows = dataset.len(),
        columns = dataset.columns.len(),
        path = %config.data_path,
        "Loaded learning catalog"
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("invalid BACKEND_HOST/BACKEND_PORT")?;
    tracing::info!(host = %addr, "Starting Learnscope API server");

    let state = AppState {
        dataset: Arc::new(dataset),
        config,
    };
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
