mod analysis;
mod config;
mod errors;
mod extract;
mod models;
mod recommend;
mod routes;
mod state;
mod store;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer_from_name;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::JsonStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    // Upload directory is auto-created if absent
    std::fs::create_dir_all(&config.upload_dir).with_context(|| {
        format!(
            "failed to create upload directory {}",
            config.upload_dir.display()
        )
    })?;
    info!("Upload directory ready at {}", config.upload_dir.display());

    // A corrupt store file refuses to start here instead of surfacing as
    // 500s on the first admin request.
    let store = JsonStore::new(&config.data_file);
    let initial = store
        .load()
        .with_context(|| format!("failed to load record store {}", config.data_file.display()))?;
    info!("Record store loaded ({} records)", initial.users.len());

    // Analysis backend (heuristic by default, degraded via ANALYZER env)
    let analyzer = analyzer_from_name(&config.analyzer);
    info!("Analyzer backend: {}", config.analyzer);

    // Build app state
    let state = AppState {
        store,
        analyzer,
        sessions: Arc::new(Mutex::new(HashMap::new())),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
