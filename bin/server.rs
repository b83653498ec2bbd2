// Clinic Metrics - Web Server
// Serves the metrics view model as a read-only JSON API

use anyhow::{Context, Result};
use clinic_metrics::{api, logging, DashboardConfig, Dataset};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = DashboardConfig::from_args(&args)?;
    logging::init_stderr(&config.log_filter);

    info!("🌐 Clinic Metrics - Web Server");

    let dataset = Arc::new(Dataset::builtin()?);
    let app = api::router(dataset);

    let listener = tokio::net::TcpListener::bind(&config.server_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.server_addr))?;

    info!(addr = %config.server_addr, "🚀 server running");
    info!("   API: http://{}/api/kpis", config.server_addr);

    axum::serve(listener, app)
        .await
        .context("Failed to start server")
}
