// MindCheck Backend Entry Point
// Serves journal analysis over HTTP

use std::sync::Arc;

use mindcheck_core::brain::JournalAnalyzer;
use mindcheck_core::classifier::HttpSentimentClassifier;
use mindcheck_core::config::{LogFormat, ServiceConfig};
use mindcheck_core::server::{create_router, AppState};
use mindcheck_core::telemetry::init_tracing;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    init_tracing(LogFormat::from_env());

    let config = ServiceConfig::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let classifier = Arc::new(HttpSentimentClassifier::new(&config.classifier)?);
    let analyzer = Arc::new(JournalAnalyzer::new(classifier));

    let app = create_router(AppState { analyzer });

    info!("Starting server on {}", config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
