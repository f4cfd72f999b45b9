//! claimlens API Server
//!
//! REST server exposing the claim extraction pipeline.

use claimlens_api::{create_router, state::AppState};
use claimlens_core::config::AppConfig;
use claimlens_extractor::ClaimExtractor;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::from_env().unwrap_or_default();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "claimlens_api={},tower_http=info",
            config.logging.level
        ))
    });
    if config.logging.json_format {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    // Build the pipeline once; it is read-only for the process lifetime
    let extractor = ClaimExtractor::new()?;
    tracing::info!(
        metrics = extractor.registry().len(),
        "metric registry loaded"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Create application state and router
    let state = Arc::new(AppState::new(config, extractor));
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("claimlens API server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
