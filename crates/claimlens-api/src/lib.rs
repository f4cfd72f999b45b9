//! claimlens API - REST server
//!
//! Thin HTTP transport over the extraction pipeline: it validates
//! request shape and size, invokes the pipeline, and serializes the
//! result. All extraction semantics live in claimlens-extractor.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

use axum::{http::HeaderValue, routing::get, Router};
use state::AppState;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "claimlens API",
        description = "Extracts economic metrics, values, and years from claim text"
    ),
    paths(
        handlers::health::health_check,
        handlers::health::readiness_check,
        handlers::extract::extract_handler,
        handlers::metrics::list_metrics,
    ),
    components(schemas(
        handlers::extract::ExtractRequest,
        handlers::extract::ExtractResponse,
        handlers::metrics::MetricsListResponse,
        handlers::health::HealthResponse,
        handlers::health::ReadinessResponse,
        handlers::health::ReadinessChecks,
        error::ApiError,
    )),
    tags(
        (name = "extract", description = "Claim extraction"),
        (name = "metrics", description = "Capability discovery"),
        (name = "health", description = "Liveness and readiness")
    )
)]
pub struct ApiDoc;

/// Build the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/metrics", get(handlers::health::metrics))
        .nest("/api/v1", routes::api_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let server = &state.config.server;
    if !server.cors_enabled {
        return CorsLayer::new();
    }
    if server.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
