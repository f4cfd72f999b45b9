//! API route definitions

use crate::handlers::{extract, metrics};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Create API v1 routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/extract", post(extract::extract_handler))
        .route("/metrics", get(metrics::list_metrics))
}
