//! Supported-metric discovery handler

use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// List of metric categories the service can recognize
#[derive(Debug, Serialize, ToSchema)]
pub struct MetricsListResponse {
    /// Metric names in registry (precedence) order
    pub supported_metrics: Vec<String>,
    /// Number of supported metrics
    pub count: usize,
}

/// List all economic metrics this service can recognize
#[utoipa::path(
    get,
    path = "/api/v1/metrics",
    tag = "metrics",
    responses(
        (status = 200, description = "Supported metric list", body = MetricsListResponse)
    )
)]
pub async fn list_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let names: Vec<String> = state
        .extractor
        .registry()
        .metric_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    let count = names.len();
    Json(MetricsListResponse {
        supported_metrics: names,
        count,
    })
}
