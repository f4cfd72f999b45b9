//! Claim extraction handler

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use claimlens_core::ExtractionResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

/// Extraction request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct ExtractRequest {
    /// The raw claim text to analyze
    #[schema(example = "India's GDP growth rate was 7.5% in 2024")]
    pub text: String,
}

/// Extraction response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ExtractResponse {
    /// The input claim, echoed verbatim
    #[schema(example = "India's GDP growth rate was 7.5% in 2024")]
    pub original_text: String,

    /// Recognized metric category
    #[schema(example = "GDP growth rate")]
    pub metric: Option<String>,

    /// Claimed numeric value
    #[schema(example = 7.5)]
    pub value: Option<f64>,

    /// Reference year
    #[schema(example = 2024)]
    pub year: Option<i32>,

    /// Overall confidence, rounded to 2 decimals
    #[schema(example = 0.9)]
    pub confidence: f32,
}

impl From<ExtractionResult> for ExtractResponse {
    fn from(result: ExtractionResult) -> Self {
        Self {
            original_text: result.original_text,
            metric: result.metric,
            value: result.value,
            year: result.year,
            confidence: result.confidence,
        }
    }
}

/// Extract metric, value, and year from a claim
#[utoipa::path(
    post,
    path = "/api/v1/extract",
    tag = "extract",
    request_body = ExtractRequest,
    responses(
        (status = 200, description = "Extraction successful", body = ExtractResponse),
        (status = 400, description = "Invalid request", body = crate::error::ApiError),
        (status = 500, description = "Internal error", body = crate::error::ApiError)
    )
)]
pub async fn extract_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExtractRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.increment_requests();

    // Length and emptiness limits are transport-owned; the pipeline
    // itself tolerates any string.
    if req.text.trim().is_empty() {
        return Err(AppError::BadRequest("Claim text cannot be empty".to_string()));
    }
    let max_len = state.config.server.max_claim_length;
    if req.text.chars().count() > max_len {
        return Err(AppError::BadRequest(format!(
            "Claim text exceeds {max_len} characters"
        )));
    }

    let result = state.extractor.extract_all(&req.text)?;

    tracing::info!(
        metric = ?result.metric,
        confidence = result.confidence,
        "extracted claim"
    );

    Ok(Json(ExtractResponse::from(result)))
}
