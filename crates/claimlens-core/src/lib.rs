//! claimlens Core - Domain models, errors, and configuration
//!
//! This crate defines the shared abstractions used throughout claimlens:
//! - The structured extraction record returned by the pipeline
//! - Common error types
//! - Configuration management

pub mod config;

pub use config::{AppConfig, ConfigError, LoggingConfig, ServerConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Core error types for claimlens operations
#[derive(Error, Debug)]
pub enum ClaimError {
    /// A numeric token passed the scan pattern but failed to parse.
    /// This is a scan/parse contract mismatch, not a bad-input condition.
    #[error("Numeric token failed to parse: {token}")]
    NumericParse { token: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ClaimError>;

// ============================================================================
// Extraction Models
// ============================================================================

/// Structured record extracted from a single claim string.
///
/// Absent fields are a valid, reportable outcome, never an error;
/// `None` is distinct from numeric zero by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// The input claim, echoed verbatim for the caller's audit/storage use
    pub original_text: String,

    /// Recognized metric category, if any
    pub metric: Option<String>,

    /// Claimed numeric value, if any
    pub value: Option<f64>,

    /// Reference year, if any
    pub year: Option<i32>,

    /// Overall confidence in [0.0, 1.0], rounded to 2 decimal places
    pub confidence: f32,
}

impl ExtractionResult {
    /// Number of the three extractable fields that are present (0-3)
    pub fn fields_found(&self) -> u32 {
        let mut found = 0;
        if self.metric.is_some() {
            found += 1;
        }
        if self.value.is_some() {
            found += 1;
        }
        if self.year.is_some() {
            found += 1;
        }
        found
    }
}

// ============================================================================
// Tests
// ============================================================================
