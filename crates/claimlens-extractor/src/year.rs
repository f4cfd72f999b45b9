//! Year extraction module
//!
//! Finds standalone 4-digit year tokens and selects the most recently
//! mentioned one: claims are assumed to reference their last-mentioned
//! year as the subject year.

use regex::Regex;

use claimlens_core::{ClaimError, Result};

/// Extracts the reference year from claim text.
#[derive(Debug)]
pub struct YearExtractor {
    /// Standalone (19|20)xx token, bounded so a longer digit run
    /// containing a year as a substring does not match
    year: Regex,
}

impl YearExtractor {
    pub fn new() -> Result<Self> {
        let pattern = r"\b(?:19|20)\d{2}\b";
        let year = Regex::new(pattern).map_err(|e| {
            ClaimError::ConfigError(format!("invalid year pattern {pattern:?}: {e}"))
        })?;
        Ok(Self { year })
    }

    /// Return the rightmost year-shaped token, or `None`.
    pub fn extract(&self, text: &str) -> Option<i32> {
        self.year
            .find_iter(text)
            .last()
            .and_then(|m| m.as_str().parse().ok())
    }
}
