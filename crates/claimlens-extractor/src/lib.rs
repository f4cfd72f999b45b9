//! claimlens Extractor - Claim extraction pipeline
//!
//! Turns one unstructured economic claim into a structured record:
//! metric category, numeric value, reference year, and a confidence
//! score combining the three. For example, `"India's GDP growth rate
//! was 7.5% in 2024"` becomes metric="GDP growth rate", value=7.5,
//! year=2024, confidence=0.9.

pub mod metric;
pub mod value;
pub mod year;

pub use metric::{MetricDefinition, MetricMatch, MetricRegistry};
pub use value::ValueExtractor;
pub use year::YearExtractor;

use claimlens_core::{ExtractionResult, Result};

/// The extraction pipeline: three independent analyzers plus aggregation.
///
/// Stateless per call; the registry and compiled patterns are read-only
/// after construction, so one instance can be shared across threads.
pub struct ClaimExtractor {
    registry: MetricRegistry,
    value: ValueExtractor,
    year: YearExtractor,
}

impl ClaimExtractor {
    /// Build the pipeline with the built-in metric registry.
    pub fn new() -> Result<Self> {
        Self::with_registry(MetricRegistry::builtin()?)
    }

    /// Build the pipeline with an injected registry (unit-testable with
    /// alternate metric sets).
    pub fn with_registry(registry: MetricRegistry) -> Result<Self> {
        Ok(Self {
            registry,
            value: ValueExtractor::new()?,
            year: YearExtractor::new()?,
        })
    }

    /// The metric registry backing classification.
    pub fn registry(&self) -> &MetricRegistry {
        &self.registry
    }

    /// Run the full pipeline over one claim.
    ///
    /// The three analyzers are independent and order-free; sequential
    /// execution is the simplest correct order. Every input produces a
    /// well-formed result; absent fields are the signal, not an error.
    pub fn extract_all(&self, text: &str) -> Result<ExtractionResult> {
        let metric_match = self.registry.classify(text);
        let value = self.value.extract(text)?;
        let year = self.year.extract(text);

        let mut fields_found = 0u32;
        if metric_match.metric.is_some() {
            fields_found += 1;
        }
        if value.is_some() {
            fields_found += 1;
        }
        if year.is_some() {
            fields_found += 1;
        }

        // Completeness is multiplied, not added, by metric confidence:
        // a fully-populated result still caps at the metric's own
        // ceiling, and zero recognizable fields always scores exactly 0.
        let confidence = if fields_found == 0 {
            0.0
        } else {
            round2(fields_found as f32 / 3.0 * metric_match.confidence)
        };

        tracing::debug!(
            metric = ?metric_match.metric,
            value,
            year,
            confidence,
            "claim extracted"
        );

        Ok(ExtractionResult {
            original_text: text.to_string(),
            metric: metric_match.metric,
            value,
            year,
            confidence,
        })
    }
}

/// Round to 2 decimal places; part of the observable confidence contract.
fn round2(x: f32) -> f32 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipeline() -> ClaimExtractor {
        ClaimExtractor::new().unwrap()
    }

    #[test]
    fn test_full_claim() {
        let result = pipeline()
            .extract_all("India's GDP growth rate was 7.5% in 2024")
            .unwrap();

        assert_eq!(result.metric.as_deref(), Some("GDP growth rate"));
        assert_eq!(result.value, Some(7.5));
        assert_eq!(result.year, Some(2024));
        assert_eq!(result.confidence, 0.9);
        assert_eq!(result.original_text, "India's GDP growth rate was 7.5% in 2024");
    }

    #[test]
    fn test_missing_year_discounts_confidence() {
        let result = pipeline().extract_all("Inflation rate is 6.2%").unwrap();

        assert_eq!(result.metric.as_deref(), Some("inflation rate"));
        assert_eq!(result.value, Some(6.2));
        assert_eq!(result.year, None);
        // round((2/3) * 0.9, 2)
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn test_nothing_found_scores_zero() {
        let result = pipeline().extract_all("Hello world").unwrap();

        assert_eq!(result.metric, None);
        assert_eq!(result.value, None);
        assert_eq!(result.year, None);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_negative_percentage_claim() {
        let result = pipeline()
            .extract_all("Fiscal deficit was -3.4 percent of GDP in 2024")
            .unwrap();

        assert_eq!(result.metric.as_deref(), Some("fiscal deficit"));
        assert_eq!(result.value, Some(-3.4));
        assert_eq!(result.year, Some(2024));
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_first_percentage_and_last_year() {
        let result = pipeline()
            .extract_all("GDP grew from 6% in 2023 to 7.5% in 2024")
            .unwrap();

        assert_eq!(result.value, Some(6.0));
        assert_eq!(result.year, Some(2024));
    }

    #[test]
    fn test_south_asian_grouping_claim() {
        let result = pipeline()
            .extract_all("Per capita income is 1,72,000 in 2024")
            .unwrap();

        assert_eq!(result.metric.as_deref(), Some("per capita income"));
        assert_eq!(result.value, Some(172000.0));
        assert_eq!(result.year, Some(2024));
    }

    #[test]
    fn test_weak_metric_all_fields() {
        // Weak match (0.6) with all three fields: round((3/3) * 0.6, 2)
        let result = pipeline()
            .extract_all("GDP was 3,500 billion in 2023")
            .unwrap();

        assert_eq!(result.metric.as_deref(), Some("GDP growth rate"));
        assert_eq!(result.value, Some(3500.0));
        assert_eq!(result.year, Some(2023));
        assert_eq!(result.confidence, 0.6);
    }

    #[test]
    fn test_value_and_year_without_metric() {
        // Two fields but metric confidence 0 -> round((2/3) * 0, 2) = 0
        let result = pipeline().extract_all("It rose 5% in 2022").unwrap();

        assert_eq!(result.metric, None);
        assert_eq!(result.value, Some(5.0));
        assert_eq!(result.year, Some(2022));
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_year_only_claim() {
        let result = pipeline().extract_all("The census happened in 2011").unwrap();

        assert_eq!(result.metric, None);
        // Only year-shaped candidates exist, so the fallback reports 2011
        assert_eq!(result.value, Some(2011.0));
        assert_eq!(result.year, Some(2011));
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_empty_input_is_tolerated() {
        let result = pipeline().extract_all("").unwrap();

        assert_eq!(result.original_text, "");
        assert_eq!(result.fields_found(), 0);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.0 / 3.0 * 0.9), 0.6);
        assert_eq!(round2(1.0 / 3.0 * 0.9), 0.3);
        assert_eq!(round2(2.0 / 3.0 * 0.6), 0.4);
        assert_eq!(round2(1.0 / 3.0 * 0.6), 0.2);
    }
}
