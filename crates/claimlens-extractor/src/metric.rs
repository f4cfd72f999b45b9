//! Metric classification module
//!
//! Answers one question: which economic metric is this claim about?
//! Classification is generic iteration over an ordered registry of
//! pattern definitions, never metric-specific conditionals, so adding
//! a new metric category is a pure data change in [`MetricRegistry::builtin`].

use regex::Regex;
use serde::{Deserialize, Serialize};

use claimlens_core::{ClaimError, Result};

/// Confidence assigned to a strong (unambiguous) pattern match
pub const STRONG_CONFIDENCE: f32 = 0.9;

/// Confidence assigned to a weak (suggestive) pattern match
pub const WEAK_CONFIDENCE: f32 = 0.6;

/// A metric category with its ordered strong and weak pattern lists
#[derive(Debug, Clone)]
pub struct MetricDefinition {
    /// Category name, unique across the registry
    pub name: String,
    /// Patterns considered unambiguous proof of this category
    strong: Vec<Regex>,
    /// Patterns that merely suggest this category
    weak: Vec<Regex>,
}

impl MetricDefinition {
    /// Compile a definition from pattern sources (lowercase regex syntax)
    pub fn new(name: impl Into<String>, strong: &[&str], weak: &[&str]) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            strong: compile_patterns(strong)?,
            weak: compile_patterns(weak)?,
        })
    }
}

fn compile_patterns(sources: &[&str]) -> Result<Vec<Regex>> {
    sources
        .iter()
        .map(|p| {
            Regex::new(p)
                .map_err(|e| ClaimError::ConfigError(format!("invalid metric pattern {p:?}: {e}")))
        })
        .collect()
}

/// Result of classifying a claim against the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricMatch {
    /// Matched metric name, or `None` when nothing matched
    pub metric: Option<String>,
    /// 0.9 (strong), 0.6 (weak), or 0.0 (no match)
    pub confidence: f32,
}

impl MetricMatch {
    fn hit(name: &str, confidence: f32) -> Self {
        Self {
            metric: Some(name.to_string()),
            confidence,
        }
    }

    /// The no-match outcome. Valid and reportable, not an error.
    pub fn none() -> Self {
        Self {
            metric: None,
            confidence: 0.0,
        }
    }
}

/// Fixed ordered registry of metric definitions.
///
/// Read-only after construction; order determines match precedence:
/// earlier-registered metrics win over later ones even when a later
/// metric's pattern of the same tier would also match.
#[derive(Debug, Clone)]
pub struct MetricRegistry {
    definitions: Vec<MetricDefinition>,
}

impl MetricRegistry {
    /// Build a registry from an ordered definition list.
    ///
    /// Enforces the registry invariants: unique names, and at least one
    /// strong or weak pattern per definition.
    pub fn new(definitions: Vec<MetricDefinition>) -> Result<Self> {
        for (i, def) in definitions.iter().enumerate() {
            if def.strong.is_empty() && def.weak.is_empty() {
                return Err(ClaimError::ValidationError(format!(
                    "metric {:?} has no patterns",
                    def.name
                )));
            }
            if definitions[..i].iter().any(|d| d.name == def.name) {
                return Err(ClaimError::ValidationError(format!(
                    "duplicate metric name {:?}",
                    def.name
                )));
            }
        }
        Ok(Self { definitions })
    }

    /// The built-in registry of 10 economic metrics.
    ///
    /// Patterns are written in lowercase; [`classify`](Self::classify)
    /// lowercases the input once before matching.
    pub fn builtin() -> Result<Self> {
        Self::new(vec![
            MetricDefinition::new(
                "GDP growth rate",
                &[
                    r"gdp\s+growth\s+rate",
                    r"rate\s+of\s+gdp\s+growth",
                    r"economic\s+growth\s+rate",
                    r"gdp\s+grew",
                    r"gdp\s+growth",
                ],
                &[r"\bgdp\b"],
            )?,
            MetricDefinition::new(
                "inflation rate",
                &[
                    r"inflation\s+rate",
                    r"rate\s+of\s+inflation",
                    r"cpi\s+inflation",
                    r"consumer\s+price\s+in",
                    r"retail\s+inflation",
                ],
                &[r"\binflation\b"],
            )?,
            MetricDefinition::new(
                "unemployment rate",
                &[
                    r"unemployment\s+rate",
                    r"jobless\s+rate",
                    r"rate\s+of\s+unemployment",
                ],
                &[r"\bunemployment\b", r"\bjobless\b"],
            )?,
            MetricDefinition::new(
                "fiscal deficit",
                &[r"fiscal\s+deficit", r"budget\s+deficit", r"fiscal\s+gap"],
                // Bare "deficit" could be a trade deficit too
                &[r"\bdeficit\b"],
            )?,
            MetricDefinition::new(
                "literacy rate",
                &[r"literacy\s+rate", r"rate\s+of\s+literacy"],
                &[r"\bliteracy\b", r"\bliterate\b"],
            )?,
            MetricDefinition::new(
                "population",
                &[
                    r"population\s+of\s+india",
                    r"india.{0,15}population",
                    r"total\s+population",
                ],
                &[r"\bpopulation\b"],
            )?,
            MetricDefinition::new(
                "per capita income",
                &[
                    r"per\s+capita\s+income",
                    r"income\s+per\s+capita",
                    r"per\s+capita\s+gdp",
                    r"gdp\s+per\s+capita",
                    r"average\s+income",
                ],
                &[r"per\s+capita"],
            )?,
            MetricDefinition::new(
                "poverty rate",
                &[
                    r"poverty\s+rate",
                    r"below\s+poverty\s+line",
                    r"bpl\s+(?:rate|percentage)",
                    r"rate\s+of\s+poverty",
                ],
                &[r"\bpoverty\b", r"\bbpl\b"],
            )?,
            MetricDefinition::new(
                "foreign exchange reserves",
                &[
                    r"forex\s+reserves?",
                    r"foreign\s+exchange\s+reserves?",
                    r"fx\s+reserves?",
                    r"foreign\s+reserves?",
                ],
                &[r"\bforex\b"],
            )?,
            MetricDefinition::new(
                "current account deficit",
                &[
                    r"current\s+account\s+deficit",
                    r"trade\s+deficit",
                    r"trade\s+gap",
                    r"\bcad\b",
                ],
                // "trade balance" could be a surplus too
                &[r"trade\s+balance"],
            )?,
        ])
    }

    /// Classify a claim against the registry.
    ///
    /// Pass 1 tests every definition's strong patterns in registry and
    /// pattern order, first match wins at confidence 0.9. Pass 2 repeats
    /// the traversal over weak patterns at 0.6. No scoring ties are
    /// broken by match length or position; order is the tie-break.
    pub fn classify(&self, text: &str) -> MetricMatch {
        let text_lower = text.to_lowercase();

        for def in &self.definitions {
            for pattern in &def.strong {
                if pattern.is_match(&text_lower) {
                    return MetricMatch::hit(&def.name, STRONG_CONFIDENCE);
                }
            }
        }

        for def in &self.definitions {
            for pattern in &def.weak {
                if pattern.is_match(&text_lower) {
                    return MetricMatch::hit(&def.name, WEAK_CONFIDENCE);
                }
            }
        }

        MetricMatch::none()
    }

    /// Ordered list of all known metric names, for capability discovery
    pub fn metric_names(&self) -> Vec<&str> {
        self.definitions.iter().map(|d| d.name.as_str()).collect()
    }

    /// Number of registered metrics
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
