//! Numeric value extraction module
//!
//! Finds the claimed numeric value in a claim, prioritizing
//! percentage-tagged numbers over plain ones and normalizing both
//! Western (100,000) and South-Asian (1,72,000) grouping separators.

use regex::Regex;

use claimlens_core::{ClaimError, Result};

/// Extracts the numeric value from claim text.
///
/// Patterns are compiled once and the extractor is read-only afterwards.
#[derive(Debug)]
pub struct ValueExtractor {
    /// Signed decimal followed by %, "percent", or "per cent"
    percentage: Regex,
    /// Any signed decimal with optional comma grouping
    number: Regex,
    /// Exactly four digits starting "19" or "20", after comma stripping
    year_shaped: Regex,
}

impl ValueExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            percentage: compile(r"(-?\d+(?:,\d+)*(?:\.\d+)?)\s*(?:%|percent|per\s*cent)")?,
            number: compile(r"-?\d+(?:,\d+)*(?:\.\d+)?")?,
            year_shaped: compile(r"^(?:19|20)\d{2}$")?,
        })
    }

    /// Extract the claimed value, or `None` if no numeric token exists.
    ///
    /// Step 1: the first percentage-tagged number anywhere in the text
    /// wins, even if a plain number appears earlier. Step 2: among the
    /// standalone numeric tokens, the first whose comma-stripped form is
    /// not year-shaped wins; if every candidate is year-shaped, the first
    /// candidate is returned as a best effort.
    pub fn extract(&self, text: &str) -> Result<Option<f64>> {
        let text_lower = text.to_lowercase();

        if let Some(caps) = self.percentage.captures(&text_lower) {
            return parse_number(&caps[1]).map(Some);
        }

        let candidates = self.standalone_numbers(text);
        if candidates.is_empty() {
            return Ok(None);
        }

        for token in &candidates {
            if !self.year_shaped.is_match(&token.replace(',', "")) {
                return parse_number(token).map(Some);
            }
        }

        parse_number(candidates[0]).map(Some)
    }

    /// Standalone numeric tokens in reading order.
    ///
    /// Greedy repetition guarantees no match ends adjacent to a digit.
    /// A leading minus glued to a preceding digit ("12-34") is a range
    /// separator, not a sign, and is dropped from the token.
    fn standalone_numbers<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let bytes = text.as_bytes();
        self.number
            .find_iter(text)
            .map(|m| {
                let token = m.as_str();
                if token.starts_with('-')
                    && m.start() > 0
                    && bytes[m.start() - 1].is_ascii_digit()
                {
                    &token[1..]
                } else {
                    token
                }
            })
            .collect()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| ClaimError::ConfigError(format!("invalid value pattern {pattern:?}: {e}")))
}

/// Parse a scanned token as a signed float after stripping grouping commas.
///
/// The scan pattern guarantees only digits, commas, a sign, and a decimal
/// point reach this point; a parse failure is a scan/parse contract
/// mismatch and is surfaced, never coerced.
fn parse_number(raw: &str) -> Result<f64> {
    let cleaned = raw.replace(',', "");
    cleaned.parse().map_err(|_| ClaimError::NumericParse {
        token: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ValueExtractor {
        ValueExtractor::new().unwrap()
    }

    #[test]
    fn test_percentage_symbol() {
        assert_eq!(extractor().extract("growth was 7.5% this year").unwrap(), Some(7.5));
    }

    #[test]
    fn test_percent_word() {
        assert_eq!(
            extractor().extract("deficit was -3.4 percent of GDP").unwrap(),
            Some(-3.4)
        );
    }

    #[test]
    fn test_per_cent_with_space() {
        assert_eq!(extractor().extract("rose by 4.1 per cent").unwrap(), Some(4.1));
    }

    #[test]
    fn test_percentage_wins_over_earlier_plain_number() {
        // 500 appears first but 8% carries the claim
        assert_eq!(
            extractor().extract("500 districts saw unemployment of 8%").unwrap(),
            Some(8.0)
        );
    }

    #[test]
    fn test_first_percentage_wins() {
        assert_eq!(
            extractor().extract("GDP grew from 6% in 2023 to 7.5% in 2024").unwrap(),
            Some(6.0)
        );
    }

    #[test]
    fn test_plain_number_skips_year_shaped() {
        assert_eq!(
            extractor().extract("Population reached 1.4 billion in 2025").unwrap(),
            Some(1.4)
        );
    }

    #[test]
    fn test_western_grouping() {
        assert_eq!(
            extractor().extract("reserves stood at 100,000 crore").unwrap(),
            Some(100000.0)
        );
    }

    #[test]
    fn test_south_asian_grouping() {
        assert_eq!(
            extractor().extract("Per capita income is 1,72,000 in 2024").unwrap(),
            Some(172000.0)
        );
    }

    #[test]
    fn test_all_candidates_year_shaped_returns_first() {
        assert_eq!(
            extractor().extract("between 2019 and 2024").unwrap(),
            Some(2019.0)
        );
    }

    #[test]
    fn test_no_number() {
        assert_eq!(extractor().extract("Hello world").unwrap(), None);
    }

    #[test]
    fn test_negative_plain_number() {
        assert_eq!(
            extractor().extract("the balance fell to -250 million").unwrap(),
            Some(-250.0)
        );
    }

    #[test]
    fn test_minus_after_digit_is_not_a_sign() {
        // "12-34" is a range, not twelve and negative thirty-four
        let ex = extractor();
        assert_eq!(ex.standalone_numbers("spanning 12-34 districts"), vec!["12", "34"]);
    }

    #[test]
    fn test_digits_inside_longer_run_not_split() {
        // A 6-digit code is one token, not a year plus change
        let ex = extractor();
        assert_eq!(ex.standalone_numbers("ref 202400 filed"), vec!["202400"]);
    }
}
