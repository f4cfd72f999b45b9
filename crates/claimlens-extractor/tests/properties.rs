//! Property tests for the extraction pipeline

use claimlens_extractor::ClaimExtractor;
use proptest::prelude::*;

fn pipeline() -> ClaimExtractor {
    ClaimExtractor::new().unwrap()
}

proptest! {
    /// Text with no digits can never yield a value or a year.
    #[test]
    fn digit_free_text_has_no_value_or_year(text in "[a-zA-Z ,.%-]{0,80}") {
        let result = pipeline().extract_all(&text).unwrap();
        prop_assert!(result.value.is_none());
        prop_assert!(result.year.is_none());
    }

    /// The pipeline is a pure function: identical input, identical output.
    #[test]
    fn extraction_is_idempotent(text in ".{0,120}") {
        let extractor = pipeline();
        let first = extractor.extract_all(&text).unwrap();
        let second = extractor.extract_all(&text).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Confidence stays within [0.0, 0.9] for any input.
    #[test]
    fn confidence_is_bounded(text in ".{0,120}") {
        let result = pipeline().extract_all(&text).unwrap();
        prop_assert!((0.0..=0.9).contains(&result.confidence));
    }

    /// Grouping separators are cosmetic: the parsed magnitude depends only
    /// on the digit sequence, not on where the commas sit.
    #[test]
    fn grouping_is_position_independent(digits in proptest::collection::vec(0u8..10, 5..9)) {
        let raw: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
        // Avoid year-shaped and zero-leading forms muddying the comparison
        prop_assume!(!raw.starts_with('0'));

        let western = format!("{},{}", &raw[..raw.len() - 3], &raw[raw.len() - 3..]);
        let south_asian = {
            // Group the head in pairs from the right, Indian style
            let (head, tail) = raw.split_at(raw.len() - 3);
            let mut parts: Vec<String> = Vec::new();
            let head_bytes = head.as_bytes();
            let mut i = head_bytes.len();
            while i > 2 {
                parts.push(String::from_utf8_lossy(&head_bytes[i - 2..i]).into_owned());
                i -= 2;
            }
            parts.push(String::from_utf8_lossy(&head_bytes[..i]).into_owned());
            parts.reverse();
            format!("{},{}", parts.join(","), tail)
        };

        let expected: f64 = raw.parse().unwrap();
        let extractor = pipeline();

        let from_western = extractor
            .extract_all(&format!("the figure was {western} overall"))
            .unwrap();
        let from_south_asian = extractor
            .extract_all(&format!("the figure was {south_asian} overall"))
            .unwrap();

        prop_assert_eq!(from_western.value, Some(expected));
        prop_assert_eq!(from_south_asian.value, Some(expected));
    }
}

#[test]
fn western_and_south_asian_forms_agree_on_reference_figures() {
    let extractor = pipeline();

    let western = extractor.extract_all("spending hit 100,000 this year").unwrap();
    assert_eq!(western.value, Some(100000.0));

    let south_asian = extractor.extract_all("income was 1,72,000 this year").unwrap();
    assert_eq!(south_asian.value, Some(172000.0));
}
