//! Normalization rules for raw filter input.
//!
//! These rules are part of the matching contract, not incidental plumbing:
//! the search endpoint never rejects a bad filter value, it normalizes it to
//! "unconstrained" and carries on. Each helper here maps one class of raw
//! query-parameter text onto the value the filter engine expects.

use std::str::FromStr;

/// Strings accepted as "true" by [`truthy`], compared case-insensitively
/// after trimming.
const TRUTHY_VALUES: [&str; 4] = ["1", "true", "yes", "on"];

/// Parse a numeric parameter, mapping absent or unparsable input to the
/// type's zero value (which the engine reads as "unconstrained").
///
/// Input is not trimmed first, so `" 5"` fails to parse and becomes 0.
/// Negative input fails unsigned parsing and becomes 0 as well.
pub fn parse_number<T: FromStr + Default>(raw: &str) -> T {
    raw.parse().unwrap_or_default()
}

/// Parse a boolean flag parameter.
///
/// `"1"`, `"true"`, `"yes"`, and `"on"` (case-insensitive, trimmed) are
/// true; everything else, including the empty string, is false.
pub fn truthy(raw: &str) -> bool {
    let lowered = raw.trim().to_lowercase();
    TRUTHY_VALUES.contains(&lowered.as_str())
}

/// Split a comma-separated list parameter into trimmed, non-empty elements.
///
/// An empty result means the parameter is unconstrained.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drop later case-insensitive duplicates, preserving the first-seen
/// original casing and the overall order.
pub fn dedup_case_insensitive(values: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values
        .into_iter()
        .filter(|value| {
            let key = value.trim().to_lowercase();
            !key.is_empty() && seen.insert(key)
        })
        .collect()
}

/// Keep only ASCII letters, truncated to `max_len` characters. Any other
/// characters are silently dropped, never rejected.
pub fn sanitize_alpha(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .take(max_len)
        .collect()
}

/// Keep only ASCII digits, truncated to `max_len` characters.
pub fn sanitize_digits(raw: &str, max_len: usize) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(max_len)
        .collect()
}

/// Canonical form of a tag for matching: trimmed and lowercased.
pub fn normalize_tag(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_maps_bad_input_to_zero() {
        assert_eq!(parse_number::<u64>(""), 0);
        assert_eq!(parse_number::<u64>("abc"), 0);
        assert_eq!(parse_number::<u64>("12abc"), 0);
        assert_eq!(parse_number::<u64>(" 5"), 0);
        assert_eq!(parse_number::<u32>("3.5"), 0);
        assert_eq!(parse_number::<u32>("-5"), 0);
        assert_eq!(parse_number::<u64>("450000"), 450000);
        assert_eq!(parse_number::<u32>("+3"), 3);
    }

    #[test]
    fn parse_number_handles_floats() {
        assert_eq!(parse_number::<f64>("2.5"), 2.5);
        assert_eq!(parse_number::<f64>("abc"), 0.0);
        assert_eq!(parse_number::<f64>(""), 0.0);
        // Negative floats parse; the engine's `> 0` guards treat them as unset.
        assert_eq!(parse_number::<f64>("-1.5"), -1.5);
    }

    #[test]
    fn truthy_accepts_the_enumerated_set() {
        for raw in ["1", "true", "TRUE", "yes", "Yes", "on", " ON "] {
            assert!(truthy(raw), "{raw:?} should be truthy");
        }
        for raw in ["", "0", "false", "no", "off", "banana", "2"] {
            assert!(!truthy(raw), "{raw:?} should be falsy");
        }
    }

    #[test]
    fn split_list_trims_and_drops_empties() {
        assert_eq!(split_list(" a, b ,,c "), vec!["a", "b", "c"]);
        assert_eq!(split_list(""), Vec::<String>::new());
        assert_eq!(split_list(",, ,"), Vec::<String>::new());
        assert_eq!(split_list("rv parking"), vec!["rv parking"]);
    }

    #[test]
    fn dedup_keeps_first_seen_casing() {
        let merged = dedup_case_insensitive(vec![
            "Condo".to_string(),
            "condo".to_string(),
            "Townhouse".to_string(),
            "CONDO".to_string(),
        ]);
        assert_eq!(merged, vec!["Condo", "Townhouse"]);
    }

    #[test]
    fn sanitize_alpha_strips_and_truncates() {
        assert_eq!(sanitize_alpha("WA", 2), "WA");
        assert_eq!(sanitize_alpha("wa5sh", 2), "wa");
        assert_eq!(sanitize_alpha("W!A9", 2), "WA");
        assert_eq!(sanitize_alpha("", 2), "");
        assert_eq!(sanitize_alpha("oregon", 2), "or");
    }

    #[test]
    fn sanitize_digits_strips_and_truncates() {
        assert_eq!(sanitize_digits("98101", 10), "98101");
        assert_eq!(sanitize_digits("98101-1234", 10), "981011234");
        assert_eq!(sanitize_digits("zip98", 10), "98");
        assert_eq!(sanitize_digits("12345678901234", 10), "1234567890");
    }

    #[test]
    fn normalize_tag_trims_and_lowercases() {
        assert_eq!(normalize_tag("  RV Parking "), "rv parking");
        assert_eq!(normalize_tag("LOFT"), "loft");
        assert_eq!(normalize_tag("   "), "");
    }
}
