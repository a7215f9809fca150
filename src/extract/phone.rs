use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

// Three shapes of leading part, each followed by `NNN` `NNNN` with optional
// `-`, `.` or whitespace separators:
//   +1 / 1 country code, then a plain or parenthesized area code
//   a parenthesized area code (no word boundary needed before `(`)
//   a plain area code starting at a word boundary
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:(?:\+|\b)1[-.\s]?(?:\([0-9]{3}\)|[0-9]{3})",
        r"|\([0-9]{3}\)",
        r"|\b[0-9]{3})",
        r"[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}\b",
    ))
    .expect("phone pattern is valid")
});

/// Extracts North-American phone numbers from `html`, verbatim
///
/// No normalization is applied: `555-123-4567` and `(555) 123-4567` are
/// distinct entries when both appear.
pub fn extract_phone_numbers(html: &str) -> BTreeSet<String> {
    PHONE_REGEX
        .find_iter(html)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phones(text: &str) -> Vec<String> {
        extract_phone_numbers(text).into_iter().collect()
    }

    #[test]
    fn test_dashed_number() {
        assert_eq!(phones("Call 555-123-4567 now"), vec!["555-123-4567"]);
    }

    #[test]
    fn test_parenthesized_area_code() {
        assert_eq!(phones("<p>(850) 555-0199</p>"), vec!["(850) 555-0199"]);
        assert_eq!(phones("x (850)555-0199"), vec!["(850)555-0199"]);
    }

    #[test]
    fn test_country_code_prefixes() {
        assert_eq!(phones("+1 407.555.0142"), vec!["+1 407.555.0142"]);
        assert_eq!(phones("1-800-555-0199"), vec!["1-800-555-0199"]);
        assert_eq!(phones("+1 (407) 555-0142"), vec!["+1 (407) 555-0142"]);
    }

    #[test]
    fn test_unseparated_digits() {
        assert_eq!(phones("tel:5551234567\""), vec!["5551234567"]);
        assert_eq!(phones("href=\"tel:+15551234567\""), vec!["+15551234567"]);
    }

    #[test]
    fn test_formats_are_not_normalized() {
        let found = extract_phone_numbers("555-123-4567 or (555) 123-4567 or 555-123-4567");
        assert_eq!(found.len(), 2);
        assert!(found.contains("555-123-4567"));
        assert!(found.contains("(555) 123-4567"));
    }

    #[test]
    fn test_rejects_non_phone_digit_runs() {
        assert!(phones("order #12345678901234").is_empty());
        assert!(phones("zip 32301, year 2024").is_empty());
        assert!(phones("555-1234").is_empty());
    }

    #[test]
    fn test_repeat_extraction_is_stable() {
        let html = "Front desk 407-555-0142, bar 407.555.0143";
        assert_eq!(extract_phone_numbers(html), extract_phone_numbers(html));
        assert_eq!(extract_phone_numbers(html).len(), 2);
    }
}
