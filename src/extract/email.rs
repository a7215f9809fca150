use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Broad candidate pattern, applied over raw markup
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern is valid")
});

/// Whole-string shape check applied to every candidate
static VALID_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("validator pattern is valid"));

/// Returns true if `email` has a single `@`, no whitespace, and a dotted domain
pub fn is_valid_email(email: &str) -> bool {
    VALID_EMAIL_REGEX.is_match(email)
}

/// Extracts every email address in `html` that also passes [`is_valid_email`]
pub fn extract_emails(html: &str) -> BTreeSet<String> {
    EMAIL_REGEX
        .find_iter(html)
        .map(|m| m.as_str())
        .filter(|candidate| is_valid_email(candidate))
        .map(str::to_string)
        .collect()
}
