//! Contact signal extraction
//!
//! Pure, pattern-based extractors that turn rendered HTML and a page's
//! anchor hrefs into contact signals:
//! - email addresses found anywhere in the markup
//! - North-American phone numbers, kept verbatim
//! - social-media profile links, categorized by platform
//!
//! The extractors are total over arbitrary text: malformed markup simply
//! produces fewer matches.

mod email;
mod phone;
mod social;

pub use email::{extract_emails, is_valid_email};
pub use phone::extract_phone_numbers;
pub use social::{extract_social_media, SocialPlatform, SOCIAL_PLATFORMS};

use serde::Serialize;
use std::collections::BTreeSet;

/// Contact signals extracted from one page, or aggregated across a site
///
/// Entries are deduplicated by exact, case-sensitive string equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactSignals {
    pub emails: BTreeSet<String>,
    /// Entries formatted as `"<Platform>: <URL>"`
    pub social_media: BTreeSet<String>,
    pub phone_numbers: BTreeSet<String>,
}

impl ContactSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unions another signal set into this one
    pub fn merge(&mut self, other: ContactSignals) {
        self.emails.extend(other.emails);
        self.social_media.extend(other.social_media);
        self.phone_numbers.extend(other.phone_numbers);
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.social_media.is_empty() && self.phone_numbers.is_empty()
    }

    /// Total number of entries across all three sets
    pub fn len(&self) -> usize {
        self.emails.len() + self.social_media.len() + self.phone_numbers.len()
    }
}

/// Extracts every contact signal from a rendered page
///
/// # Arguments
///
/// * `html` - The fully rendered HTML text of the page
/// * `anchor_hrefs` - The href of every anchor element on the page
///
/// # Example
///
/// ```
/// use contact_harvester::extract_signals;
///
/// let html = r#"<p>Call 555-123-4567 or write contact@biz.com</p>"#;
/// let anchors = vec!["https://facebook.com/biz".to_string()];
/// let signals = extract_signals(html, &anchors);
///
/// assert!(signals.emails.contains("contact@biz.com"));
/// assert!(signals.phone_numbers.contains("555-123-4567"));
/// assert!(signals.social_media.contains("Facebook: https://facebook.com/biz"));
/// ```
pub fn extract_signals(html: &str, anchor_hrefs: &[String]) -> ContactSignals {
    ContactSignals {
        emails: extract_emails(html),
        social_media: extract_social_media(anchor_hrefs),
        phone_numbers: extract_phone_numbers(html),
    }
}
