//! Same-site link harvesting
//!
//! Turns the anchors of a site's entry page into the list of pages to visit:
//! - absolute links under the site's base URL are kept as-is
//! - site-relative links (`/path`) are resolved against the base URL
//! - everything else (other domains, `mailto:`, protocol-relative) is dropped

use std::collections::HashSet;
use url::Url;

/// Harvests same-site links from a page's anchor hrefs
///
/// Links are deduplicated by exact string equality after resolution and
/// keep the order in which they first appear. There is no error path: an
/// unparseable base URL or an empty anchor list yields no links.
///
/// # Example
///
/// ```
/// use contact_harvester::crawler::harvest_links;
///
/// let anchors: Vec<String> = ["https://example.com/menu", "/about", "https://other.com/x", "/about"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// let links = harvest_links(&anchors, "https://example.com/");
/// assert_eq!(links, vec!["https://example.com/menu", "https://example.com/about"]);
/// ```
pub fn harvest_links(anchor_hrefs: &[String], base_url: &str) -> Vec<String> {
    let Ok(base) = Url::parse(base_url) else {
        tracing::debug!("Cannot harvest links: invalid base URL {}", base_url);
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for href in anchor_hrefs {
        let href = href.trim();

        let resolved = if is_under_base(href, base_url) {
            href.to_string()
        } else if is_site_relative(href) {
            match base.join(href) {
                Ok(url) => url.to_string(),
                Err(e) => {
                    tracing::trace!("Skipping unresolvable link {}: {}", href, e);
                    continue;
                }
            }
        } else {
            continue;
        };

        if seen.insert(resolved.clone()) {
            links.push(resolved);
        }
    }

    links
}

/// Returns true if `href` starts with `base_url` at a path boundary
///
/// `https://example.com` must not claim `https://example.com.evil.io/`.
fn is_under_base(href: &str, base_url: &str) -> bool {
    let Some(rest) = href.strip_prefix(base_url) else {
        return false;
    };

    base_url.ends_with('/')
        || rest.is_empty()
        || rest.starts_with('/')
        || rest.starts_with('?')
        || rest.starts_with('#')
}

/// `/path` is site-relative; `//host/path` is protocol-relative and is not
fn is_site_relative(href: &str) -> bool {
    href.starts_with('/') && !href.starts_with("//")
}
