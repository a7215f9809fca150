use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Contact Harvester
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub renderer: RendererConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default, rename = "site")]
    pub sites: Vec<SiteEntry>,
}

impl Config {
    /// Returns the configured site base URLs in crawl order
    pub fn site_urls(&self) -> Vec<String> {
        self.sites.iter().map(|s| s.url.clone()).collect()
    }
}

/// Crawler pacing and batching configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Number of linked pages rendered concurrently per batch
    #[serde(rename = "batch-size")]
    pub batch_size: usize,

    /// Fallback wait after navigation when a session has no readiness signal (milliseconds)
    #[serde(rename = "settle-delay")]
    pub settle_delay: u64,

    /// Pause between batches of the same site (milliseconds)
    #[serde(rename = "batch-delay")]
    pub batch_delay: u64,

    /// Pause between sites (milliseconds)
    #[serde(rename = "site-delay")]
    pub site_delay: u64,

    /// Upper bound for a single navigation (milliseconds)
    #[serde(rename = "navigation-timeout")]
    pub navigation_timeout: u64,

    /// Whether the entry page's own signals count toward the site result
    #[serde(rename = "include-entry-page")]
    pub include_entry_page: bool,
}

impl CrawlerConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay)
    }

    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay)
    }

    pub fn site_delay(&self) -> Duration {
        Duration::from_millis(self.site_delay)
    }

    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_millis(self.navigation_timeout)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            batch_size: 5,
            settle_delay: 5000,
            batch_delay: 1000,
            site_delay: 2000,
            navigation_timeout: 30_000,
            include_entry_page: true,
        }
    }
}

/// Renderer launch options
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Run without a visible window
    pub headless: bool,

    #[serde(rename = "viewport-width")]
    pub viewport_width: u32,

    #[serde(rename = "viewport-height")]
    pub viewport_height: u32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1920,
            viewport_height: 1080,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl UserAgentConfig {
    /// Formats the User-Agent header: `Name/Version (+ContactURL; ContactEmail)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{}; {})",
            self.crawler_name, self.crawler_version, self.contact_url, self.contact_email
        )
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "ContactHarvester".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/about".to_string(),
            contact_email: "admin@example.com".to_string(),
        }
    }
}

/// Result output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// File to write results to; stdout when absent
    pub path: Option<String>,
}

/// One target site
#[derive(Debug, Clone, Deserialize)]
pub struct SiteEntry {
    /// Base URL of the site, e.g. "https://example.com/"
    pub url: String,
}
