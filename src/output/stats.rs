//! Crawl statistics collection and display
//!
//! This module provides functionality to accumulate per-site counters into
//! run-wide statistics and to report them through the log.

use crate::crawler::SiteCrawl;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Run-wide crawl statistics
#[derive(Debug, Clone, Serialize)]
pub struct CrawlStatistics {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub sites: usize,
    pub links_harvested: usize,
    pub pages_attempted: usize,
    pub pages_failed: usize,
    pub batches: usize,
    pub emails: usize,
    pub social_media: usize,
    pub phone_numbers: usize,
}

impl CrawlStatistics {
    /// Starts a new statistics record stamped with the current time
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            sites: 0,
            links_harvested: 0,
            pages_attempted: 0,
            pages_failed: 0,
            batches: 0,
            emails: 0,
            social_media: 0,
            phone_numbers: 0,
        }
    }

    /// Adds one site's counters
    pub fn record_site(&mut self, crawl: &SiteCrawl) {
        self.sites += 1;
        self.links_harvested += crawl.links_harvested;
        self.pages_attempted += crawl.pages_attempted;
        self.pages_failed += crawl.pages_failed;
        self.batches += crawl.batches;
        self.emails += crawl.signals.emails.len();
        self.social_media += crawl.signals.social_media.len();
        self.phone_numbers += crawl.signals.phone_numbers.len();
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Elapsed wall-clock seconds, once finished
    pub fn duration_seconds(&self) -> Option<f64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_milliseconds() as f64 / 1000.0)
    }

    /// Returns the share of attempted pages that rendered, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.pages_attempted == 0 {
            return 0.0;
        }
        let succeeded = self.pages_attempted - self.pages_failed;
        (succeeded as f64 / self.pages_attempted as f64) * 100.0
    }
}

/// Logs a statistics summary at info level
pub fn log_statistics(stats: &CrawlStatistics) {
    tracing::info!(
        "Crawled {} sites: {} pages ({} failed, {:.1}% success), {} links harvested, {} batches",
        stats.sites,
        stats.pages_attempted,
        stats.pages_failed,
        stats.success_rate(),
        stats.links_harvested,
        stats.batches
    );
    tracing::info!(
        "Signals found: {} emails, {} social profiles, {} phone numbers",
        stats.emails,
        stats.social_media,
        stats.phone_numbers
    );
    if let Some(seconds) = stats.duration_seconds() {
        tracing::info!("Elapsed: {:.1}s", seconds);
    }
}
