//! Crawler coordinator - drives the site list
//!
//! This module contains the outer crawl loop, including:
//! - Launching the shared renderer once per run
//! - Visiting sites strictly in input order
//! - Pausing between sites
//! - Assembling the per-site result mapping and run statistics

use crate::config::{Config, CrawlerConfig};
use crate::crawler::site::crawl_site;
use crate::extract::ContactSignals;
use crate::output::{log_statistics, CrawlStatistics};
use crate::render::{HttpRenderer, Renderer};
use crate::HarvestError;

/// Ordered mapping from site base URL to its aggregated signals
///
/// Iteration follows crawl (input) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlResults {
    entries: Vec<(String, ContactSignals)>,
}

impl CrawlResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the result for `site`
    pub fn insert(&mut self, site: impl Into<String>, signals: ContactSignals) {
        let site = site.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == site) {
            Some((_, current)) => *current = signals,
            None => self.entries.push((site, signals)),
        }
    }

    pub fn get(&self, site: &str) -> Option<&ContactSignals> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == site)
            .map(|(_, signals)| signals)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContactSignals)> {
        self.entries
            .iter()
            .map(|(site, signals)| (site.as_str(), signals))
    }

    pub fn sites(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(site, _)| site.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything a run produces
#[derive(Debug, Clone)]
pub struct CrawlReport {
    pub results: CrawlResults,
    pub statistics: CrawlStatistics,
}

/// Main crawler coordinator structure
///
/// Holds the shared renderer by reference; every page operation opens its
/// own session from it.
pub struct Coordinator<'a> {
    renderer: &'a dyn Renderer,
    config: &'a CrawlerConfig,
}

impl<'a> Coordinator<'a> {
    pub fn new(renderer: &'a dyn Renderer, config: &'a CrawlerConfig) -> Self {
        Self { renderer, config }
    }

    /// Crawls every site in order
    ///
    /// Page-level failures are absorbed by the site crawl, so this never
    /// fails; every site appears in the results, possibly empty.
    pub async fn run(&self, sites: &[String]) -> CrawlReport {
        let mut results = CrawlResults::new();
        let mut statistics = CrawlStatistics::start();

        for (index, site) in sites.iter().enumerate() {
            tracing::info!("Processing: {}", site);

            let crawl = crawl_site(self.renderer, site, self.config).await;
            statistics.record_site(&crawl);
            results.insert(site.clone(), crawl.signals);

            if index + 1 < sites.len() {
                tokio::time::sleep(self.config.site_delay()).await;
            }
        }

        statistics.finish();
        log_statistics(&statistics);

        CrawlReport {
            results,
            statistics,
        }
    }
}

/// Runs a complete crawl with the HTTP renderer
///
/// The renderer is launched once for the whole run; a launch failure is
/// the only error and aborts the run.
///
/// # Example
///
/// ```no_run
/// use contact_harvester::config::load_config;
/// use contact_harvester::crawler::run_crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("contacts.toml"))?;
/// let report = run_crawl(&config).await?;
/// println!("{} sites crawled", report.results.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config) -> Result<CrawlReport, HarvestError> {
    let renderer = HttpRenderer::launch(&config.renderer, &config.user_agent)?;
    let coordinator = Coordinator::new(&renderer, &config.crawler);
    Ok(coordinator.run(&config.site_urls()).await)
}
