//! Crawler module for the crawl-and-extract pipeline
//!
//! This module contains the core crawling logic, including:
//! - Same-site link harvesting from a site's entry page
//! - Single-page render and extraction with isolated failures
//! - Batched, rate-limited site crawling
//! - Overall crawl coordination across sites

mod coordinator;
mod links;
mod page;
mod site;

pub use coordinator::{run_crawl, Coordinator, CrawlReport, CrawlResults};
pub use links::harvest_links;
pub use page::{process_page, render_page, PageOutcome, RenderedPage};
pub use site::{crawl_site, plan_batches, SiteCrawl};

use crate::config::Config;
use crate::HarvestError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Launch the shared renderer
/// 2. Visit every configured site in order
/// 3. Harvest each entry page's links and process them in batches
/// 4. Return the per-site results with run statistics
pub async fn crawl(config: &Config) -> Result<CrawlReport, HarvestError> {
    run_crawl(config).await
}
