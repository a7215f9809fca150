//! Site crawling: entry page, link harvest, then batched page processing

use crate::config::CrawlerConfig;
use crate::crawler::links::harvest_links;
use crate::crawler::page::{process_page, render_page, PageOutcome};
use crate::extract::{extract_signals, ContactSignals};
use crate::render::Renderer;
use futures::future::join_all;

/// Aggregated result of crawling one site
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteCrawl {
    /// The site's base URL
    pub site: String,

    /// Signals merged across every processed page
    pub signals: ContactSignals,

    /// Number of same-site links found on the entry page
    pub links_harvested: usize,

    /// Pages whose outcome was recorded
    ///
    /// The entry page counts when its signals are included or when it failed.
    pub pages_attempted: usize,

    /// Recorded pages that failed to render
    pub pages_failed: usize,

    /// Number of link batches processed
    pub batches: usize,

    /// URLs that failed, with their error
    pub failures: Vec<(String, String)>,
}

impl SiteCrawl {
    fn new(site: &str) -> Self {
        Self {
            site: site.to_string(),
            ..Self::default()
        }
    }

    /// Merges a page outcome; failures contribute no signals
    fn record(&mut self, outcome: PageOutcome) {
        self.pages_attempted += 1;
        if let PageOutcome::Failed { url, reason } = &outcome {
            self.pages_failed += 1;
            self.failures.push((url.clone(), reason.clone()));
        }
        self.signals.merge(outcome.into_signals());
    }
}

/// Splits harvested links into consecutive batches of `batch_size`
///
/// The final batch holds the remainder: 12 links at size 5 → 5, 5, 2.
pub fn plan_batches(links: &[String], batch_size: usize) -> Vec<&[String]> {
    links.chunks(batch_size.max(1)).collect()
}

/// Crawls one site
///
/// 1. Renders the entry page and harvests its same-site links
/// 2. Optionally extracts the entry page's own signals
/// 3. Processes the links in batches: pages within a batch run
///    concurrently, batches run strictly in sequence with the batch delay
///    between them
///
/// A failed entry page is logged and yields an empty result.
pub async fn crawl_site(renderer: &dyn Renderer, site: &str, config: &CrawlerConfig) -> SiteCrawl {
    let mut crawl = SiteCrawl::new(site);

    let entry = match render_page(renderer, site, config).await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Error processing {}: {}", site, e);
            crawl.record(PageOutcome::Failed {
                url: site.to_string(),
                reason: e.to_string(),
            });
            return crawl;
        }
    };

    let mut links = harvest_links(&entry.anchors, site);
    crawl.links_harvested = links.len();
    tracing::info!("Found {} same-site links on {}", links.len(), site);

    if config.include_entry_page {
        crawl.record(PageOutcome::Extracted {
            url: site.to_string(),
            signals: extract_signals(&entry.html, &entry.anchors),
        });
        // Already extracted above
        links.retain(|link| link != site);
    }

    let batches = plan_batches(&links, config.batch_size);
    let total = batches.len();

    for (index, batch) in batches.into_iter().enumerate() {
        tracing::debug!(
            "Batch {}/{} for {}: {} pages",
            index + 1,
            total,
            site,
            batch.len()
        );

        let outcomes = join_all(
            batch
                .iter()
                .map(|link| process_page(renderer, link, config)),
        )
        .await;

        for outcome in outcomes {
            crawl.record(outcome);
        }
        crawl.batches += 1;

        if index + 1 < total {
            tokio::time::sleep(config.batch_delay()).await;
        }
    }

    tracing::info!(
        "Finished {}: {} pages, {} failed, {} signals",
        site,
        crawl.pages_attempted,
        crawl.pages_failed,
        crawl.signals.len()
    );

    crawl
}
