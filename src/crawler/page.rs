//! Single-page processing
//!
//! Renders one page through a fresh renderer session and extracts its
//! contact signals. Failures never escape: they are logged and returned as
//! [`PageOutcome::Failed`], so one bad page cannot abort its batch.

use crate::config::CrawlerConfig;
use crate::extract::{extract_signals, ContactSignals};
use crate::render::{PageSession, Renderer};
use crate::{RenderError, RenderResult};

/// Content read from a rendered page
#[derive(Debug, Clone, Default)]
pub struct RenderedPage {
    pub html: String,
    pub anchors: Vec<String>,
}

/// Result of processing one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page rendered and its signals were extracted
    Extracted { url: String, signals: ContactSignals },

    /// The page could not be rendered; contributes no signals
    Failed { url: String, reason: String },
}

impl PageOutcome {
    pub fn url(&self) -> &str {
        match self {
            Self::Extracted { url, .. } | Self::Failed { url, .. } => url,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Signals of the page; empty for a failed page
    pub fn into_signals(self) -> ContactSignals {
        match self {
            Self::Extracted { signals, .. } => signals,
            Self::Failed { .. } => ContactSignals::default(),
        }
    }
}

/// Renders `url` in its own session and reads its HTML and anchors
///
/// Navigation plus the readiness wait are bounded by the configured
/// navigation timeout. The session is closed on every path once opened.
pub async fn render_page(
    renderer: &dyn Renderer,
    url: &str,
    config: &CrawlerConfig,
) -> RenderResult<RenderedPage> {
    let mut session = renderer.open_page().await?;

    let result = load_page(session.as_mut(), url, config).await;

    if let Err(e) = session.close().await {
        tracing::warn!("Failed to close page session for {}: {}", url, e);
    }

    result
}

async fn load_page(
    session: &mut dyn PageSession,
    url: &str,
    config: &CrawlerConfig,
) -> RenderResult<RenderedPage> {
    let settle_delay = config.settle_delay();
    let navigation = async {
        session.navigate(url).await?;
        session.wait_until_ready(settle_delay).await
    };

    tokio::time::timeout(config.navigation_timeout(), navigation)
        .await
        .map_err(|_| RenderError::Timeout {
            url: url.to_string(),
            timeout_ms: config.navigation_timeout,
        })??;

    let html = session.rendered_html().await?;
    let anchors = session.anchor_hrefs().await?;

    Ok(RenderedPage { html, anchors })
}

/// Processes one page: render, then extract its contact signals
///
/// Never fails. A render error is logged as `Error processing <url>: <reason>`
/// and reported as [`PageOutcome::Failed`].
pub async fn process_page(
    renderer: &dyn Renderer,
    url: &str,
    config: &CrawlerConfig,
) -> PageOutcome {
    match render_page(renderer, url, config).await {
        Ok(page) => {
            let signals = extract_signals(&page.html, &page.anchors);
            tracing::debug!("Extracted {} signals from {}", signals.len(), url);
            PageOutcome::Extracted {
                url: url.to_string(),
                signals,
            }
        }
        Err(e) => {
            tracing::error!("Error processing {}: {}", url, e);
            PageOutcome::Failed {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    }
}
