//! HTTP renderer implementation
//!
//! This module renders pages by fetching them over HTTP, including:
//! - Building HTTP clients with proper user agent strings
//! - GET requests with redirect following
//! - Status and Content-Type checks
//! - Anchor href resolution against the final page URL

use crate::config::{RendererConfig, UserAgentConfig};
use crate::render::{PageSession, Renderer};
use crate::{RenderError, RenderResult};
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use scraper::{Html, Selector};
use std::time::Duration;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use contact_harvester::config::UserAgentConfig;
/// use contact_harvester::render::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.header_value())
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Renderer that loads server-rendered HTML over HTTP
///
/// Every page session shares the renderer's connection pool.
#[derive(Debug, Clone)]
pub struct HttpRenderer {
    client: Client,
    options: RendererConfig,
}

impl HttpRenderer {
    /// Starts the renderer
    ///
    /// # Returns
    ///
    /// * `Ok(HttpRenderer)` - Renderer ready to open pages
    /// * `Err(RenderError::Launch)` - The HTTP client could not be built
    pub fn launch(options: &RendererConfig, user_agent: &UserAgentConfig) -> RenderResult<Self> {
        let client =
            build_http_client(user_agent).map_err(|e| RenderError::Launch(e.to_string()))?;

        tracing::debug!(
            "HTTP renderer launched (headless: {}, viewport: {}x{})",
            options.headless,
            options.viewport_width,
            options.viewport_height
        );

        Ok(Self {
            client,
            options: options.clone(),
        })
    }

    /// Launch options this renderer was started with
    pub fn options(&self) -> &RendererConfig {
        &self.options
    }
}

#[async_trait]
impl Renderer for HttpRenderer {
    async fn open_page(&self) -> RenderResult<Box<dyn PageSession>> {
        Ok(Box::new(HttpPageSession {
            client: self.client.clone(),
            page: None,
        }))
    }
}

/// A page loaded by an [`HttpPageSession`]
#[derive(Debug)]
struct LoadedPage {
    /// Final URL after redirects
    final_url: Url,
    body: String,
}

/// Page session backed by a single GET request per navigation
struct HttpPageSession {
    client: Client,
    page: Option<LoadedPage>,
}

impl HttpPageSession {
    fn loaded(&self) -> RenderResult<&LoadedPage> {
        self.page.as_ref().ok_or(RenderError::NotNavigated)
    }
}

#[async_trait]
impl PageSession for HttpPageSession {
    async fn navigate(&mut self, url: &str) -> RenderResult<()> {
        let http_error = |source| RenderError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RenderError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // A missing Content-Type is treated as HTML
        if let Some(content_type) = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !is_html_content_type(content_type) {
                return Err(RenderError::ContentMismatch {
                    url: url.to_string(),
                    content_type: content_type.to_string(),
                });
            }
        }

        let final_url = response.url().clone();
        let body = response.text().await.map_err(http_error)?;

        tracing::trace!("Loaded {} ({} bytes)", final_url, body.len());
        self.page = Some(LoadedPage { final_url, body });
        Ok(())
    }

    async fn wait_until_ready(&mut self, _settle_delay: Duration) -> RenderResult<()> {
        // The document is complete once the body has been received
        self.loaded().map(|_| ())
    }

    async fn rendered_html(&mut self) -> RenderResult<String> {
        Ok(self.loaded()?.body.clone())
    }

    async fn anchor_hrefs(&mut self) -> RenderResult<Vec<String>> {
        let page = self.loaded()?;
        Ok(collect_anchor_hrefs(&page.body, &page.final_url))
    }

    async fn close(&mut self) -> RenderResult<()> {
        self.page = None;
        Ok(())
    }
}

fn is_html_content_type(content_type: &str) -> bool {
    let content_type = content_type.to_ascii_lowercase();
    content_type.contains("text/html") || content_type.contains("application/xhtml+xml")
}

/// Collects every anchor's href, resolved against `page_url`
///
/// Mirrors a DOM's `a.href`: relative references become absolute, and an
/// href that cannot be resolved is reported as written.
fn collect_anchor_hrefs(html: &str, page_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(|href| match page_url.join(href) {
            Ok(resolved) => resolved.to_string(),
            Err(_) => href.to_string(),
        })
        .collect()
}
