//! Renderer adapter boundary
//!
//! The crawler never talks to a browser or HTTP client directly. It asks a
//! [`Renderer`] for an isolated [`PageSession`], drives that session through
//! navigate → wait for readiness → read content, and closes it.
//!
//! [`HttpRenderer`] is the shipped adapter: it renders server-side HTML over
//! HTTP and exposes the document's anchors the way a DOM does.

mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use http::{build_http_client, HttpRenderer};

use crate::RenderResult;
use async_trait::async_trait;
use std::time::Duration;

/// A shared rendering capability that hands out page sessions
///
/// One renderer is created per run and shared by every crawl call.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Opens a new, isolated page session
    async fn open_page(&self) -> RenderResult<Box<dyn PageSession>>;
}

/// One page/tab owned exclusively by a single page operation
#[async_trait]
pub trait PageSession: Send {
    /// Loads `url` into this session
    async fn navigate(&mut self, url: &str) -> RenderResult<()>;

    /// Waits until the loaded page has finished rendering
    ///
    /// Sessions with a readiness signal (network idle, DOM stable, a fully
    /// received document) override this. The default falls back to a fixed
    /// settle delay.
    async fn wait_until_ready(&mut self, settle_delay: Duration) -> RenderResult<()> {
        tokio::time::sleep(settle_delay).await;
        Ok(())
    }

    /// Returns the fully rendered HTML of the current page
    async fn rendered_html(&mut self) -> RenderResult<String>;

    /// Returns the resolved href of every anchor element on the current page
    async fn anchor_hrefs(&mut self) -> RenderResult<Vec<String>>;

    /// Releases the session
    async fn close(&mut self) -> RenderResult<()>;
}
