//! Scripted renderer for crawler tests

use crate::render::{PageSession, Renderer};
use crate::{RenderError, RenderResult};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub(crate) struct FakePage {
    pub html: String,
    pub anchors: Vec<String>,
}

impl FakePage {
    pub fn new(html: &str, anchors: &[&str]) -> Self {
        Self {
            html: html.to_string(),
            anchors: anchors.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[derive(Debug, Default)]
struct Tracking {
    in_flight: AtomicUsize,
    opened: AtomicUsize,
    closed: AtomicUsize,
    /// Every navigation with the number of pages in flight when it started
    navigations: Mutex<Vec<(String, usize)>>,
}

/// Renderer serving pages from a map, with injectable failures and hangs
#[derive(Debug, Default, Clone)]
pub(crate) struct FakeRenderer {
    pages: HashMap<String, FakePage>,
    failing: HashSet<String>,
    hanging: HashSet<String>,
    tracking: Arc<Tracking>,
}

impl FakeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, page: FakePage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }

    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    pub fn hanging(mut self, url: &str) -> Self {
        self.hanging.insert(url.to_string());
        self
    }

    pub fn navigations(&self) -> Vec<(String, usize)> {
        self.tracking.navigations.lock().unwrap().clone()
    }

    pub fn navigated_urls(&self) -> Vec<String> {
        self.navigations().into_iter().map(|(url, _)| url).collect()
    }

    pub fn opened(&self) -> usize {
        self.tracking.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.tracking.closed.load(Ordering::SeqCst)
    }

    /// Sizes of the groups of navigations that overlapped in time
    ///
    /// A new group starts whenever a navigation begins with nothing else in flight.
    pub fn concurrent_groups(&self) -> Vec<usize> {
        let mut groups = Vec::new();
        for (_, in_flight) in self.navigations() {
            if in_flight == 1 || groups.is_empty() {
                groups.push(1);
            } else if let Some(last) = groups.last_mut() {
                *last += 1;
            }
        }
        groups
    }
}

#[async_trait]
impl Renderer for FakeRenderer {
    async fn open_page(&self) -> RenderResult<Box<dyn PageSession>> {
        self.tracking.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeSession {
            renderer: self.clone(),
            current: None,
            counted: false,
        }))
    }
}

struct FakeSession {
    renderer: FakeRenderer,
    current: Option<FakePage>,
    counted: bool,
}

#[async_trait]
impl PageSession for FakeSession {
    async fn navigate(&mut self, url: &str) -> RenderResult<()> {
        let tracking = &self.renderer.tracking;
        let in_flight = tracking.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.counted = true;
        tracking
            .navigations
            .lock()
            .unwrap()
            .push((url.to_string(), in_flight));

        // Let sibling pages in the same batch start before this one finishes
        tokio::task::yield_now().await;

        if self.renderer.hanging.contains(url) {
            std::future::pending::<()>().await;
        }

        if self.renderer.failing.contains(url) {
            return Err(RenderError::Status {
                url: url.to_string(),
                status: 500,
            });
        }

        self.current = Some(self.renderer.pages.get(url).cloned().unwrap_or_default());
        Ok(())
    }

    async fn rendered_html(&mut self) -> RenderResult<String> {
        self.current
            .as_ref()
            .map(|page| page.html.clone())
            .ok_or(RenderError::NotNavigated)
    }

    async fn anchor_hrefs(&mut self) -> RenderResult<Vec<String>> {
        self.current
            .as_ref()
            .map(|page| page.anchors.clone())
            .ok_or(RenderError::NotNavigated)
    }

    async fn close(&mut self) -> RenderResult<()> {
        if self.counted {
            self.renderer.tracking.in_flight.fetch_sub(1, Ordering::SeqCst);
            self.counted = false;
        }
        self.renderer.tracking.closed.fetch_add(1, Ordering::SeqCst);
        self.current = None;
        Ok(())
    }
}
