// HTTP page fetcher.
//
// Downloads a page with reqwest and pulls the visible text out of <body> with
// scraper. Text inside <script>, <style> and <noscript> is skipped. A page
// without a <body> element is an error.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

use super::traits::PageFetcher;

/// Default request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Elements whose text never shows up on the rendered page.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Fetches pages over HTTP and returns the text of their body.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the given user agent and per-request timeout.
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_text(&self, source_id: &str) -> Result<String> {
        debug!(url = source_id, "GET page");

        let response = self
            .client
            .get(source_id)
            .send()
            .await
            .with_context(|| format!("Request failed: {source_id}"))?;

        if !response.status().is_success() {
            let status = response.status();
            anyhow::bail!("{source_id} returned {status}");
        }

        let html = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {source_id}"))?;

        body_text(&html)
    }
}

/// Extract the visible text of the `<body>` element from an HTML document.
///
/// Text nodes are joined with single spaces so adjacent block elements never
/// glue two words together.
pub fn body_text(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse("body").map_err(|e| anyhow::anyhow!("Invalid body selector: {e:?}"))?;

    let body = document
        .select(&selector)
        .next()
        .context("Can't load the body of the document")?;

    let mut parts = Vec::new();
    collect_visible_text(body, &mut parts);
    Ok(parts.join(" "))
}

fn collect_visible_text<'a>(element: ElementRef<'a>, parts: &mut Vec<&'a str>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    parts.push(trimmed);
                }
            }
            Node::Element(el) if HIDDEN_ELEMENTS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_visible_text(child_el, parts);
                }
            }
            _ => {}
        }
    }
}
