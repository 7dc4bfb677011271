// Page fetcher trait: the only seam between the analysis core and the network.
//
// The core only needs "give me the visible text for this source id". How the
// text is obtained (HTTP + HTML parsing, a fixture map, a file) stays behind
// this trait.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

/// Something that can turn a source id (usually a URL) into plain body text.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the visible text for a single source.
    async fn fetch_text(&self, source_id: &str) -> Result<String>;
}

/// In-memory fetcher that serves fixed text per source id.
///
/// Used in tests and for offline runs. Unknown ids are an error, the same way
/// a 404 would be for the HTTP fetcher.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the text served for `source_id`.
    pub fn with_page(mut self, source_id: impl Into<String>, text: impl Into<String>) -> Self {
        self.pages.insert(source_id.into(), text.into());
        self
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch_text(&self, source_id: &str) -> Result<String> {
        match self.pages.get(source_id) {
            Some(text) => Ok(text.clone()),
            None => anyhow::bail!("No page registered for {source_id}"),
        }
    }
}
