// Document: one fetched source, tokenized and counted.
//
// A Document is built once and never changes afterwards. Construction does
// the only I/O in the pipeline: exactly one call to the page fetcher.

use tracing::{debug, info};

use crate::error::{AnalysisError, Result};
use crate::fetch::traits::PageFetcher;
use crate::text::frequency::{self, WordCounts};
use crate::text::tokenizer;

/// A single analysed source.
///
/// Invariant: `total_words == tokens.len() == word_counts.values().sum()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    source_id: String,
    raw_text: String,
    tokens: Vec<String>,
    word_counts: WordCounts,
    total_words: usize,
}

impl Document {
    /// Fetch `source_id` through `fetcher` and build a document from the text.
    ///
    /// Fetch failures are wrapped in `AnalysisError::Fetch` together with the
    /// source id. Blank text is rejected as `EmptyBody` before tokenizing.
    pub async fn fetch(source_id: &str, fetcher: &dyn PageFetcher) -> Result<Self> {
        let text = fetcher
            .fetch_text(source_id)
            .await
            .map_err(|source| AnalysisError::Fetch {
                source_id: source_id.to_string(),
                source: source.into(),
            })?;

        debug!(source_id, bytes = text.len(), "Fetched page text");

        Self::from_text(source_id, text)
    }

    /// Build a document from text that is already in hand.
    pub fn from_text(source_id: impl Into<String>, raw_text: impl Into<String>) -> Result<Self> {
        let source_id = source_id.into();
        let raw_text = raw_text.into();

        if raw_text.trim().is_empty() {
            return Err(AnalysisError::EmptyBody { source_id });
        }

        let tokens = tokenizer::tokenize(&raw_text)?;
        let word_counts = frequency::count(&tokens);
        let total_words = tokens.len();

        info!(
            source_id = %source_id,
            total_words,
            unique_words = word_counts.len(),
            "Document built"
        );

        Ok(Self {
            source_id,
            raw_text,
            tokens,
            word_counts,
            total_words,
        })
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn word_counts(&self) -> &WordCounts {
        &self.word_counts
    }

    pub fn total_words(&self) -> usize {
        self.total_words
    }

    /// Occurrences of `word` in this document (0 when absent).
    pub fn count_of(&self, word: &str) -> usize {
        self.word_counts.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.word_counts.contains_key(word)
    }
}
