// Corpus: an ordered set of documents and the cross-document statistics.
//
// Nothing here is cached: document counts and "documents containing W" are
// derived from the documents each time they are asked for.

use futures::future::try_join_all;
use tracing::info;

use crate::document::Document;
use crate::error::{AnalysisError, Result};
use crate::fetch::traits::PageFetcher;
use crate::stats::metrics;
use crate::stats::vectors;

/// Documents in the order they were supplied.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Fetch every source concurrently and build a corpus in the given order.
    ///
    /// The first failure aborts the whole build; no partial corpus is returned.
    pub async fn fetch_all(sources: &[String], fetcher: &dyn PageFetcher) -> Result<Self> {
        let documents =
            try_join_all(sources.iter().map(|source| Document::fetch(source, fetcher))).await?;

        info!(documents = documents.len(), "Corpus built");
        Ok(Self::new(documents))
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn get(&self, index: usize) -> Result<&Document> {
        self.documents.get(index).ok_or_else(|| {
            AnalysisError::InvalidArgument(format!(
                "no document at index {index} (corpus has {})",
                self.documents.len()
            ))
        })
    }

    /// Number of documents in which `word` occurs at least once.
    pub fn documents_containing(&self, word: &str) -> usize {
        self.documents.iter().filter(|d| d.contains(word)).count()
    }

    /// TF of `word` in the document at `index`.
    pub fn term_frequency(&self, word: &str, index: usize) -> Result<f64> {
        let doc = self.get(index)?;
        metrics::term_frequency(doc.count_of(word), doc.total_words())
    }

    /// IDF of `word` across the whole corpus.
    pub fn inverse_document_frequency(&self, word: &str) -> Result<f64> {
        metrics::inverse_document_frequency(self.document_count(), self.documents_containing(word))
    }

    /// TF·IDF of `word` for the document at `index`.
    pub fn tf_idf(&self, word: &str, index: usize) -> Result<f64> {
        let tf = self.term_frequency(word, index)?;
        let idf = self.inverse_document_frequency(word)?;
        Ok(metrics::tf_idf(tf, idf))
    }

    /// Cosine similarity between the word-count vectors of two documents.
    pub fn similarity(&self, left: usize, right: usize) -> Result<f64> {
        let (a, b) = vectors::build_vectors(
            self.get(left)?.word_counts(),
            self.get(right)?.word_counts(),
        );
        metrics::cosine_similarity(&a, &b)
    }
}
