// AnalysisReport: the numbers the driver prints for one run.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::corpus::Corpus;
use crate::error::{AnalysisError, Result};
use crate::stats::metrics;

/// TF, IDF and similarity for one target word over a corpus.
///
/// TF and TF·IDF refer to the first document; similarity compares the first
/// two documents.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub target_word: String,
    pub sources: Vec<SourceSummary>,
    pub documents_with_word: usize,
    pub term_frequency: f64,
    pub inverse_document_frequency: f64,
    pub tf_idf: f64,
    pub cosine_similarity: f64,
    pub generated_at: DateTime<Utc>,
}

/// Per-document totals shown alongside the headline numbers.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub source_id: String,
    pub total_words: usize,
    pub unique_words: usize,
    pub target_count: usize,
}

impl AnalysisReport {
    /// Compute the report for `target_word`. Needs at least two documents.
    pub fn build(corpus: &Corpus, target_word: &str) -> Result<Self> {
        if corpus.document_count() < 2 {
            return Err(AnalysisError::InvalidArgument(format!(
                "need at least two documents to compare, got {}",
                corpus.document_count()
            )));
        }

        let target_word = target_word.to_lowercase();

        let sources = corpus
            .documents()
            .iter()
            .map(|doc| SourceSummary {
                source_id: doc.source_id().to_string(),
                total_words: doc.total_words(),
                unique_words: doc.word_counts().len(),
                target_count: doc.count_of(&target_word),
            })
            .collect();

        let documents_with_word = corpus.documents_containing(&target_word);
        if documents_with_word == 0 {
            return Err(AnalysisError::InvalidArgument(format!(
                "'{target_word}' occurs in 0 of {} documents, so its IDF is undefined",
                corpus.document_count()
            )));
        }

        let term_frequency = corpus.term_frequency(&target_word, 0)?;
        let inverse_document_frequency = corpus.inverse_document_frequency(&target_word)?;

        Ok(Self {
            documents_with_word,
            tf_idf: metrics::tf_idf(term_frequency, inverse_document_frequency),
            cosine_similarity: corpus.similarity(0, 1)?,
            target_word,
            sources,
            term_frequency,
            inverse_document_frequency,
            generated_at: Utc::now(),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
