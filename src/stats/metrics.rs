// Term frequency, inverse document frequency and cosine similarity.
//
// All functions are pure and reject degenerate input instead of returning
// NaN or infinity.

use crate::error::{AnalysisError, Result};

/// Share of a document's words that are the given word.
pub fn term_frequency(word_count: usize, total_words: usize) -> Result<f64> {
    if total_words == 0 {
        return Err(AnalysisError::InvalidArgument(
            "total word count cannot be zero".to_string(),
        ));
    }

    Ok(word_count as f64 / total_words as f64)
}

/// `ln(document_count / documents_with_word)`.
///
/// A word that appears in no document has no defined IDF, so
/// `documents_with_word == 0` is rejected rather than producing infinity.
/// More matching documents than documents in total is rejected too.
pub fn inverse_document_frequency(document_count: usize, documents_with_word: usize) -> Result<f64> {
    if document_count == 0 {
        return Err(AnalysisError::InvalidArgument(
            "document count cannot be zero".to_string(),
        ));
    }
    if documents_with_word == 0 {
        return Err(AnalysisError::InvalidArgument(
            "word does not occur in any document".to_string(),
        ));
    }
    if documents_with_word > document_count {
        return Err(AnalysisError::InvalidArgument(format!(
            "{documents_with_word} documents contain the word but only {document_count} exist"
        )));
    }

    Ok((document_count as f64 / documents_with_word as f64).ln())
}

/// Plain TF·IDF product.
pub fn tf_idf(tf: f64, idf: f64) -> f64 {
    tf * idf
}

/// Cosine of the angle between two vectors.
///
/// For count vectors the result is in [0, 1].
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(AnalysisError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let (dot, norm_a, norm_b) = a
        .iter()
        .zip(b)
        .fold((0.0, 0.0, 0.0), |(dot, na, nb), (x, y)| {
            (dot + x * y, na + x * x, nb + y * y)
        });

    let magnitude_a = f64::sqrt(norm_a);
    let magnitude_b = f64::sqrt(norm_b);

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return Err(AnalysisError::ZeroMagnitude);
    }

    Ok(dot / (magnitude_a * magnitude_b))
}
