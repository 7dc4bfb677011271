// Unit tests for vector alignment and the statistics functions.
//
// Vector tests compare index-paired values through the returned key order,
// never raw arrays against literals.

use std::collections::HashMap;

use pagestats::error::AnalysisError;
use pagestats::stats::metrics::{
    cosine_similarity, inverse_document_frequency, term_frequency, tf_idf,
};
use pagestats::stats::vectors::{build_keyed_vectors, build_vectors};
use pagestats::text::frequency::WordCounts;

fn counts(pairs: &[(&str, usize)]) -> WordCounts {
    pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
}

// ============================================================
// term_frequency
// ============================================================

#[test]
fn tf_basic() {
    assert!((term_frequency(2, 10).unwrap() - 0.2).abs() < 1e-12);
}

#[test]
fn tf_absent_word_is_zero() {
    assert_eq!(term_frequency(0, 10).unwrap(), 0.0);
}

#[test]
fn tf_zero_total_is_invalid() {
    assert!(matches!(
        term_frequency(3, 0),
        Err(AnalysisError::InvalidArgument(_))
    ));
}

// ============================================================
// inverse_document_frequency
// ============================================================

#[test]
fn idf_word_in_every_document_is_zero() {
    assert_eq!(inverse_document_frequency(10, 10).unwrap(), 0.0);
}

#[test]
fn idf_rare_word() {
    let idf = inverse_document_frequency(10, 1).unwrap();
    assert!((idf - 10f64.ln()).abs() < 1e-12);
}

#[test]
fn idf_zero_documents_is_invalid() {
    assert!(matches!(
        inverse_document_frequency(0, 1),
        Err(AnalysisError::InvalidArgument(_))
    ));
}

#[test]
fn idf_never_returns_infinity() {
    // A word found in no document is rejected instead of producing +inf
    let result = inverse_document_frequency(3, 0);
    assert!(matches!(result, Err(AnalysisError::InvalidArgument(_))));
}

#[test]
fn tf_idf_is_product() {
    assert!((tf_idf(0.5, 2.0) - 1.0).abs() < 1e-12);
}

// ============================================================
// build_vectors
// ============================================================

#[test]
fn vectors_share_key_space() {
    let a = counts(&[("a", 2), ("b", 1)]);
    let b = counts(&[("b", 3), ("c", 5)]);
    let keyed = build_keyed_vectors(&a, &b);

    assert_eq!(keyed.left.len(), 3);
    assert_eq!(keyed.right.len(), 3);

    let idx = keyed.index_of("b").unwrap();
    assert_eq!(keyed.left[idx], 1.0);
    assert_eq!(keyed.right[idx], 3.0);

    let idx = keyed.index_of("a").unwrap();
    assert_eq!(keyed.left[idx], 2.0);
    assert_eq!(keyed.right[idx], 0.0);
}

#[test]
fn vectors_every_index_pairs_the_same_key() {
    let a = counts(&[("alpha", 1), ("beta", 2), ("gamma", 3)]);
    let b = counts(&[("gamma", 4), ("delta", 5)]);
    let keyed = build_keyed_vectors(&a, &b);

    for (i, key) in keyed.keys.iter().enumerate() {
        assert_eq!(keyed.left[i], a.get(key).copied().unwrap_or(0) as f64);
        assert_eq!(keyed.right[i], b.get(key).copied().unwrap_or(0) as f64);
    }
}

#[test]
fn vectors_repeatable_for_same_input() {
    let a = counts(&[("x", 1), ("y", 2)]);
    let b = counts(&[("y", 3), ("z", 4)]);
    assert_eq!(build_vectors(&a, &b), build_vectors(&a, &b));
}

#[test]
fn vectors_from_empty_maps() {
    let empty: WordCounts = HashMap::new();
    let (left, right) = build_vectors(&empty, &empty);
    assert!(left.is_empty() && right.is_empty());
    assert!(matches!(
        cosine_similarity(&left, &right),
        Err(AnalysisError::ZeroMagnitude)
    ));
}

// ============================================================
// cosine_similarity
// ============================================================

#[test]
fn cosine_identical_vectors() {
    let v = vec![3.0, 1.0, 4.0, 1.0, 5.0];
    assert!((cosine_similarity(&v, &v).unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn cosine_scaled_vectors_are_identical_in_direction() {
    let a = vec![1.0, 2.0, 3.0];
    let b = vec![10.0, 20.0, 30.0];
    assert!((cosine_similarity(&a, &b).unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn cosine_orthogonal_vectors() {
    assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0);
}

#[test]
fn cosine_length_mismatch() {
    assert!(matches!(
        cosine_similarity(&[1.0, 2.0], &[1.0]),
        Err(AnalysisError::LengthMismatch { left: 2, right: 1 })
    ));
}

#[test]
fn cosine_zero_vector_on_either_side() {
    assert!(matches!(
        cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]),
        Err(AnalysisError::ZeroMagnitude)
    ));
    assert!(matches!(
        cosine_similarity(&[1.0, 1.0], &[0.0, 0.0]),
        Err(AnalysisError::ZeroMagnitude)
    ));
}

#[test]
fn cosine_partial_overlap_is_between_zero_and_one() {
    let score = cosine_similarity(&[1.0, 1.0, 0.0], &[0.0, 1.0, 1.0]).unwrap();
    assert!((score - 0.5).abs() < 1e-9);
}
