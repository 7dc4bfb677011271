// Align two word-count maps onto one shared key space.
//
// The key order is the sorted union of both vocabularies, so the same key
// always lands at the same index in both vectors. A word missing from one
// side contributes 0.0 there.

use std::collections::BTreeSet;

use crate::text::frequency::WordCounts;

/// Two index-aligned frequency vectors plus the word at each index.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedVectors {
    pub keys: Vec<String>,
    pub left: Vec<f64>,
    pub right: Vec<f64>,
}

impl KeyedVectors {
    /// Index of `word` in the shared key space, if either side has it.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.keys.binary_search_by(|k| k.as_str().cmp(word)).ok()
    }
}

/// Build both vectors together with their key order.
pub fn build_keyed_vectors(a: &WordCounts, b: &WordCounts) -> KeyedVectors {
    let keys: BTreeSet<&String> = a.keys().chain(b.keys()).collect();

    let left = keys.iter().map(|k| count_of(a, k)).collect();
    let right = keys.iter().map(|k| count_of(b, k)).collect();

    KeyedVectors {
        keys: keys.into_iter().cloned().collect(),
        left,
        right,
    }
}

fn count_of(counts: &WordCounts, key: &str) -> f64 {
    counts.get(key).copied().unwrap_or(0) as f64
}

/// Build two equal-length frequency vectors over the union of both key sets.
pub fn build_vectors(a: &WordCounts, b: &WordCounts) -> (Vec<f64>, Vec<f64>) {
    let keyed = build_keyed_vectors(a, b);
    (keyed.left, keyed.right)
}
