// Word frequency counting.

use std::collections::HashMap;

/// Word -> number of occurrences in one document.
pub type WordCounts = HashMap<String, usize>;

/// Count how often each distinct token occurs.
///
/// An empty slice gives an empty map.
pub fn count<S: AsRef<str>>(tokens: &[S]) -> WordCounts {
    tokens.iter().fold(WordCounts::new(), |mut counts, token| {
        *counts.entry(token.as_ref().to_string()).or_insert(0) += 1;
        counts
    })
}

/// The `n` most frequent words, highest count first.
///
/// Ties are broken alphabetically so the listing is stable between runs.
pub fn top_words(counts: &WordCounts, n: usize) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, usize)> = counts
        .iter()
        .map(|(word, &count)| (word.as_str(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(n);
    ranked
}
