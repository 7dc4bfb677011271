// Word tokenizer.
//
// A token is a maximal run of word characters, in any script, at least
// MIN_TOKEN_CHARS long after lowercasing. Word characters are Unicode letters plus
// combining marks, so Devanagari viramas and decomposed accents stay inside the
// word. Digits, underscores, punctuation and whitespace all end a run. Shorter
// runs are dropped, not merged.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AnalysisError, Result};

/// Shortest run of letters that counts as a word.
pub const MIN_TOKEN_CHARS: usize = 3;

// \w minus digits and underscore; repetition counts characters, not bytes.
static WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"[^\W\d_]{{{MIN_TOKEN_CHARS},}}"))
        .expect("word pattern is built from constants")
});

/// Split text into lowercase word tokens.
///
/// Fails with `EmptyInput` for blank text and `NoTokensFound` when nothing in
/// the text qualifies as a word.
pub fn tokenize(text: &str) -> Result<Vec<String>> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let lowered = text.to_lowercase();
    let tokens: Vec<String> = WORD
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect();

    if tokens.is_empty() {
        return Err(AnalysisError::NoTokensFound);
    }

    Ok(tokens)
}
