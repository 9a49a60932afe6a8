//! Abstract reconstruction and sentence splitting.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::InvertedIndex;

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]*").expect("valid sentence regex"));

/// Rebuild plain text from an inverted index.
///
/// Each word is written at every position it lists; filled slots are joined
/// in ascending order with single spaces and gaps are skipped. Words are
/// visited in lexical order, so when two claim the same position the
/// lexically greater one wins. Only filled positions are stored, so sparse
/// or very large positions cost nothing extra.
#[must_use]
pub fn reconstruct(index: Option<&InvertedIndex>) -> String {
    let Some(index) = index else {
        return String::new();
    };

    let mut slots: BTreeMap<usize, &str> = BTreeMap::new();
    for (word, positions) in index {
        for &pos in positions {
            slots.insert(pos, word.as_str());
        }
    }

    slots.into_values().collect::<Vec<_>>().join(" ")
}

/// Split text into trimmed sentences, keeping terminal punctuation.
#[must_use]
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty() && s.chars().any(char::is_alphanumeric))
        .collect()
}
