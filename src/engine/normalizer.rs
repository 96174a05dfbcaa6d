//! Text normalization for tokenization

use unicode_segmentation::UnicodeSegmentation;

/// Separator punctuation flattened to spaces before tokenization.
const SEPARATORS: &[char] = &['(', ')', '[', ']', '{', '}', ':', ';', ','];

/// Normalize free-form text: lower-case, flatten separator punctuation to
/// spaces, collapse whitespace runs, trim. Total over any input.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let flattened: String = lowered
        .chars()
        .map(|c| if SEPARATORS.contains(&c) { ' ' } else { c })
        .collect();

    flattened.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count words using Unicode word segmentation.
pub fn word_count(text: &str) -> usize {
    text.unicode_words().count()
}
