//! Resume quality heuristics: word-count bucketing and keyword repetition

use crate::engine::vocabulary;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Resumes shorter than this read as thin; longer ones as padded.
const MIN_OPTIMAL_WORDS: usize = 300;
const MAX_OPTIMAL_WORDS: usize = 900;

/// A single non-stopword repeated this often suggests keyword stuffing.
const REPETITION_THRESHOLD: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeQuality {
    pub word_count: usize,
    pub word_count_status: String,
    pub repetition_status: String,
}

/// Assess word-count and repetition quality of the resume text.
pub fn assess(resume_text: &str) -> ResumeQuality {
    let stop_words = vocabulary::stop_words();

    let words: Vec<String> = resume_text
        .unicode_words()
        .map(|w| w.to_lowercase())
        .collect();
    let word_count = words.len();

    let word_count_status = if word_count < MIN_OPTIMAL_WORDS {
        format!("Too Short ({} words)", word_count)
    } else if word_count > MAX_OPTIMAL_WORDS {
        format!("Too Long ({} words)", word_count)
    } else {
        format!("Optimal ({} words)", word_count)
    };

    let mut frequencies: HashMap<&str, usize> = HashMap::new();
    for word in &words {
        if word.len() > 3 && !stop_words.contains(word.as_str()) {
            *frequencies.entry(word.as_str()).or_insert(0) += 1;
        }
    }

    // Tie-break on the word itself so equal counts always report the same
    // winner; HashMap iteration order must never leak into the output.
    let repetition_status = match frequencies
        .iter()
        .max_by_key(|(word, count)| (**count, std::cmp::Reverse(**word)))
    {
        Some((word, &count)) if count >= REPETITION_THRESHOLD => {
            format!("High (\"{}\" appears {} times)", word, count)
        }
        _ => "Normal".to_string(),
    };

    ResumeQuality {
        word_count,
        word_count_status,
        repetition_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_resume_flagged() {
        let quality = assess("short resume text");
        assert_eq!(quality.word_count, 3);
        assert!(quality.word_count_status.starts_with("Too Short"));
        assert_eq!(quality.repetition_status, "Normal");
    }

    #[test]
    fn test_optimal_length() {
        let text = "delivered measurable results across projects ".repeat(70);
        let quality = assess(&text);
        assert!(quality.word_count_status.starts_with("Optimal"));
    }

    #[test]
    fn test_repetition_detected() {
        let text = format!(
            "{} {}",
            "synergy ".repeat(10),
            "varied vocabulary to pad things out"
        );
        let quality = assess(&text);
        assert!(quality.repetition_status.contains("synergy"));
    }

    #[test]
    fn test_repetition_tie_breaks_deterministically() {
        let text = format!("{} {}", "alpha ".repeat(10), "omega ".repeat(10));
        for _ in 0..64 {
            let quality = assess(&text);
            assert_eq!(
                quality.repetition_status,
                "High (\"alpha\" appears 10 times)"
            );
        }
    }

    #[test]
    fn test_empty_resume() {
        let quality = assess("");
        assert_eq!(quality.word_count, 0);
        assert!(quality.word_count_status.starts_with("Too Short"));
    }
}
