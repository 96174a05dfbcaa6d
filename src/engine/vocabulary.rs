//! Skill vocabulary extraction from job description text

use crate::engine::normalizer;
use regex::Regex;
use std::collections::HashSet;

/// Articles, conjunctions, and generic job-posting words that carry no
/// skill signal on their own.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "or", "the", "of", "to", "in", "on", "with", "for", "at", "by", "from",
    "as", "is", "are", "was", "were", "be", "been", "being", "will", "would", "can", "could",
    "should", "we", "you", "our", "your", "this", "that", "these", "those", "it", "its",
    "their", "they", "have", "has", "had", "not", "but", "if", "than", "then", "who", "what",
    "all", "any", "other", "more", "most", "about", "into", "per", "such", "via",
    // generic resume/posting vocabulary
    "experience", "experienced", "years", "year", "team", "teams", "work", "working",
    "skills", "skill", "knowledge", "ability", "abilities", "strong", "required",
    "requirements", "requirement", "preferred", "must", "plus", "good", "excellent",
    "familiarity", "familiar", "proficient", "proficiency", "understanding",
    "responsibilities", "responsibility", "role", "job", "candidate", "candidates",
    "looking", "using", "use", "etc",
];

const BULLETS: &[char] = &['\u{2022}', '\u{25CF}', '\u{25AA}', '\u{2023}', '\u{00B7}', '*'];
const DASHES: &[char] = &['-', '\u{2013}', '\u{2014}'];

/// Extracts an ordered, deduplicated list of skill-like phrases and tokens
/// from raw job description text.
pub struct VocabularyExtractor {
    token_re: Regex,
    stop_words: HashSet<&'static str>,
    cap: usize,
}

impl VocabularyExtractor {
    pub fn new(cap: usize) -> Self {
        // Word-like tokens: letters, digits, +, #, ., - with length 2..=30
        // (covers c++, c#, node.js, scikit-learn).
        let token_re = Regex::new(r"[a-z0-9+#.\-]{2,30}").expect("Invalid token regex");

        Self {
            token_re,
            stop_words: stop_words(),
            cap,
        }
    }

    /// Derive the skill vocabulary: phrase candidates from skill-list lines
    /// first, then stopword-filtered tokens from the normalized full text,
    /// deduplicated case-insensitively in first-seen order and capped.
    pub fn extract(&self, job_description: &str) -> Vec<String> {
        let mut candidates: Vec<String> = Vec::new();

        for line in job_description.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if self.is_skill_list_line(line) {
                candidates.extend(self.split_skill_line(line));
            }
        }

        let normalized = normalizer::normalize(job_description);
        for token in self.token_re.find_iter(&normalized) {
            let token = token.as_str().trim_matches(|c| c == '.' || c == '-');
            if token.len() < 2 || !token.chars().any(|c| c.is_alphabetic()) {
                continue;
            }
            if self.stop_words.contains(token) {
                continue;
            }
            candidates.push(token.to_string());
        }

        let mut seen = HashSet::new();
        let mut vocabulary = Vec::new();
        for candidate in candidates {
            if seen.insert(candidate.to_lowercase()) {
                vocabulary.push(candidate);
                if vocabulary.len() == self.cap {
                    break;
                }
            }
        }

        vocabulary
    }

    /// Lines with commas, bullets, or few words read like skill lists
    /// ("Required: Python, SQL, Docker" or bulleted requirement items).
    fn is_skill_list_line(&self, line: &str) -> bool {
        line.contains(',')
            || line.contains(BULLETS)
            || line.split_whitespace().count() <= 6
    }

    fn split_skill_line(&self, line: &str) -> Vec<String> {
        line.split(|c: char| {
            c == ',' || c == ':' || c == ';' || BULLETS.contains(&c) || DASHES.contains(&c)
        })
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() > 1)
        .filter(|fragment| {
            // Single-word fragments still go through the stopword filter so
            // that labels like "Required" do not enter the vocabulary.
            fragment.contains(char::is_whitespace)
                || !self.stop_words.contains(fragment.to_lowercase().as_str())
        })
        .map(str::to_string)
        .collect()
    }
}

pub(crate) fn stop_words() -> HashSet<&'static str> {
    STOP_WORDS.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_comma_separated_skills() {
        let extractor = VocabularyExtractor::new(60);
        let vocab = extractor.extract("Required: Python, SQL, Docker");

        assert_eq!(&vocab[..3], &["Python", "SQL", "Docker"]);
        assert!(!vocab.iter().any(|v| v.eq_ignore_ascii_case("required")));
    }

    #[test]
    fn test_extracts_bulleted_skills() {
        let extractor = VocabularyExtractor::new(60);
        let jd = "What you bring to the table as a senior engineer on the team:\n\
                  \u{2022} Kubernetes\n\u{2022} Terraform\n\u{2022} Go";
        let vocab = extractor.extract(jd);

        assert!(vocab.iter().any(|v| v == "Kubernetes"));
        assert!(vocab.iter().any(|v| v == "Terraform"));
        assert!(vocab.iter().any(|v| v == "Go"));
    }

    #[test]
    fn test_dedupes_case_insensitively_preserving_order() {
        let extractor = VocabularyExtractor::new(60);
        let vocab = extractor.extract("Python, SQL\npython and sql daily");

        let pythons = vocab
            .iter()
            .filter(|v| v.eq_ignore_ascii_case("python"))
            .count();
        assert_eq!(pythons, 1);
        assert_eq!(vocab[0], "Python");
    }

    #[test]
    fn test_cap_is_enforced() {
        let extractor = VocabularyExtractor::new(5);
        let jd: String = (0..40).map(|i| format!("skillword{}, ", i)).collect();
        let vocab = extractor.extract(&jd);

        assert_eq!(vocab.len(), 5);
    }

    #[test]
    fn test_empty_input_yields_empty_vocabulary() {
        let extractor = VocabularyExtractor::new(60);
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn test_keeps_symbol_heavy_tokens() {
        let extractor = VocabularyExtractor::new(60);
        let vocab = extractor.extract("We want someone who knows c++ and node.js well enough to ship production systems");

        assert!(vocab.iter().any(|v| v == "c++"));
        assert!(vocab.iter().any(|v| v == "node.js"));
    }
}
