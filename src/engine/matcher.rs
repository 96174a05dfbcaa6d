//! Exact-phrase skill matching against resume text

use regex::Regex;

/// Outcome of matching a skill vocabulary against a resume.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatchOutcome {
    /// Vocabulary entries found in the resume, in vocabulary order, capped.
    pub matched: Vec<String>,
    /// Unfound entries from the leading vocabulary window, capped.
    pub missing: Vec<String>,
    /// Hits within the leading `window` vocabulary slots, for the
    /// match-percentage numerator.
    pub window_hits: usize,
}

/// Matches vocabulary phrases verbatim with word boundaries. Deliberately
/// exact: no fuzzy or semantic matching, so identical inputs always yield
/// identical matches.
pub struct SkillMatcher {
    top_k_matched: usize,
    missing_window: usize,
    missing_limit: usize,
    percent_window: usize,
}

impl SkillMatcher {
    pub fn new(
        top_k_matched: usize,
        missing_window: usize,
        missing_limit: usize,
        percent_window: usize,
    ) -> Self {
        Self {
            top_k_matched,
            missing_window,
            missing_limit,
            percent_window,
        }
    }

    pub fn match_against(&self, resume_text: &str, vocabulary: &[String]) -> SkillMatchOutcome {
        let mut matched = Vec::new();
        let mut missing = Vec::new();
        let mut window_hits = 0;

        for (index, phrase) in vocabulary.iter().enumerate() {
            let found = Self::phrase_found(resume_text, phrase);

            if found {
                if matched.len() < self.top_k_matched {
                    matched.push(phrase.clone());
                }
                if index < self.percent_window {
                    window_hits += 1;
                }
            } else if index < self.missing_window && missing.len() < self.missing_limit {
                missing.push(phrase.clone());
            }
        }

        SkillMatchOutcome {
            matched,
            missing,
            window_hits,
        }
    }

    /// Case-insensitive word-boundary search for the literal phrase.
    /// Boundaries are only asserted next to word characters, so phrases
    /// like "c++" or ".net" still match.
    fn phrase_found(text: &str, phrase: &str) -> bool {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return false;
        }

        let escaped: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
        let body = escaped.join(r"\s+");

        let lead = if phrase.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
            r"\b"
        } else {
            ""
        };
        let trail = if phrase.ends_with(|c: char| c.is_alphanumeric() || c == '_') {
            r"\b"
        } else {
            ""
        };

        match Regex::new(&format!("(?i){}{}{}", lead, body, trail)) {
            Ok(re) => re.is_match(text),
            Err(_) => false,
        }
    }
}
