//! Heuristic resume signals: experience estimate, quantifiable results,
//! action verbs, and the education-level flag

use aho_corasick::AhoCorasick;
use regex::Regex;

/// Verbs that indicate ownership of outcomes rather than passive duty
/// descriptions.
const ACTION_VERBS: &str = "led|managed|developed|implemented|built|designed|improved|optimized|created|deployed|orchestrated|owned|spearheaded";

/// Stems that indicate a measured result ("increased revenue", "reduced
/// latency"). Matched as substrings, case-insensitive.
const RESULT_STEMS: &[&str] = &["increas", "decreas", "reduc", "saved", "boost", "improv"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationLevel {
    High,
    NotSpecified,
}

impl EducationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::High => "High",
            EducationLevel::NotSpecified => "Not Specified",
        }
    }
}

pub struct SignalDetector {
    experience_patterns: Vec<Regex>,
    calendar_year_re: Regex,
    percent_re: Regex,
    large_number_re: Regex,
    action_verb_re: Regex,
    education_re: Regex,
    result_stems: AhoCorasick,
}

impl Default for SignalDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalDetector {
    pub fn new() -> Self {
        // Ordered: the first pattern that matches decides the estimate.
        // Leading \b keeps the capture off the tail of longer numbers
        // ("2005 years ago" is a date, not five years of experience).
        let experience_patterns = vec![
            Regex::new(r"(?i)\b(\d{1,2})\s*\+\s*years?").expect("Invalid experience regex"),
            Regex::new(r"(?i)\b(\d{1,2})\s+years?\b").expect("Invalid experience regex"),
            Regex::new(r"(?i)\b(\d{1,2})\s*yrs?\b").expect("Invalid experience regex"),
            Regex::new(r"(?i)\b(\d{1,2})\s*-\s*year").expect("Invalid experience regex"),
        ];

        let calendar_year_re = Regex::new(r"\b(19|20)\d{2}\b").expect("Invalid year regex");
        let percent_re =
            Regex::new(r"(?i)\d+\s*(%|percent\b)").expect("Invalid percent regex");
        let large_number_re = Regex::new(r"\b\d{2,}\b").expect("Invalid number regex");
        let action_verb_re = Regex::new(&format!(r"(?i)\b({})\b", ACTION_VERBS))
            .expect("Invalid action verb regex");
        let education_re = Regex::new(
            r"(?i)\b(bachelor(?:'s)?|master(?:'s)?|ph\.?d|doctorate|b\.?tech|m\.?tech|b\.?sc|m\.?sc|mba|bca|mca|degree)\b",
        )
        .expect("Invalid education regex");

        let result_stems = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(RESULT_STEMS)
            .expect("Failed to build result stem matcher");

        Self {
            experience_patterns,
            calendar_year_re,
            percent_re,
            large_number_re,
            action_verb_re,
            education_re,
            result_stems,
        }
    }

    /// Estimate years of professional experience. Explicit "N years"
    /// statements win; otherwise the spread between the earliest and
    /// latest calendar year is used when at least two distinct years
    /// appear. `None` when the text gives no signal.
    pub fn estimate_experience_years(&self, text: &str) -> Option<u32> {
        for pattern in &self.experience_patterns {
            if let Some(caps) = pattern.captures(text) {
                if let Ok(years) = caps[1].parse::<u32>() {
                    return Some(years);
                }
            }
        }

        let mut years: Vec<u32> = self
            .calendar_year_re
            .find_iter(text)
            .filter_map(|m| m.as_str().parse::<u32>().ok())
            .filter(|y| (1900..=2099).contains(y))
            .collect();
        years.sort_unstable();
        years.dedup();

        if years.len() >= 2 {
            Some(years[years.len() - 1].saturating_sub(years[0]))
        } else {
            None
        }
    }

    /// Percentages, result stems, or any standalone multi-digit number.
    pub fn has_quantifiable_results(&self, text: &str) -> bool {
        self.percent_re.is_match(text)
            || self.result_stems.is_match(text)
            || self.large_number_re.is_match(text)
    }

    pub fn uses_action_verbs(&self, text: &str) -> bool {
        self.action_verb_re.is_match(text)
    }

    /// Two-value education heuristic: a degree keyword is either present
    /// or the level is unspecified. No finer grading is attempted.
    pub fn education_level(&self, text: &str) -> EducationLevel {
        if self.education_re.is_match(text) {
            EducationLevel::High
        } else {
            EducationLevel::NotSpecified
        }
    }
}
