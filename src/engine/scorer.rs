//! Score aggregation: the deterministic analysis entry point

use crate::config::Config;
use crate::engine::cache::ResultCache;
use crate::engine::matcher::SkillMatcher;
use crate::engine::signals::SignalDetector;
use crate::engine::vocabulary::VocabularyExtractor;
use log::debug;
use serde::{Deserialize, Serialize};

/// Placeholder shown when a skill list comes back empty.
const EMPTY_SKILLS_SENTINEL: &str = "N/A";

/// The sole output of the engine. Immutable once constructed; a pure
/// function of the two input strings and the fixed configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Weighted overall match, 0-100.
    pub relevance_score: u32,
    /// Integer percentage label, e.g. "67%".
    pub skills_match: String,
    /// "N+ Years" or "Not Specified".
    pub years_experience: String,
    /// "High" or "Not Specified".
    pub education_level: String,
    /// Skill phrases found in both documents, vocabulary order, capped.
    pub matched_skills: Vec<String>,
    /// Leading unfound vocabulary entries, capped at three.
    pub missing_skills: Vec<String>,
    pub uses_action_verbs: bool,
    pub has_quantifiable_results: bool,
    /// Deterministic template summary; an external polisher may rewrite
    /// the wording but never the numbers it reports.
    pub recommendation_summary: String,
    /// Relevance score penalized per missing skill, 0-100.
    pub recommendation_score: u32,
}

/// Deterministic rule-based scoring engine. Same inputs, same outputs;
/// the cache exploits exactly that.
pub struct ScoringEngine {
    config: Config,
    vocabulary: VocabularyExtractor,
    matcher: SkillMatcher,
    signals: SignalDetector,
    cache: ResultCache,
}

impl ScoringEngine {
    pub fn new(config: &Config) -> Self {
        let vocabulary = VocabularyExtractor::new(config.engine.vocabulary_cap);
        let matcher = SkillMatcher::new(
            config.engine.top_k_matched,
            config.engine.missing_skill_window,
            config.engine.missing_skill_limit,
            config.engine.match_denominator_cap,
        );

        Self {
            config: config.clone(),
            vocabulary,
            matcher,
            signals: SignalDetector::new(),
            cache: ResultCache::new(),
        }
    }

    /// Analyze a resume against a job description. Never fails: empty or
    /// degenerate inputs produce a low/neutral result.
    pub fn analyze(&mut self, job_description: &str, resume_text: &str) -> AnalysisResult {
        if !self.config.engine.enable_caching {
            return self.compute(job_description, resume_text);
        }

        let key = ResultCache::key(job_description, resume_text);
        if let Some(cached) = self.cache.get(&key) {
            debug!("Analysis cache hit for key {}", &key[..12]);
            return cached.clone();
        }

        let result = self.compute(job_description, resume_text);
        self.cache.insert(key, result.clone());
        result
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    fn compute(&self, job_description: &str, resume_text: &str) -> AnalysisResult {
        let scoring = &self.config.scoring;

        let vocabulary = self.vocabulary.extract(job_description);
        let matches = self.matcher.match_against(resume_text, &vocabulary);
        debug!(
            "Vocabulary: {} entries, {} matched, {} missing",
            vocabulary.len(),
            matches.matched.len(),
            matches.missing.len()
        );

        // Denominator clamped to the leading vocabulary window so very long
        // job descriptions do not dilute the percentage. Empty vocabulary
        // is defined as 0%, not a division error.
        let skill_match_pct: u32 = if vocabulary.is_empty() {
            0
        } else {
            let denominator = vocabulary
                .len()
                .clamp(1, self.config.engine.match_denominator_cap);
            ((matches.window_hits as f32 / denominator as f32) * 100.0)
                .round()
                .min(100.0) as u32
        };

        let years = self.signals.estimate_experience_years(resume_text);
        let exp_score = match years {
            Some(y) => {
                let max = scoring.max_experience_years.max(1);
                (y.min(max) as f32 / max as f32) * 100.0
            }
            None => scoring.neutral_experience_score,
        };

        let has_quantifiable_results = self.signals.has_quantifiable_results(resume_text);
        let uses_action_verbs = self.signals.uses_action_verbs(resume_text);
        let education = self.signals.education_level(resume_text);

        let relevance_raw = scoring.skill_weight * skill_match_pct as f32
            + scoring.experience_weight * exp_score
            + scoring.quantifiable_weight * if has_quantifiable_results { 100.0 } else { 0.0 }
            + scoring.action_verb_weight * if uses_action_verbs { 100.0 } else { 0.0 };
        let relevance_score = relevance_raw.round().clamp(0.0, 100.0) as u32;

        let penalty = scoring.missing_skill_penalty * matches.missing.len() as u32;
        let recommendation_score = relevance_score.saturating_sub(penalty).min(100);

        let years_experience = match years {
            Some(y) => format!("{}+ Years", y),
            None => "Not Specified".to_string(),
        };

        let recommendation_summary = compose_summary(
            skill_match_pct,
            &years_experience,
            has_quantifiable_results,
            uses_action_verbs,
            recommendation_score,
        );

        AnalysisResult {
            relevance_score,
            skills_match: format!("{}%", skill_match_pct),
            years_experience,
            education_level: education.as_str().to_string(),
            matched_skills: with_sentinel(matches.matched),
            missing_skills: with_sentinel(matches.missing),
            uses_action_verbs,
            has_quantifiable_results,
            recommendation_summary,
            recommendation_score,
        }
    }
}

/// Fixed-order template: skill match, experience, quantifiable results,
/// action verbs, final score.
fn compose_summary(
    skill_match_pct: u32,
    years_experience: &str,
    has_quantifiable_results: bool,
    uses_action_verbs: bool,
    recommendation_score: u32,
) -> String {
    format!(
        "The resume matches {}% of the job's core skill requirements. \
         Estimated experience: {}. Quantifiable results: {}. \
         Action verbs: {}. Final recommendation score: {}/100.",
        skill_match_pct,
        years_experience,
        if has_quantifiable_results { "found" } else { "not found" },
        if uses_action_verbs { "present" } else { "absent" },
        recommendation_score,
    )
}

fn with_sentinel(skills: Vec<String>) -> Vec<String> {
    if skills.is_empty() {
        vec![EMPTY_SKILLS_SENTINEL.to_string()]
    } else {
        skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> ScoringEngine {
        ScoringEngine::new(&Config::default())
    }

    #[test]
    fn test_scenario_python_sql_docker() {
        let mut engine = engine();
        let result = engine.analyze(
            "Required: Python, SQL, Docker",
            "I have 3 years experience using Python and SQL daily.",
        );

        assert!(result
            .matched_skills
            .iter()
            .any(|s| s.eq_ignore_ascii_case("python")));
        assert!(result
            .matched_skills
            .iter()
            .any(|s| s.eq_ignore_ascii_case("sql")));
        assert!(result
            .missing_skills
            .iter()
            .any(|s| s.eq_ignore_ascii_case("docker")));
        assert_eq!(result.years_experience, "3+ Years");
    }

    #[test]
    fn test_empty_inputs_produce_neutral_result() {
        let mut engine = engine();
        let result = engine.analyze("", "");

        assert_eq!(result.skills_match, "0%");
        assert_eq!(result.years_experience, "Not Specified");
        assert_eq!(result.education_level, "Not Specified");
        assert_eq!(result.matched_skills, vec!["N/A"]);
        assert_eq!(result.missing_skills, vec!["N/A"]);
        assert!(result.relevance_score <= 100);
    }

    #[test]
    fn test_empty_job_description_with_resume() {
        let mut engine = engine();
        let result = engine.analyze("", "Anything");
        assert_eq!(result.skills_match, "0%");
    }

    #[test]
    fn test_quality_signals_scenario() {
        let mut engine = engine();
        let result = engine.analyze(
            "Required: Python",
            "Increased revenue by 20% and led a team of five engineers.",
        );

        assert!(result.has_quantifiable_results);
        assert!(result.uses_action_verbs);
    }

    #[test]
    fn test_no_signals_scenario() {
        let mut engine = engine();
        let result = engine.analyze("Required: Python", "Responsible for documentation tasks.");

        assert!(!result.has_quantifiable_results);
        assert!(!result.uses_action_verbs);
    }

    #[test]
    fn test_zero_matches_penalizes_recommendation() {
        let mut engine = engine();
        let result = engine.analyze(
            "Required: Kubernetes, Terraform, Ansible, Prometheus, Grafana",
            "Responsible for documentation tasks.",
        );

        assert_eq!(result.skills_match, "0%");
        // missing capped at 3, 5 points each
        assert_eq!(result.missing_skills.len(), 3);
        assert_eq!(
            result.recommendation_score,
            result.relevance_score.saturating_sub(15)
        );
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let mut engine = engine();
        let repeated = "Python ".repeat(500);
        let inputs = [
            ("", ""),
            ("Python", repeated.as_str()),
            ("Required: a, b, c", "led built designed 99% 2010 2024"),
        ];
        for (jd, resume) in inputs {
            let result = engine.analyze(jd, resume);
            assert!(result.relevance_score <= 100);
            assert!(result.recommendation_score <= 100);
        }
    }

    #[test]
    fn test_determinism_and_cache() {
        let mut engine = engine();
        let first = engine.analyze("Required: Python, SQL", "Python daily for 4 years");
        let second = engine.analyze("Required: Python, SQL", "Python daily for 4 years");

        assert_eq!(first, second);
        assert_eq!(engine.cache_size(), 1);
    }

    #[test]
    fn test_monotonicity_adding_required_skills() {
        let mut engine = engine();
        let jd = "Required: Python, SQL, Docker, Kubernetes";
        let before = engine.analyze(jd, "I write Python.");
        let after = engine.analyze(jd, "I write Python and SQL on Docker.");

        let pct = |r: &AnalysisResult| {
            r.skills_match
                .trim_end_matches('%')
                .parse::<u32>()
                .unwrap()
        };
        assert!(pct(&after) >= pct(&before));
        assert!(after.relevance_score >= before.relevance_score);
    }

    #[test]
    fn test_matched_and_missing_disjoint() {
        let mut engine = engine();
        let result = engine.analyze(
            "Required: Python, SQL, Docker, Kubernetes, Terraform",
            "Python and Kubernetes in production.",
        );

        for skill in &result.matched_skills {
            assert!(!result
                .missing_skills
                .iter()
                .any(|m| m.eq_ignore_ascii_case(skill)));
        }
    }

    #[test]
    fn test_neutral_experience_when_unknown() {
        let mut engine = engine();
        // identical skill profile, one with unknown experience
        let known = engine.analyze("Required: Python", "Python, 10 years experience");
        let unknown = engine.analyze("Required: Python", "Python is my tool");

        assert_eq!(known.years_experience, "10+ Years");
        assert_eq!(unknown.years_experience, "Not Specified");
        // saturated experience term (100) beats the neutral 50
        assert!(known.relevance_score > unknown.relevance_score);
    }

    #[test]
    fn test_summary_reports_fields_in_order() {
        let mut engine = engine();
        let result = engine.analyze(
            "Required: Python, SQL",
            "Python for 3 years, improved throughput 40%, led migrations.",
        );

        let summary = &result.recommendation_summary;
        let pct_pos = summary.find('%').unwrap();
        let exp_pos = summary.find("Estimated experience").unwrap();
        let quant_pos = summary.find("Quantifiable results").unwrap();
        let verbs_pos = summary.find("Action verbs").unwrap();
        let score_pos = summary.find("recommendation score").unwrap();
        assert!(pct_pos < exp_pos && exp_pos < quant_pos);
        assert!(quant_pos < verbs_pos && verbs_pos < score_pos);
    }
}
