//! Configuration management for the resume screener

use crate::error::{Result, ResumeScreenerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub engine: EngineConfig,
    pub summarizer: SummarizerConfig,
    pub output: OutputConfig,
}

/// Weights for the linear relevance formula. These are the contract of the
/// deterministic engine: changing them changes reported scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub skill_weight: f32,
    pub experience_weight: f32,
    pub quantifiable_weight: f32,
    pub action_verb_weight: f32,
    /// Points subtracted from the relevance score per missing skill.
    pub missing_skill_penalty: u32,
    /// Experience term when the resume gives no usable signal.
    pub neutral_experience_score: f32,
    /// Years at and beyond which the experience term saturates.
    pub max_experience_years: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of skill-vocabulary entries extracted from a job description.
    pub vocabulary_cap: usize,
    /// Vocabulary slots considered when deriving missing skills.
    pub missing_skill_window: usize,
    /// Missing skills reported, in vocabulary order.
    pub missing_skill_limit: usize,
    /// Upper clamp on the match-percentage denominator. Anti-dilution
    /// heuristic for very long job descriptions; tunable, not principled.
    pub match_denominator_cap: usize,
    /// Matched skills reported, in vocabulary order.
    pub top_k_matched: usize,
    pub enable_caching: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Run the external summary polisher after the deterministic pass.
    pub enabled: bool,
    /// External command that reads a prompt on stdin and writes a polished
    /// summary to stdout.
    pub command: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
    Text,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig {
                skill_weight: 0.55,
                experience_weight: 0.25,
                quantifiable_weight: 0.10,
                action_verb_weight: 0.10,
                missing_skill_penalty: 5,
                neutral_experience_score: 50.0,
                max_experience_years: 10,
            },
            engine: EngineConfig {
                vocabulary_cap: 60,
                missing_skill_window: 12,
                missing_skill_limit: 3,
                match_denominator_cap: 10,
                top_k_matched: 8,
                enable_caching: true,
            },
            summarizer: SummarizerConfig {
                enabled: false,
                command: None,
                timeout_secs: 30,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeScreenerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeScreenerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let config = Config::default();
        let total = config.scoring.skill_weight
            + config.scoring.experience_weight
            + config.scoring.quantifiable_weight
            + config.scoring.action_verb_weight;
        assert!((total - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_config_toml_round_trip() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.scoring.missing_skill_penalty, 5);
        assert_eq!(parsed.engine.match_denominator_cap, 10);
        assert_eq!(parsed.output.format, OutputFormat::Console);
    }
}
