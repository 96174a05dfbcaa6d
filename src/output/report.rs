//! Screening report structures

use crate::engine::quality::ResumeQuality;
use crate::engine::scorer::AnalysisResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full screening report: the engine's analysis result plus the verdict
/// band, resume quality panel, and generation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub result: AnalysisResult,
    pub verdict: Verdict,
    pub quality: ResumeQuality,
    pub metadata: ReportMetadata,
}

/// Recommendation band derived from the recommendation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    HighlyRecommended,
    WorthConsidering,
    NotRecommended,
}

impl Verdict {
    pub fn from_score(recommendation_score: u32) -> Self {
        if recommendation_score >= 80 {
            Verdict::HighlyRecommended
        } else if recommendation_score >= 60 {
            Verdict::WorthConsidering
        } else {
            Verdict::NotRecommended
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::HighlyRecommended => "Highly Recommended",
            Verdict::WorthConsidering => "Worth Considering",
            Verdict::NotRecommended => "Not Recommended",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub screener_version: String,
    pub resume_file: String,
    pub job_file: String,
    pub processing_time_ms: u64,
}

impl ScreeningReport {
    pub fn new(
        result: AnalysisResult,
        quality: ResumeQuality,
        resume_file: String,
        job_file: String,
        processing_time_ms: u64,
    ) -> Self {
        let verdict = Verdict::from_score(result.recommendation_score);

        Self {
            result,
            verdict,
            quality,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                screener_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file,
                job_file,
                processing_time_ms,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_bands() {
        assert_eq!(Verdict::from_score(95), Verdict::HighlyRecommended);
        assert_eq!(Verdict::from_score(80), Verdict::HighlyRecommended);
        assert_eq!(Verdict::from_score(79), Verdict::WorthConsidering);
        assert_eq!(Verdict::from_score(60), Verdict::WorthConsidering);
        assert_eq!(Verdict::from_score(59), Verdict::NotRecommended);
        assert_eq!(Verdict::from_score(0), Verdict::NotRecommended);
    }
}
