//! Deterministic scoring engine
//! Rule-based analysis of a resume against a job description: vocabulary
//! extraction, exact skill matching, heuristic signals, and a transparent
//! weighted score.

pub mod cache;
pub mod matcher;
pub mod normalizer;
pub mod quality;
pub mod scorer;
pub mod signals;
pub mod vocabulary;

pub use scorer::{AnalysisResult, ScoringEngine};
