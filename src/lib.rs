//! Resume screener library

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod output;
pub mod summarizer;

pub use config::Config;
pub use engine::scorer::{AnalysisResult, ScoringEngine};
pub use error::{Result, ResumeScreenerError};
