//! Resume screener: deterministic resume and job description screening tool

mod cli;
mod config;
mod engine;
mod error;
mod input;
mod output;
mod summarizer;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use engine::quality;
use engine::scorer::ScoringEngine;
use error::{Result, ResumeScreenerError};
use input::manager::InputManager;
use log::{error, info, warn};
use output::formatter::ReportGenerator;
use output::report::ScreeningReport;
use std::process;
use std::time::Instant;
use summarizer::{polish_or_fallback, CommandSummarizer};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            detailed,
            output,
            save,
            polish,
        } => {
            info!("Starting resume screening analysis");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ResumeScreenerError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["txt", "md"]).map_err(|e| {
                ResumeScreenerError::InvalidInput(format!("Job description file: {}", e))
            })?;

            let output_format =
                cli::parse_output_format(&output).map_err(ResumeScreenerError::InvalidInput)?;

            let mut input_manager = InputManager::new();

            info!("Extracting resume text from {}", resume.display());
            let resume_text = input_manager.extract_text(&resume).await?;

            info!("Extracting job description text from {}", job.display());
            let job_text = input_manager.extract_text(&job).await?;

            info!(
                "Extracted {} resume chars, {} job description chars",
                resume_text.len(),
                job_text.len()
            );

            let started = Instant::now();
            let mut engine = ScoringEngine::new(&config);
            let mut result = engine.analyze(&job_text, &resume_text);
            let elapsed_ms = started.elapsed().as_millis() as u64;

            if polish || config.summarizer.enabled {
                match &config.summarizer.command {
                    Some(command) => {
                        info!("Polishing summary via external command");
                        let polisher = CommandSummarizer::new(
                            command.clone(),
                            config.summarizer.timeout_secs,
                        );
                        result.recommendation_summary = polish_or_fallback(
                            &polisher,
                            &job_text,
                            &resume_text,
                            &result.recommendation_summary,
                        )
                        .await;
                    }
                    None => {
                        warn!("Summary polishing requested but no summarizer command configured");
                    }
                }
            }

            let resume_quality = quality::assess(&resume_text);
            let report = ScreeningReport::new(
                result,
                resume_quality,
                resume.to_string_lossy().to_string(),
                job.to_string_lossy().to_string(),
                elapsed_ms,
            );

            // Colors only make sense on a terminal, never in a saved file.
            let use_colors = config.output.color_output && save.is_none();
            let generator = ReportGenerator::new(use_colors, detailed || config.output.detailed);
            let rendered = generator.generate(&report, &output_format)?;

            match save {
                Some(path) => {
                    tokio::fs::write(&path, &rendered).await?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            info!(
                "Screening complete: recommendation score {}",
                report.result.recommendation_score
            );
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config file: {}", Config::config_path().display());
                println!("\nScoring Weights:");
                println!("  Skills: {:.0}%", config.scoring.skill_weight * 100.0);
                println!(
                    "  Experience: {:.0}%",
                    config.scoring.experience_weight * 100.0
                );
                println!(
                    "  Quantifiable Results: {:.0}%",
                    config.scoring.quantifiable_weight * 100.0
                );
                println!(
                    "  Action Verbs: {:.0}%",
                    config.scoring.action_verb_weight * 100.0
                );
                println!(
                    "  Missing Skill Penalty: -{} per skill",
                    config.scoring.missing_skill_penalty
                );
                println!("\nEngine:");
                println!("  Vocabulary Cap: {}", config.engine.vocabulary_cap);
                println!("  Top-K Matched: {}", config.engine.top_k_matched);
                println!(
                    "  Match Denominator Cap: {}",
                    config.engine.match_denominator_cap
                );
                println!("  Caching: {}", config.engine.enable_caching);
                println!("\nSummarizer:");
                println!("  Enabled: {}", config.summarizer.enabled);
                println!(
                    "  Command: {}",
                    config.summarizer.command.as_deref().unwrap_or("(none)")
                );
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}
