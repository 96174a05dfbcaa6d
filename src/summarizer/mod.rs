//! Optional summary polishing
//!
//! The deterministic engine composes a complete recommendation summary on
//! its own. A summarizer may rewrite that wording (never the numbers); any
//! failure here falls back to the deterministic text and is never surfaced
//! as an analysis error.

use crate::error::{Result, ResumeScreenerError};
use log::warn;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

pub trait Summarizer {
    fn polish(
        &self,
        job_description: &str,
        resume_text: &str,
        base_summary: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// No-op strategy: the deterministic summary is the final summary.
pub struct IdentitySummarizer;

impl Summarizer for IdentitySummarizer {
    async fn polish(
        &self,
        _job_description: &str,
        _resume_text: &str,
        base_summary: &str,
    ) -> Result<String> {
        Ok(base_summary.to_string())
    }
}

/// Pipes a rewrite prompt to an external command (typically an LLM CLI)
/// and reads the polished summary from its stdout.
pub struct CommandSummarizer {
    command: String,
    timeout: Duration,
}

impl CommandSummarizer {
    pub fn new(command: String, timeout_secs: u64) -> Self {
        Self {
            command,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    fn build_prompt(job_description: &str, resume_text: &str, base_summary: &str) -> String {
        format!(
            "Rewrite the following resume screening summary for a hiring manager. \
             Keep every number, percentage, and score exactly as stated; improve \
             only the wording. Reply with the rewritten summary and nothing else.\n\n\
             SUMMARY:\n{}\n\nJOB DESCRIPTION:\n{}\n\nRESUME:\n{}",
            base_summary, job_description, resume_text
        )
    }
}

impl Summarizer for CommandSummarizer {
    async fn polish(
        &self,
        job_description: &str,
        resume_text: &str,
        base_summary: &str,
    ) -> Result<String> {
        let prompt = Self::build_prompt(job_description, resume_text, base_summary);

        let mut child = Command::new("sh")
            .arg("-c")
            .arg(&self.command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                ResumeScreenerError::Summarizer(format!(
                    "Failed to spawn summarizer command '{}': {}",
                    self.command, e
                ))
            })?;

        // Feed the prompt from a separate task: a command that streams
        // output while it reads would otherwise fill the stdout pipe and
        // stop reading stdin, wedging both sides past any timeout.
        if let Some(mut stdin) = child.stdin.take() {
            tokio::spawn(async move {
                if let Err(e) = stdin.write_all(prompt.as_bytes()).await {
                    warn!("Failed to write summarizer prompt: {}", e);
                }
            });
        }

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                ResumeScreenerError::Summarizer(format!(
                    "Summarizer command timed out after {:?}",
                    self.timeout
                ))
            })?
            .map_err(|e| {
                ResumeScreenerError::Summarizer(format!("Summarizer command failed: {}", e))
            })?;

        if !output.status.success() {
            return Err(ResumeScreenerError::Summarizer(format!(
                "Summarizer command exited with {}",
                output.status
            )));
        }

        let polished = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if polished.is_empty() {
            return Err(ResumeScreenerError::Summarizer(
                "Summarizer produced no output".to_string(),
            ));
        }

        Ok(polished)
    }
}

/// Run the summarizer and substitute the deterministic summary on any
/// failure. Collaborator errors are logged, never propagated.
pub async fn polish_or_fallback<S: Summarizer>(
    summarizer: &S,
    job_description: &str,
    resume_text: &str,
    base_summary: &str,
) -> String {
    match summarizer
        .polish(job_description, resume_text, base_summary)
        .await
    {
        Ok(polished) => polished,
        Err(e) => {
            warn!("Summary polishing failed, keeping deterministic summary: {}", e);
            base_summary.to_string()
        }
    }
}
