//! Output formatters: console, JSON, Markdown, HTML, and flat-text report

use crate::config::OutputFormat;
use crate::engine::quality::ResumeQuality;
use crate::engine::scorer::AnalysisResult;
use crate::error::Result;
use crate::output::report::{ScreeningReport, Verdict};
use askama::Template;
use colored::Colorize;
use std::fmt::Write;

/// Trait for rendering screening reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
}

/// Console formatter with colored verdict banding
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and API integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing and documentation
pub struct MarkdownFormatter;

/// HTML formatter with skill badges
pub struct HtmlFormatter;

/// Flat-text report in the downloadable-report layout
pub struct TextReportFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn verdict_line(&self, report: &ScreeningReport) -> String {
        let text = format!(
            "{} ({}%)",
            report.verdict.label(),
            report.result.recommendation_score
        );
        if !self.use_colors {
            return text;
        }
        match report.verdict {
            Verdict::HighlyRecommended => text.green().bold().to_string(),
            Verdict::WorthConsidering => text.yellow().bold().to_string(),
            Verdict::NotRecommended => text.red().bold().to_string(),
        }
    }

    fn yes_no(value: bool) -> &'static str {
        if value {
            "Yes"
        } else {
            "No"
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut out = String::new();
        let result = &report.result;

        writeln!(out, "\n📊 Resume Screening Report").ok();
        writeln!(out, "\nFinal Verdict: {}", self.verdict_line(report)).ok();

        writeln!(out, "\n📈 Key Metrics:").ok();
        writeln!(out, "  • Relevance Score: {}%", result.relevance_score).ok();
        writeln!(out, "  • Skills Match: {}", result.skills_match).ok();
        writeln!(out, "  • Years of Experience: {}", result.years_experience).ok();
        writeln!(out, "  • Education Level: {}", result.education_level).ok();

        writeln!(out, "\n✅ Matched Skills:").ok();
        for skill in &result.matched_skills {
            writeln!(out, "  • {}", skill).ok();
        }

        writeln!(out, "\n❗ Missing Critical Skills:").ok();
        for skill in &result.missing_skills {
            writeln!(out, "  • {}", skill).ok();
        }

        writeln!(out, "\n💡 Professional Assessment:").ok();
        writeln!(out, "  {}", result.recommendation_summary).ok();

        writeln!(out, "\n📝 Resume Quality:").ok();
        writeln!(out, "  • Word Count: {}", report.quality.word_count_status).ok();
        writeln!(
            out,
            "  • Keyword Repetition: {}",
            report.quality.repetition_status
        )
        .ok();
        writeln!(
            out,
            "  • Action Verbs: {}",
            Self::yes_no(result.uses_action_verbs)
        )
        .ok();
        writeln!(
            out,
            "  • Quantifiable Results: {}",
            Self::yes_no(result.has_quantifiable_results)
        )
        .ok();

        if self.detailed {
            writeln!(out, "\n⚙️  Metadata:").ok();
            writeln!(out, "  • Resume: {}", report.metadata.resume_file).ok();
            writeln!(out, "  • Job Description: {}", report.metadata.job_file).ok();
            writeln!(
                out,
                "  • Processing Time: {}ms",
                report.metadata.processing_time_ms
            )
            .ok();
            writeln!(
                out,
                "  • Generated: {} (v{})",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.screener_version
            )
            .ok();
        }

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let result = &report.result;
        let mut out = String::new();

        writeln!(out, "# Resume Screening Report\n").ok();
        writeln!(
            out,
            "**Final Verdict:** {} ({}%)\n",
            report.verdict.label(),
            result.recommendation_score
        )
        .ok();

        writeln!(out, "## Key Metrics\n").ok();
        writeln!(out, "| Metric | Value |").ok();
        writeln!(out, "|--------|-------|").ok();
        writeln!(out, "| Relevance Score | {}% |", result.relevance_score).ok();
        writeln!(out, "| Skills Match | {} |", result.skills_match).ok();
        writeln!(out, "| Years of Experience | {} |", result.years_experience).ok();
        writeln!(out, "| Education Level | {} |", result.education_level).ok();

        writeln!(out, "\n## Matched Skills\n").ok();
        for skill in &result.matched_skills {
            writeln!(out, "- {}", skill).ok();
        }

        writeln!(out, "\n## Missing Critical Skills\n").ok();
        for skill in &result.missing_skills {
            writeln!(out, "- {}", skill).ok();
        }

        writeln!(out, "\n## Professional Assessment\n").ok();
        writeln!(out, "{}", result.recommendation_summary).ok();

        writeln!(out, "\n## Resume Quality\n").ok();
        writeln!(out, "- Word Count: {}", report.quality.word_count_status).ok();
        writeln!(
            out,
            "- Keyword Repetition: {}",
            report.quality.repetition_status
        )
        .ok();
        writeln!(
            out,
            "- Uses Action Verbs: {}",
            if result.uses_action_verbs { "Yes" } else { "No" }
        )
        .ok();
        writeln!(
            out,
            "- Shows Quantifiable Results: {}",
            if result.has_quantifiable_results { "Yes" } else { "No" }
        )
        .ok();

        writeln!(
            out,
            "\n---\n*Generated by resume-screener v{} at {}*",
            report.metadata.screener_version,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M UTC")
        )
        .ok();

        Ok(out)
    }
}

/// Askama template for HTML output
#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Resume Screening Report</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; max-width: 900px; margin: 0 auto; padding: 20px; background: #f8f9fa; }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .verdict-badge { display: inline-block; padding: 8px 16px; border-radius: 20px; font-weight: bold; color: white; }
        .verdict-high { background: #28a745; }
        .verdict-mid { background: #ffc107; color: #000; }
        .verdict-low { background: #dc3545; }
        .metrics { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 15px; margin: 20px 0; }
        .metric-card { background: #F8F9FA; border-radius: 10px; padding: 15px; text-align: center; border: 1px solid #E0E0E0; }
        .metric-card p.label { font-size: 14px; color: #555; margin-bottom: 5px; font-weight: 500; }
        .metric-card p.value { font-size: 16px; font-weight: bold; color: #333; margin: 0; }
        .skill-badge { display: inline-block; padding: 6px 12px; margin: 4px; font-size: 0.9em; font-weight: 500; border-radius: 15px; }
        .matched-skill { background-color: #E0F2E9; color: #0D6938; border: 1px solid #A3D4B6; }
        .missing-skill { background-color: #FFF3D4; color: #B47D00; border: 1px solid #FFDDA0; }
        .assessment { background: #f0f7ff; border-left: 4px solid #007acc; padding: 15px; border-radius: 6px; }
        .footer { color: #888; font-size: 0.85em; margin-top: 30px; }
    </style>
</head>
<body>
<div class="container">
    <h1>Resume Screening Report</h1>
    <p>Final Verdict: <span class="verdict-badge {{ verdict_class }}">{{ verdict_label }} ({{ result.recommendation_score }}%)</span></p>

    <div class="metrics">
        <div class="metric-card"><p class="label">Relevance Score</p><p class="value">{{ result.relevance_score }}%</p></div>
        <div class="metric-card"><p class="label">Skills Match</p><p class="value">{{ result.skills_match }}</p></div>
        <div class="metric-card"><p class="label">Years of Experience</p><p class="value">{{ result.years_experience }}</p></div>
        <div class="metric-card"><p class="label">Education Level</p><p class="value">{{ result.education_level }}</p></div>
    </div>

    <h2>Matched Skills</h2>
    <div>{% for skill in result.matched_skills %}<span class="skill-badge matched-skill">{{ skill }}</span>{% endfor %}</div>

    <h2>Missing Critical Skills</h2>
    <div>{% for skill in result.missing_skills %}<span class="skill-badge missing-skill">{{ skill }}</span>{% endfor %}</div>

    <h2>Professional Assessment</h2>
    <p class="assessment">{{ result.recommendation_summary }}</p>

    <h2>Resume Quality</h2>
    <div class="metrics">
        <div class="metric-card"><p class="label">Word Count</p><p class="value">{{ quality.word_count_status }}</p></div>
        <div class="metric-card"><p class="label">Keyword Repetition</p><p class="value">{{ quality.repetition_status }}</p></div>
        <div class="metric-card"><p class="label">Action Verbs</p><p class="value">{{ action_verbs }}</p></div>
        <div class="metric-card"><p class="label">Quantifiable Results</p><p class="value">{{ quantifiable }}</p></div>
    </div>

    <p class="footer">Generated by resume-screener v{{ version }} at {{ generated_at }}</p>
</div>
</body>
</html>
"#,
    ext = "html"
)]
struct HtmlReportTemplate<'a> {
    verdict_label: &'a str,
    verdict_class: &'a str,
    result: &'a AnalysisResult,
    quality: &'a ResumeQuality,
    action_verbs: &'a str,
    quantifiable: &'a str,
    version: &'a str,
    generated_at: String,
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let verdict_class = match report.verdict {
            Verdict::HighlyRecommended => "verdict-high",
            Verdict::WorthConsidering => "verdict-mid",
            Verdict::NotRecommended => "verdict-low",
        };

        let template = HtmlReportTemplate {
            verdict_label: report.verdict.label(),
            verdict_class,
            result: &report.result,
            quality: &report.quality,
            action_verbs: if report.result.uses_action_verbs { "Yes" } else { "No" },
            quantifiable: if report.result.has_quantifiable_results { "Yes" } else { "No" },
            version: &report.metadata.screener_version,
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M UTC")
                .to_string(),
        };

        template.render().map_err(|e| {
            crate::error::ResumeScreenerError::OutputFormatting(format!(
                "HTML rendering failed: {}",
                e
            ))
        })
    }
}

impl OutputFormatter for TextReportFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let result = &report.result;
        let matched: String = result
            .matched_skills
            .iter()
            .map(|s| format!("\u{2022} {}\n", s))
            .collect();
        let missing: String = result
            .missing_skills
            .iter()
            .map(|s| format!("\u{2022} {}\n", s))
            .collect();

        Ok(format!(
            "ADVANCED RESUME ANALYSIS REPORT\n\
             ================================\n\n\
             FINAL ASSESSMENT: {} ({}%)\n\n\
             KEY METRICS:\n\
             - Relevance Score: {}%\n\
             - Skills Match: {}\n\
             - Years of Experience: {}\n\
             - Education Level: {}\n\n\
             PROFESSIONAL ASSESSMENT:\n\
             {}\n\n\
             RESUME QUALITY ANALYSIS:\n\
             - Word Count: {}\n\
             - Keyword Repetition: {}\n\
             - Uses Action Verbs: {}\n\
             - Shows Quantifiable Results: {}\n\n\
             MATCHED SKILLS:\n\
             {}\n\
             MISSING CRITICAL SKILLS:\n\
             {}\n\
             ---\n\
             Generated by resume-screener v{}\n",
            report.verdict.label(),
            result.recommendation_score,
            result.relevance_score,
            result.skills_match,
            result.years_experience,
            result.education_level,
            result.recommendation_summary,
            report.quality.word_count_status,
            report.quality.repetition_status,
            if result.uses_action_verbs { "Yes" } else { "No" },
            if result.has_quantifiable_results { "Yes" } else { "No" },
            matched,
            missing,
            report.metadata.screener_version,
        ))
    }
}

/// Coordinates formatters and routes by output format
pub struct ReportGenerator {
    use_colors: bool,
    detailed: bool,
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    pub fn generate(&self, report: &ScreeningReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => {
                ConsoleFormatter::new(self.use_colors, self.detailed).format_report(report)
            }
            OutputFormat::Json => JsonFormatter::new(true).format_report(report),
            OutputFormat::Markdown => MarkdownFormatter.format_report(report),
            OutputFormat::Html => HtmlFormatter.format_report(report),
            OutputFormat::Text => TextReportFormatter.format_report(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::engine::quality;
    use crate::engine::scorer::ScoringEngine;

    fn sample_report() -> ScreeningReport {
        let mut engine = ScoringEngine::new(&Config::default());
        let jd = "Required: Python, SQL, Docker";
        let resume = "I have 3 years experience using Python and SQL daily. Led migrations.";
        let result = engine.analyze(jd, resume);
        ScreeningReport::new(
            result,
            quality::assess(resume),
            "resume.txt".to_string(),
            "job.txt".to_string(),
            5,
        )
    }

    #[test]
    fn test_console_format_contains_key_fields() {
        let report = sample_report();
        let out = ConsoleFormatter::new(false, false)
            .format_report(&report)
            .unwrap();

        assert!(out.contains("Final Verdict"));
        assert!(out.contains("Skills Match"));
        assert!(out.contains("Python"));
        assert!(out.contains("Docker"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let report = sample_report();
        let out = JsonFormatter::new(true).format_report(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert!(parsed["result"]["relevance_score"].is_u64());
        assert_eq!(
            parsed["result"]["years_experience"],
            report.result.years_experience
        );
    }

    #[test]
    fn test_markdown_format_has_sections() {
        let report = sample_report();
        let out = MarkdownFormatter.format_report(&report).unwrap();

        assert!(out.contains("# Resume Screening Report"));
        assert!(out.contains("## Matched Skills"));
        assert!(out.contains("## Missing Critical Skills"));
    }

    #[test]
    fn test_html_format_renders_badges() {
        let report = sample_report();
        let out = HtmlFormatter.format_report(&report).unwrap();

        assert!(out.contains("matched-skill"));
        assert!(out.contains("missing-skill"));
        assert!(out.contains("Resume Screening Report"));
    }

    #[test]
    fn test_text_report_layout() {
        let report = sample_report();
        let out = TextReportFormatter.format_report(&report).unwrap();

        assert!(out.starts_with("ADVANCED RESUME ANALYSIS REPORT"));
        assert!(out.contains("FINAL ASSESSMENT:"));
        assert!(out.contains("MATCHED SKILLS:"));
        assert!(out.contains("\u{2022} Python"));
    }
}
