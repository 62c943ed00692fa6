//! Report formatters: console, JSON, and markdown output

use crate::config::OutputFormat;
use crate::error::{AtsError, Result};
use crate::processing::job_analyzer::JobAnalysis;
use crate::processing::report::{AtsReport, Grade, Priority};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering analysis reports into a printable string.
pub trait OutputFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String>;
}

/// Console formatter with colors and compact presentation.
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for piping into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saving shareable reports.
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Coordinates the individual formatters behind one entry point.
pub struct ReportGenerator {
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_grade_badge(&self, grade: Grade) -> String {
        let (badge, color) = match grade {
            Grade::Excellent => ("EXCELLENT", Color::Green),
            Grade::Good => ("GOOD", Color::BrightGreen),
            Grade::Fair => ("FAIR", Color::Yellow),
            Grade::Poor => ("POOR", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_priority_icon(&self, priority: Priority) -> &'static str {
        if self.use_colors {
            match priority {
                Priority::High => "⚠️ ",
                Priority::Medium => "📋 ",
                Priority::Low => "💡 ",
            }
        } else {
            match priority {
                Priority::High => "[*] ",
                Priority::Medium => "[-] ",
                Priority::Low => "[+] ",
            }
        }
    }

    fn push_findings(&self, output: &mut String, label: &str, items: &[String], color: Color) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("  {}\n", label));
        for item in items {
            output.push_str(&format!("    • {}\n", self.colorize(item, color)));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 ATS COMPATIBILITY ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));

        output.push_str(&self.format_header("Overall", 2));
        output.push_str(&format!(
            "Score: {}/100 {}\n",
            report.current_score,
            self.format_grade_badge(report.overall_grade)
        ));
        output.push_str(&format!(
            "Projected after fixes: {}/100 (+{})\n",
            report.before_after.projected_score, report.before_after.expected_increase
        ));

        if self.detailed {
            output.push_str(&self.format_header("Score Breakdown", 3));
            let b = &report.score_breakdown;
            output.push_str(&format!("  Contact details:     {:>4.1} / 15\n", b.contact));
            output.push_str(&format!("  Summary:             {:>4.1} / 20\n", b.summary));
            output.push_str(&format!("  Core competencies:   {:>4.1} / 20\n", b.skills));
            output.push_str(&format!("  Experience:          {:>4.1} / 30\n", b.experience));
            output.push_str(&format!("  Education:           {:>4.1} / 10\n", b.education));
            output.push_str(&format!("  Certs & projects:    {:>4.1} /  5\n", b.extras));
        }

        if !report.missing_elements.is_empty() {
            output.push_str(&self.format_header("Missing Elements", 2));
            for element in &report.missing_elements {
                output.push_str(&format!("  • {}\n", self.colorize(element, Color::Red)));
            }
        }

        let sections = [
            ("Format", &report.format_analysis),
            ("Content", &report.content_analysis),
        ];
        for (name, analysis) in sections {
            output.push_str(&self.format_header(&format!("{} ({}/100)", name, analysis.score), 2));
            self.push_findings(&mut output, "Strengths:", &analysis.strengths, Color::Green);
            self.push_findings(&mut output, "Issues:", &analysis.issues, Color::Yellow);
            if self.detailed {
                self.push_findings(
                    &mut output,
                    "Recommendations:",
                    &analysis.recommendations,
                    Color::Cyan,
                );
            }
        }

        let keywords = &report.keyword_analysis;
        output.push_str(&self.format_header(&format!("Keywords ({}/100)", keywords.score), 2));
        if !keywords.matched_keywords.is_empty() {
            output.push_str(&format!(
                "  Matched ({:.0}% density): {}\n",
                keywords.density,
                keywords.matched_keywords.join(", ")
            ));
        }
        if !keywords.missing_keywords.is_empty() {
            output.push_str(&format!(
                "  Missing: {}\n",
                self.colorize(&keywords.missing_keywords.join(", "), Color::Yellow)
            ));
        }
        self.push_findings(&mut output, "Recommendations:", &keywords.recommendations, Color::Cyan);

        output.push_str(&self.format_header("Prioritized Recommendations", 2));
        for rec in &report.prioritized_recommendations {
            output.push_str(&format!(
                "{}{} [{}] {}\n",
                self.format_priority_icon(rec.priority),
                rec.priority,
                rec.category,
                rec.issue
            ));
            output.push_str(&format!("    → {}\n", rec.solution));
            if self.detailed {
                output.push_str(&format!("    Impact: {}\n", rec.impact));
            }
        }

        if self.detailed {
            if !report.suggested_action_verbs.is_empty() {
                output.push_str(&self.format_header("Suggested Action Verbs", 3));
                output.push_str(&format!("  {}\n", report.suggested_action_verbs.join(", ")));
            }
            if !report.suggested_power_words.is_empty() {
                output.push_str(&self.format_header("Suggested Power Words", 3));
                output.push_str(&format!("  {}\n", report.suggested_power_words.join(", ")));
            }
        }

        output.push_str(&self.format_header("Template", 2));
        output.push_str(&format!("  {}\n", report.template_recommendation.advice));

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# ATS Compatibility Analysis\n\n");
        if self.include_metadata {
            output.push_str(&format!(
                "Generated {} by ats-analyzer v{}\n\n",
                chrono::Local::now().format("%Y-%m-%d %H:%M"),
                env!("CARGO_PKG_VERSION")
            ));
        }

        output.push_str(&format!(
            "**Score: {}/100 ({})** (projected {}/100 after fixes)\n\n",
            report.current_score, report.overall_grade, report.before_after.projected_score
        ));

        if !report.missing_elements.is_empty() {
            output.push_str("## Missing Elements\n\n");
            for element in &report.missing_elements {
                output.push_str(&format!("- {}\n", element));
            }
            output.push('\n');
        }

        output.push_str("## Dimension Scores\n\n");
        output.push_str("| Dimension | Score |\n|---|---|\n");
        output.push_str(&format!("| Format | {} |\n", report.format_analysis.score));
        output.push_str(&format!("| Keywords | {} |\n", report.keyword_analysis.score));
        output.push_str(&format!("| Content | {} |\n\n", report.content_analysis.score));

        output.push_str("## Recommendations\n\n");
        for rec in &report.prioritized_recommendations {
            output.push_str(&format!(
                "- **{}** ({}): {}. {}\n",
                rec.priority, rec.category, rec.issue, rec.solution
            ));
        }
        output.push('\n');

        if !report.keyword_analysis.missing_keywords.is_empty() {
            output.push_str("## Missing Keywords\n\n");
            output.push_str(&format!(
                "{}\n\n",
                report.keyword_analysis.missing_keywords.join(", ")
            ));
        }

        if !report.suggested_action_verbs.is_empty() {
            output.push_str("## Suggested Action Verbs\n\n");
            output.push_str(&format!("{}\n\n", report.suggested_action_verbs.join(", ")));
        }

        output.push_str(&format!("_{}_\n", report.template_recommendation.advice));

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console: ConsoleFormatter::new(use_colors, detailed),
            json: JsonFormatter::new(true),
            markdown: MarkdownFormatter::new(true),
        }
    }

    pub fn format(&self, report: &AtsReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console.format_report(report),
            OutputFormat::Json => self.json.format_report(report),
            OutputFormat::Markdown => self.markdown.format_report(report),
        }
    }

    /// Render an analyzed job posting.
    pub fn format_job_analysis(&self, analysis: &JobAnalysis, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(analysis)?),
            OutputFormat::Console => {
                let mut output = String::new();
                output.push_str(&self.console.format_header("💼 JOB DESCRIPTION ANALYSIS", 1));
                output.push_str(&format!("Keywords: {}\n", analysis.keywords.join(", ")));
                output.push_str(&format!(
                    "Required skills: {}\n",
                    analysis.required_skills.join(", ")
                ));
                output.push_str(&format!("Soft skills: {}\n", analysis.soft_skills.join(", ")));
                Ok(output)
            }
            OutputFormat::Markdown => {
                let mut output = String::new();
                output.push_str("# Job Description Analysis\n\n");
                output.push_str(&format!("- Keywords: {}\n", analysis.keywords.join(", ")));
                output.push_str(&format!(
                    "- Required skills: {}\n",
                    analysis.required_skills.join(", ")
                ));
                output.push_str(&format!("- Soft skills: {}\n", analysis.soft_skills.join(", ")));
                Ok(output)
            }
        }
    }

    /// Write rendered output to a file.
    pub fn save_to_file(&self, content: &str, path: &Path) -> Result<()> {
        std::fs::write(path, content)
            .map_err(|e| AtsError::OutputFormatting(format!("Failed to save report: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::engine::ScoringEngine;
    use crate::processing::resume::ResumeData;

    fn sample_report() -> AtsReport {
        let engine = ScoringEngine::new().unwrap();
        engine.score_resume(&ResumeData::default(), None)
    }

    #[test]
    fn test_console_output_mentions_score_and_grade() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.contains("Score: 0/100"));
        assert!(output.contains("[POOR]"));
        assert!(output.contains("Missing Elements"));
    }

    #[test]
    fn test_json_output_is_parseable() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["currentScore"], 0);
        assert_eq!(value["overallGrade"], "Poor");
    }

    #[test]
    fn test_markdown_output_has_sections() {
        let formatter = MarkdownFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();
        assert!(output.starts_with("# ATS Compatibility Analysis"));
        assert!(output.contains("## Recommendations"));
        assert!(output.contains("| Keywords | 50 |"));
    }
}
