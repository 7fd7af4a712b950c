//! Report formatters: console, JSON, and markdown

use crate::analysis::service::AnalysisReport;
use crate::config::OutputFormat;
use crate::error::{Result, ResumeInsightError};
use colored::Colorize;
use std::fmt::Write as _;

/// Trait for rendering a full analysis report.
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors.
pub struct ConsoleFormatter {
    use_colors: bool,
    show_contexts: bool,
}

/// JSON formatter for piping into other tools.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports.
pub struct MarkdownFormatter;

/// Coordinates the individual formatters.
pub struct ReportGenerator {
    console: ConsoleFormatter,
    json: JsonFormatter,
    markdown: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, show_contexts: bool) -> Self {
        Self {
            use_colors,
            show_contexts,
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "red" => text.red().to_string(),
            "cyan" => text.cyan().to_string(),
            "bold" => text.bold().to_string(),
            _ => text.to_string(),
        }
    }

    fn score_color(score: f64, max: f64) -> &'static str {
        let pct = if max > 0.0 { score / max * 100.0 } else { 0.0 };
        if pct >= 80.0 {
            "green"
        } else if pct >= 50.0 {
            "yellow"
        } else {
            "red"
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();
        let w = &mut out;

        writeln!(w, "{}", self.paint("RESUME ANALYSIS REPORT", "bold")).ok();
        writeln!(w, "{}", "=".repeat(60)).ok();

        // Health
        writeln!(
            w,
            "\n{} {:.1}/100 ({})",
            self.paint("Resume Health:", "bold"),
            report.health.overall_score,
            self.paint(
                &report.health.status,
                Self::score_color(report.health.overall_score, 100.0)
            )
        )
        .ok();

        // ATS
        writeln!(
            w,
            "\n{} {:.1}/100, grade {}",
            self.paint("ATS Score:", "bold"),
            report.ats.overall_score,
            self.paint(
                &report.ats.grade,
                Self::score_color(report.ats.overall_score, 100.0)
            )
        )
        .ok();
        writeln!(w, "  {}", report.ats.feedback).ok();
        for (name, score, max) in report.ats.breakdown.categories() {
            writeln!(
                w,
                "  {:<14} {}",
                format!("{}:", name),
                self.paint(
                    &format!("{:.1}/{:.0}", score, max),
                    Self::score_color(score, max)
                )
            )
            .ok();
        }

        // Skills
        writeln!(
            w,
            "\n{} {} found",
            self.paint("Skills:", "bold"),
            report.skills.total_skills
        )
        .ok();
        if !report.skills.extracted_skills.is_empty() {
            writeln!(w, "  {}", report.skills.extracted_skills.join(", ")).ok();
        }
        if !report.skills.high_confidence_skills.is_empty() {
            writeln!(
                w,
                "  High confidence: {}",
                self.paint(&report.skills.high_confidence_skills.join(", "), "green")
            )
            .ok();
        }
        if self.show_contexts {
            for skill in &report.skills.skill_details {
                for context in &skill.contexts {
                    writeln!(w, "    [{}] ...{}...", skill.name, context).ok();
                }
            }
        }
        if !report.skills.certifications.is_empty() {
            writeln!(
                w,
                "  Certifications: {}",
                report.skills.certifications.join(", ")
            )
            .ok();
        }

        // Experience
        if report.experience.max_years > 0 {
            writeln!(
                w,
                "\n{} up to {} years",
                self.paint("Experience:", "bold"),
                report.experience.max_years
            )
            .ok();
        }
        for edu in &report.experience.education {
            writeln!(w, "  {} in {}", edu.degree, edu.major).ok();
        }

        // Role matches
        writeln!(w, "\n{}", self.paint("Top Role Matches", "bold")).ok();
        for (i, role) in report.role_matching.top_matches.iter().enumerate() {
            writeln!(
                w,
                "  {}. {:<32} {} ({} confidence)",
                i + 1,
                role.role,
                self.paint(
                    &format!("{:.1}", role.overall_score),
                    Self::score_color(role.overall_score, 100.0)
                ),
                role.confidence
            )
            .ok();
            if !role.missing.critical.is_empty() {
                writeln!(w, "     Missing: {}", role.missing.critical.join(", ")).ok();
            }
            for insight in &role.insights {
                writeln!(w, "     {}", insight).ok();
            }
        }

        // JD match
        if let Some(jd) = &report.jd_match {
            writeln!(
                w,
                "\n{} {:.1}/100, {}",
                self.paint("Job Description Match:", "bold"),
                jd.match_score,
                jd.grade
            )
            .ok();
            writeln!(
                w,
                "  Keywords: {:.1}%  Skills: {:.1}%",
                jd.breakdown.keyword_match, jd.breakdown.skill_match
            )
            .ok();
            if !jd.missing_must_have.is_empty() {
                writeln!(
                    w,
                    "  {} {}",
                    self.paint("Must-have gaps:", "red"),
                    jd.missing_must_have.join(", ")
                )
                .ok();
            }
            if !jd.missing_nice_to_have.is_empty() {
                writeln!(
                    w,
                    "  Nice-to-have gaps: {}",
                    jd.missing_nice_to_have.join(", ")
                )
                .ok();
            }
            for tip in &jd.tailored_tips {
                writeln!(w, "  Tip: {}", tip).ok();
            }
        }

        // Recommendations
        if !report.recommendations.is_empty() {
            writeln!(w, "\n{}", self.paint("Recommendations", "bold")).ok();
            for rec in &report.recommendations {
                writeln!(w, "  - {}", rec).ok();
            }
        }

        if !report.priority_actions.is_empty() {
            writeln!(w, "\n{}", self.paint("Priority Actions", "bold")).ok();
            for action in &report.priority_actions {
                let color = if action.priority == "CRITICAL" { "red" } else { "yellow" };
                writeln!(
                    w,
                    "  [{}] {}: {}",
                    self.paint(&action.priority, color),
                    action.action,
                    action.description
                )
                .ok();
                for step in &action.steps {
                    writeln!(w, "      * {}", step).ok();
                }
            }
        }

        writeln!(w, "\n{}", self.paint("Insights", "bold")).ok();
        for insight in &report.insights {
            writeln!(
                w,
                "  {} [{}]: {}",
                insight.category, insight.impact, insight.insight
            )
            .ok();
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();
        let w = &mut out;

        writeln!(w, "# Resume Analysis Report\n").ok();
        writeln!(w, "Generated: {}\n", report.generated_at.format("%Y-%m-%d %H:%M UTC")).ok();

        writeln!(w, "## Resume Health\n").ok();
        writeln!(
            w,
            "**{:.1}/100** ({})\n",
            report.health.overall_score, report.health.status
        )
        .ok();

        writeln!(w, "## ATS Compatibility\n").ok();
        writeln!(
            w,
            "Score: **{:.1}/100**, grade **{}**\n\n{}\n",
            report.ats.overall_score, report.ats.grade, report.ats.feedback
        )
        .ok();
        writeln!(w, "| Category | Score | Max |").ok();
        writeln!(w, "|----------|-------|-----|").ok();
        for (name, score, max) in report.ats.breakdown.categories() {
            writeln!(w, "| {} | {:.1} | {:.0} |", name, score, max).ok();
        }
        if !report.ats.suggestions.is_empty() {
            writeln!(w, "\n### Suggestions\n").ok();
            for suggestion in &report.ats.suggestions {
                writeln!(w, "- {}", suggestion).ok();
            }
        }

        writeln!(w, "\n## Skills ({})\n", report.skills.total_skills).ok();
        if !report.skills.extracted_skills.is_empty() {
            writeln!(w, "{}\n", report.skills.extracted_skills.join(", ")).ok();
        }
        if !report.skills.certifications.is_empty() {
            writeln!(
                w,
                "Certifications: {}\n",
                report.skills.certifications.join(", ")
            )
            .ok();
        }

        writeln!(w, "## Top Role Matches\n").ok();
        writeln!(w, "| # | Role | Score | Confidence |").ok();
        writeln!(w, "|---|------|-------|------------|").ok();
        for (i, role) in report.role_matching.top_matches.iter().enumerate() {
            writeln!(
                w,
                "| {} | {} | {:.1} | {} |",
                i + 1,
                role.role,
                role.overall_score,
                role.confidence
            )
            .ok();
        }

        if let Some(jd) = &report.jd_match {
            writeln!(w, "\n## Job Description Match\n").ok();
            writeln!(
                w,
                "Score: **{:.1}/100**, {}\n",
                jd.match_score, jd.grade
            )
            .ok();
            if !jd.missing_must_have.is_empty() {
                writeln!(w, "Must-have gaps: {}\n", jd.missing_must_have.join(", ")).ok();
            }
            if !jd.recommendations.is_empty() {
                writeln!(w, "### Recommendations\n").ok();
                for rec in &jd.recommendations {
                    writeln!(w, "- {}", rec).ok();
                }
            }
        }

        if !report.recommendations.is_empty() {
            writeln!(w, "\n## Overall Recommendations\n").ok();
            for rec in &report.recommendations {
                writeln!(w, "- {}", rec).ok();
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, show_contexts: bool) -> Self {
        Self {
            console: ConsoleFormatter::new(use_colors, show_contexts),
            json: JsonFormatter::new(true),
            markdown: MarkdownFormatter,
        }
    }

    pub fn format(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console.format_report(report),
            OutputFormat::Json => self.json.format_report(report),
            OutputFormat::Markdown => self.markdown.format_report(report),
        }
    }

    pub fn save_to_file(
        &self,
        report: &AnalysisReport,
        format: OutputFormat,
        path: &std::path::Path,
    ) -> Result<()> {
        // Never write ANSI escapes into files
        let rendered = match format {
            OutputFormat::Console => {
                ConsoleFormatter::new(false, self.console.show_contexts).format_report(report)?
            }
            other => self.format(report, other)?,
        };
        std::fs::write(path, rendered).map_err(|e| {
            ResumeInsightError::OutputFormatting(format!(
                "failed to write {}: {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisService;
    use crate::catalog;

    fn sample_report() -> AnalysisReport {
        let service = AnalysisService::new(catalog::builtin()).unwrap();
        service.analyze(
            "Experience: Built Python ETL pipelines since 2019.\n\
             Education: Bachelor of Science in Data Science\n\
             Skills: python, sql, docker\n\
             email: a@b.com, linkedin.com/in/x",
            None,
        )
    }

    #[test]
    fn console_output_mentions_key_sections() {
        let report = sample_report();
        let rendered = ConsoleFormatter::new(false, false)
            .format_report(&report)
            .unwrap();
        assert!(rendered.contains("RESUME ANALYSIS REPORT"));
        assert!(rendered.contains("ATS Score:"));
        assert!(rendered.contains("Top Role Matches"));
        // Without colors there must be no ANSI escapes
        assert!(!rendered.contains('\u{1b}'));
    }

    #[test]
    fn json_output_is_valid_and_round_trips() {
        let report = sample_report();
        let rendered = JsonFormatter::new(false).format_report(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.ats.overall_score, report.ats.overall_score);
    }

    #[test]
    fn markdown_output_has_tables() {
        let report = sample_report();
        let rendered = MarkdownFormatter.format_report(&report).unwrap();
        assert!(rendered.starts_with("# Resume Analysis Report"));
        assert!(rendered.contains("| Category | Score | Max |"));
        assert!(rendered.contains("## Top Role Matches"));
    }
}
