//! Console output formatter for analysis results

use colored::{ColoredString, Colorize};
use veracity_application::AnalysisOutput;
use veracity_domain::util::preview;
use veracity_domain::{ClassificationDetails, Outcome, OutputFormat};

/// Formats analysis results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colored output off globally when `enabled` is false
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Render in the requested format
    pub fn render(output: &AnalysisOutput, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(output),
            OutputFormat::Summary => Self::format_summary(output),
            OutputFormat::Json => Self::format_json(output),
        }
    }

    /// Format the complete result
    pub fn format(output: &AnalysisOutput) -> String {
        let report = &output.report;
        let result = &report.result;
        let assessment = &report.assessment;
        let mut out = String::new();

        out.push_str(&Self::header("Credibility Analysis"));
        out.push('\n');

        out.push_str(&format!(
            "{} {}\n",
            "Submission:".cyan().bold(),
            report.submission.modality()
        ));
        out.push_str(&format!(
            "{} {}\n\n",
            "Content:".cyan().bold(),
            preview(report.submission.snippet(), 120)
        ));

        out.push_str(&format!(
            "{} {}  {}\n",
            "Verdict:".cyan().bold(),
            Self::outcome_label(result.outcome),
            format!("({})", assessment.severity_label).dimmed()
        ));
        out.push_str(&format!(
            "{} {}/100\n",
            "Score:".cyan().bold(),
            Self::paint(result.outcome, &result.score.to_string())
        ));
        out.push_str(&format!(
            "{} {}\n",
            "Risk level:".cyan().bold(),
            assessment.risk_level.as_str()
        ));
        if let Some(content_type) = assessment.content_type {
            out.push_str(&format!(
                "{} {}\n",
                "Content type:".cyan().bold(),
                content_type.as_str()
            ));
        }
        if let Some(source_type) = assessment.source_type {
            out.push_str(&format!(
                "{} {}\n",
                "Source type:".cyan().bold(),
                source_type.as_str()
            ));
        }

        out.push_str(&Self::section_header("Findings"));
        for finding in assessment.findings {
            out.push_str(&format!("  * {}\n", finding));
        }

        out.push_str(&Self::section_header("Signals"));
        out.push_str(&Self::signals(&result.details));

        if let Some(recommendation) = &output.recommendation {
            out.push_str(&Self::section_header("Recommended Sources"));
            for source in &recommendation.sources {
                out.push_str(&format!(
                    "\n{}\n  {}\n  {}\n",
                    source.name.yellow().bold(),
                    source.url.underline(),
                    source.description
                ));
            }
            out.push_str(&format!(
                "\n{} {}\n",
                "Search:".cyan().bold(),
                recommendation.search_query
            ));
        }

        out.push_str(&Self::footer());
        out
    }

    /// Format as JSON
    pub fn format_json(output: &AnalysisOutput) -> String {
        serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
    }

    /// One-line summary
    pub fn format_summary(output: &AnalysisOutput) -> String {
        let report = &output.report;
        let mut line = format!(
            "{} {} {} {}",
            Self::outcome_label(report.result.outcome),
            format!("{:>3}", report.result.score).bold(),
            report.assessment.severity_label.dimmed(),
            preview(report.submission.snippet(), 60)
        );
        if let Some(recommendation) = &output.recommendation {
            line.push_str(&format!(
                "\n  {} {}",
                "see:".dimmed(),
                recommendation.source_names().join(", ")
            ));
        }
        line.push('\n');
        line
    }

    fn signals(details: &ClassificationDetails) -> String {
        match details {
            ClassificationDetails::Text(text) => format!(
                "  trusted terms: {}\n  questionable terms: {}\n  citations: {}\n  references: {}\n  health content: {}\n",
                text.trusted_term_count,
                text.questionable_term_count,
                Self::yes_no(text.has_citations),
                Self::yes_no(text.has_references),
                Self::yes_no(text.has_health_content)
            ),
            ClassificationDetails::Url(url) => format!(
                "  domain: {}\n  category: {}\n",
                url.domain.as_deref().unwrap_or("(none)"),
                url.category.as_str()
            ),
            ClassificationDetails::File(file) => format!(
                "  file: {} ({}, {} bytes)\n  analysis type: {}\n  complexity: {}\n  trusted indicators: {}\n  questionable indicators: {}\n",
                file.file_name,
                file.mime_type,
                file.size_bytes,
                file.analysis_type.as_str(),
                file.processing_complexity.as_str(),
                file.trusted_indicator_count,
                file.questionable_indicator_count
            ),
        }
    }

    fn outcome_label(outcome: Outcome) -> ColoredString {
        Self::paint(outcome, outcome.display_name()).bold()
    }

    fn paint(outcome: Outcome, text: &str) -> ColoredString {
        match outcome {
            Outcome::Acceptable => text.green(),
            Outcome::PartiallyAcceptable => text.yellow(),
            Outcome::Questionable => text.red(),
        }
    }

    fn yes_no(value: bool) -> &'static str {
        if value { "yes" } else { "no" }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
