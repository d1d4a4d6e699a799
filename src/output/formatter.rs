//! Console and JSON formatting of match and analysis results

use crate::error::{JobFitError, Result};
use crate::processing::analyzer::AnalysisReport;
use crate::processing::bias::BiasLevel;
use crate::processing::keywords::KeywordTier;
use crate::processing::ranker::{MatchQuality, MatchResult};
use colored::{Color, Colorize};
use unicode_segmentation::UnicodeSegmentation;

/// Description preview length in the match listing, in graphemes.
const PREVIEW_GRAPHEMES: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = JobFitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            other => Err(JobFitError::InvalidInput(format!(
                "unknown output format '{}' (expected console or json)",
                other
            ))),
        }
    }
}

/// Rich console presentation with optional coloring.
pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn format_matches(&self, results: &[MatchResult]) -> String {
        if results.is_empty() {
            return "No postings to rank.".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!("Top {} matches\n", results.len()));
        out.push_str(&"=".repeat(60));
        out.push('\n');

        for result in results {
            let quality = self.paint(
                &format!("{}", result.quality),
                Self::quality_color(result.quality),
            );
            out.push_str(&format!(
                "\n#{} {} — {} [{:.1}% {}]\n",
                result.rank, result.job.title, result.job.company, result.percentage, quality
            ));
            if !result.job.location.is_empty() {
                out.push_str(&format!("   {}\n", result.job.location));
            }
            if !result.job.description.is_empty() {
                out.push_str(&format!(
                    "   {}\n",
                    truncate(&result.job.description, PREVIEW_GRAPHEMES)
                ));
            }
            for factor in &result.key_factors {
                out.push_str(&format!("   * {}\n", factor));
            }
        }
        out
    }

    pub fn format_report(&self, report: &AnalysisReport) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Compatibility report: {} — {}\n",
            report.job_title, report.company
        ));
        if !report.location.is_empty() {
            out.push_str(&format!("Location: {}\n", report.location));
        }
        out.push_str(&"=".repeat(60));
        out.push('\n');

        let pct = self.paint(
            &format!("{:.1}%", report.ats.score_percentage),
            Self::percentage_color(report.ats.score_percentage),
        );
        out.push_str(&format!(
            "\nATS score: {} ({:.0} of {:.0} points)\n",
            pct, report.ats.earned_points, report.ats.possible_points
        ));

        if !report.ats.critical_matches.is_empty() {
            let matched: Vec<&str> = report
                .ats
                .critical_matches
                .iter()
                .map(|k| k.keyword.as_str())
                .collect();
            out.push_str(&format!("Matched critical: {}\n", matched.join(", ")));
        }
        if !report.ats.critical_misses.is_empty() {
            let missed: Vec<&str> = report
                .ats
                .critical_misses
                .iter()
                .map(|k| k.keyword.as_str())
                .collect();
            out.push_str(&format!(
                "Missed critical: {}\n",
                self.paint(&missed.join(", "), Color::Red)
            ));
        }

        if !report.missing_keywords.is_empty() {
            out.push_str("\nMissing keywords:\n");
            for entry in &report.missing_keywords {
                let tier = match entry.tier {
                    KeywordTier::Critical => self.paint("critical", Color::Red),
                    KeywordTier::General => self.paint("general", Color::Yellow),
                };
                out.push_str(&format!(
                    "  - {} ({}, weight {:.0})\n    {}\n",
                    entry.keyword, tier, entry.importance, entry.recommendation
                ));
            }
        }

        let level = self.paint(
            &format!("{:?}", report.bias.bias_level),
            Self::bias_color(report.bias.bias_level),
        );
        out.push_str(&format!(
            "\nPosting language: {} (bias score {})\n",
            level, report.bias.bias_score
        ));
        for flag in &report.bias.bias_flags {
            out.push_str(&format!(
                "  ! [{}] \"{}\" — {}\n",
                flag.category, flag.matched_text, flag.recommendation
            ));
        }
        if !report.bias.inclusive_indicators.is_empty() {
            out.push_str(&format!(
                "  + inclusive language: {}\n",
                report.bias.inclusive_indicators.join(", ")
            ));
        }
        if !report.bias.red_flags.is_empty() {
            out.push_str(&format!(
                "  ! culture red flags: {}\n",
                report.bias.red_flags.join(", ")
            ));
        }

        out.push_str("\nRecommendations:\n");
        for line in &report.recommendations {
            out.push_str(&format!("  {}\n", line));
        }

        out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn quality_color(quality: MatchQuality) -> Color {
        match quality {
            MatchQuality::Excellent | MatchQuality::Good => Color::Green,
            MatchQuality::Fair => Color::Yellow,
            MatchQuality::Poor | MatchQuality::VeryPoor => Color::Red,
        }
    }

    fn percentage_color(percentage: f64) -> Color {
        if percentage >= 60.0 {
            Color::Green
        } else if percentage >= 30.0 {
            Color::Yellow
        } else {
            Color::Red
        }
    }

    fn bias_color(level: BiasLevel) -> Color {
        match level {
            BiasLevel::Excellent | BiasLevel::Good => Color::Green,
            BiasLevel::Fair => Color::Yellow,
            BiasLevel::Poor | BiasLevel::VeryPoor => Color::Red,
        }
    }
}

pub fn matches_to_json(results: &[MatchResult]) -> Result<String> {
    serde_json::to_string_pretty(results).map_err(JobFitError::from)
}

pub fn report_to_json(report: &AnalysisReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(JobFitError::from)
}

/// Grapheme-safe preview truncation.
fn truncate(text: &str, max_graphemes: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() <= max_graphemes {
        text.to_string()
    } else {
        format!("{}...", graphemes[..max_graphemes].concat())
    }
}
