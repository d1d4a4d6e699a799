//! Bias detection for job posting language
//!
//! Scans the posting text against categorized pattern groups, counts
//! inclusive-language markers and culture red flags, and rolls everything
//! into a bounded numeric score with a qualitative level.

use crate::config::BiasConfig;
use crate::error::{JobFitError, Result};
use aho_corasick::{AhoCorasick, MatchKind};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Points per matched bias pattern.
const FLAG_WEIGHT: i64 = 10;
/// Points credited back per inclusive-language occurrence.
const INCLUSIVE_CREDIT: i64 = 5;
/// Points per culture red-flag phrase.
const RED_FLAG_WEIGHT: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasCategory {
    Age,
    Gender,
    Cultural,
    Education,
    Experience,
    Appearance,
}

impl BiasCategory {
    pub fn severity(&self) -> Severity {
        match self {
            BiasCategory::Age => Severity::High,
            BiasCategory::Gender => Severity::High,
            BiasCategory::Cultural => Severity::VeryHigh,
            BiasCategory::Education => Severity::Medium,
            BiasCategory::Experience => Severity::Medium,
            BiasCategory::Appearance => Severity::High,
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            BiasCategory::Age => {
                "Remove age-coded language; describe the pace of the role through its responsibilities."
            }
            BiasCategory::Gender => {
                "Replace gender-coded terms with neutral descriptions of the skills required."
            }
            BiasCategory::Cultural => {
                "Require a specific language proficiency only where essential, not native-speaker status."
            }
            BiasCategory::Education => {
                "State the knowledge required rather than the pedigree of the institution."
            }
            BiasCategory::Experience => {
                "Avoid upper bounds on experience; describe the level of work instead."
            }
            BiasCategory::Appearance => {
                "Drop appearance requirements unless they are bona fide occupational needs."
            }
        }
    }
}

impl std::fmt::Display for BiasCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BiasCategory::Age => "age",
            BiasCategory::Gender => "gender",
            BiasCategory::Cultural => "cultural",
            BiasCategory::Education => "education",
            BiasCategory::Experience => "experience",
            BiasCategory::Appearance => "appearance",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiasLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl BiasLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            0 => BiasLevel::Excellent,
            1..=10 => BiasLevel::Good,
            11..=25 => BiasLevel::Fair,
            26..=50 => BiasLevel::Poor,
            _ => BiasLevel::VeryPoor,
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            BiasLevel::Excellent => "No biased language detected. The posting reads inclusively.",
            BiasLevel::Good => "Minor wording issues; a light editing pass is enough.",
            BiasLevel::Fair => "Several biased phrases detected; rewrite the flagged wording.",
            BiasLevel::Poor => "Substantial biased language; revise the posting before publishing.",
            BiasLevel::VeryPoor => {
                "The posting is dominated by biased language and needs a full rewrite."
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasFlag {
    pub category: BiasCategory,
    pub matched_text: String,
    pub severity: Severity,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasReport {
    pub bias_score: u32,
    pub bias_level: BiasLevel,
    pub bias_flags: Vec<BiasFlag>,
    pub inclusive_indicators: Vec<String>,
    pub red_flags: Vec<String>,
    pub recommendation: String,
}

pub struct BiasDetector {
    patterns: Vec<(BiasCategory, Vec<Regex>)>,
    inclusive: PhraseScanner,
    red_flags: PhraseScanner,
}

impl BiasDetector {
    pub fn from_config(config: &BiasConfig) -> Result<Self> {
        let categories = [
            (BiasCategory::Age, &config.age),
            (BiasCategory::Gender, &config.gender),
            (BiasCategory::Cultural, &config.cultural),
            (BiasCategory::Education, &config.education),
            (BiasCategory::Experience, &config.experience),
            (BiasCategory::Appearance, &config.appearance),
        ];

        let mut patterns = Vec::new();
        for (category, sources) in categories {
            let mut compiled = Vec::new();
            for source in sources {
                let regex = RegexBuilder::new(source)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        JobFitError::Configuration(format!(
                            "bias pattern '{}': {}",
                            source, e
                        ))
                    })?;
                compiled.push(regex);
            }
            patterns.push((category, compiled));
        }

        Ok(Self {
            patterns,
            inclusive: PhraseScanner::new(&config.inclusive_phrases)?,
            red_flags: PhraseScanner::new(&config.red_flag_phrases)?,
        })
    }

    /// Analyze a posting's language. The resume is irrelevant here.
    pub fn analyze(&self, job_text: &str) -> BiasReport {
        let mut bias_flags = Vec::new();
        for (category, regexes) in &self.patterns {
            for regex in regexes {
                for found in regex.find_iter(job_text) {
                    bias_flags.push(BiasFlag {
                        category: *category,
                        matched_text: found.as_str().to_string(),
                        severity: category.severity(),
                        recommendation: category.recommendation().to_string(),
                    });
                }
            }
        }

        let inclusive_indicators = self.inclusive.occurrences(job_text);
        let red_flags = self.red_flags.occurrences(job_text);

        let raw_score = FLAG_WEIGHT * bias_flags.len() as i64
            - INCLUSIVE_CREDIT * inclusive_indicators.len() as i64
            + RED_FLAG_WEIGHT * red_flags.len() as i64;
        let bias_score = raw_score.max(0) as u32;
        let bias_level = BiasLevel::from_score(bias_score);

        BiasReport {
            bias_score,
            bias_level,
            bias_flags,
            inclusive_indicators,
            red_flags,
            recommendation: bias_level.recommendation().to_string(),
        }
    }
}

/// Whole-word literal phrase counting over punctuation-squashed text.
struct PhraseScanner {
    phrases: Vec<String>,
    matcher: AhoCorasick,
}

impl PhraseScanner {
    fn new(phrases: &[String]) -> Result<Self> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(phrases)
            .map_err(|e| {
                JobFitError::Configuration(format!("phrase list: {}", e))
            })?;
        Ok(Self {
            phrases: phrases.to_vec(),
            matcher,
        })
    }

    /// One entry per occurrence, reported as the configured phrase.
    fn occurrences(&self, text: &str) -> Vec<String> {
        let squashed = Self::squash(text);
        let bytes = squashed.as_bytes();
        self.matcher
            .find_iter(&squashed)
            .filter(|found| {
                let before_ok = found.start() == 0
                    || !bytes[found.start() - 1].is_ascii_alphanumeric();
                let after_ok = found.end() == bytes.len()
                    || !bytes[found.end()].is_ascii_alphanumeric();
                before_ok && after_ok
            })
            .map(|found| self.phrases[found.pattern().as_usize()].clone())
            .collect()
    }

    /// Lowercase, drop sentence punctuation, collapse whitespace. Keeps
    /// hyphens so phrases like "fast-paced environment" stay literal.
    fn squash(text: &str) -> String {
        let mut squashed = String::with_capacity(text.len());
        let mut last_space = false;
        for c in text.chars() {
            if matches!(c, ',' | '.' | ';' | ':' | '!' | '?' | '(' | ')') {
                continue;
            }
            if c.is_whitespace() {
                if !last_space {
                    squashed.push(' ');
                }
                last_space = true;
            } else {
                for lower in c.to_lowercase() {
                    squashed.push(lower);
                }
                last_space = false;
            }
        }
        squashed.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BiasConfig;

    fn detector() -> BiasDetector {
        BiasDetector::from_config(&BiasConfig::default()).unwrap()
    }

    #[test]
    fn test_clean_posting_scores_zero() {
        let report = detector().analyze(
            "We are hiring a support technician to maintain Windows desktops \
             and resolve tickets.",
        );
        assert_eq!(report.bias_score, 0);
        assert_eq!(report.bias_level, BiasLevel::Excellent);
        assert!(report.bias_flags.is_empty());
    }

    #[test]
    fn test_rockstar_posting_flags_multiple_categories() {
        let report = detector().analyze(
            "Looking for a young, energetic rockstar developer, native English speaker",
        );

        let categories: std::collections::BTreeSet<String> = report
            .bias_flags
            .iter()
            .map(|f| format!("{:?}", f.category))
            .collect();
        assert!(categories.len() >= 3);
        assert!(categories.contains("Age"));
        assert!(categories.contains("Gender"));
        assert!(categories.contains("Cultural"));

        assert!(report.bias_score > 25);
        assert!(matches!(
            report.bias_level,
            BiasLevel::Poor | BiasLevel::VeryPoor
        ));
    }

    #[test]
    fn test_severity_per_category() {
        let report = detector().analyze("rockstar wanted, native english speaker, ivy league only");
        let severity_of = |category: BiasCategory| {
            report
                .bias_flags
                .iter()
                .find(|f| f.category == category)
                .map(|f| f.severity)
        };
        assert_eq!(severity_of(BiasCategory::Gender), Some(Severity::High));
        assert_eq!(severity_of(BiasCategory::Cultural), Some(Severity::VeryHigh));
        assert_eq!(severity_of(BiasCategory::Education), Some(Severity::Medium));
    }

    #[test]
    fn test_inclusive_language_reduces_score() {
        let biased = "We want a young team.";
        let balanced = "We want a young team. We are an equal opportunity employer \
                        and welcome applicants of all backgrounds.";

        let without = detector().analyze(biased);
        let with = detector().analyze(balanced);
        assert!(with.bias_score < without.bias_score);
        assert_eq!(with.inclusive_indicators.len(), 2);
    }

    #[test]
    fn test_red_flags_counted_through_punctuation() {
        let report = detector()
            .analyze("We work hard, play hard in a fast-paced environment. Hustle expected!");
        assert_eq!(report.red_flags.len(), 3);
        assert!(report
            .red_flags
            .contains(&"work hard play hard".to_string()));
    }

    #[test]
    fn test_score_floor_at_zero() {
        let report = detector().analyze(
            "Equal opportunity employer. Inclusive culture. We welcome all backgrounds \
             and underrepresented groups, including veterans.",
        );
        assert_eq!(report.bias_score, 0);
        assert_eq!(report.bias_level, BiasLevel::Excellent);
    }
}
