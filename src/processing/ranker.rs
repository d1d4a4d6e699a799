//! Ranking of enhanced match scores into presentable results

use crate::input::JobPosting;
use crate::processing::enhancer::{SUPPORT_RESUME_TERMS, SUPPORT_ROLE_PHRASES};
use crate::processing::keywords::CompiledKeywordTable;
use crate::processing::tokens::TokenizedText;
use serde::{Deserialize, Serialize};

/// Phrase family signaling direct help desk experience.
const HELP_DESK_PHRASES: &[&str] = &["help desk", "helpdesk", "service desk"];
/// Terms signaling enterprise-scale environments.
const ENTERPRISE_TERMS: &[&str] = &["enterprise", "corporate"];

/// Most factors listed per match.
const MAX_KEY_FACTORS: usize = 5;
/// Most table keywords cited among those factors.
const MAX_KEYWORD_FACTORS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchQuality {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl MatchQuality {
    pub fn from_score(score: f32) -> Self {
        if score >= 0.8 {
            MatchQuality::Excellent
        } else if score >= 0.6 {
            MatchQuality::Good
        } else if score >= 0.4 {
            MatchQuality::Fair
        } else if score >= 0.2 {
            MatchQuality::Poor
        } else {
            MatchQuality::VeryPoor
        }
    }
}

impl std::fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MatchQuality::Excellent => "Excellent",
            MatchQuality::Good => "Good",
            MatchQuality::Fair => "Fair",
            MatchQuality::Poor => "Poor",
            MatchQuality::VeryPoor => "Very Poor",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// 1-based position after sorting.
    pub rank: usize,
    pub score: f32,
    pub percentage: f32,
    pub quality: MatchQuality,
    pub job: JobPosting,
    pub key_factors: Vec<String>,
}

pub struct MatchRanker;

impl MatchRanker {
    /// Sort (job, blob, enhanced score) triples by score descending and build
    /// the top-N results. The sort is stable: exact ties keep input order.
    pub fn rank(
        table: &CompiledKeywordTable,
        resume: &TokenizedText,
        mut scored: Vec<(JobPosting, String, f32)>,
        top_n: usize,
    ) -> Vec<MatchResult> {
        scored.sort_by(|a, b| {
            b.2.partial_cmp(&a.2)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored
            .into_iter()
            .take(top_n)
            .enumerate()
            .map(|(index, (job, blob, score))| {
                let job_tokens = TokenizedText::new(&blob);
                let key_factors = Self::key_factors(table, &job_tokens, resume);
                MatchResult {
                    rank: index + 1,
                    score,
                    percentage: (score * 1000.0).round() / 10.0,
                    quality: MatchQuality::from_score(score),
                    job,
                    key_factors,
                }
            })
            .collect()
    }

    /// Up to five human-readable reasons the posting matched, in priority
    /// order: shared weight-table keywords first, then role alignment notes.
    fn key_factors(
        table: &CompiledKeywordTable,
        job: &TokenizedText,
        resume: &TokenizedText,
    ) -> Vec<String> {
        let mut factors = Vec::new();

        for entry in table.iter() {
            if factors.len() >= MAX_KEYWORD_FACTORS {
                break;
            }
            if job.contains_all_words(&entry.normalized)
                && resume.contains_all_words(&entry.normalized)
            {
                factors.push(format!("Matched skill: {}", entry.keyword));
            }
        }

        if job.contains_any(SUPPORT_ROLE_PHRASES) && resume.contains_any(SUPPORT_RESUME_TERMS) {
            factors.push("Support role alignment".to_string());
        }
        if job.contains_any(HELP_DESK_PHRASES) && resume.contains_any(HELP_DESK_PHRASES) {
            factors.push("Help desk experience".to_string());
        }
        if job.contains_any(ENTERPRISE_TERMS) && resume.contains_any(ENTERPRISE_TERMS) {
            factors.push("Enterprise environment experience".to_string());
        }

        factors.truncate(MAX_KEY_FACTORS);
        factors
    }
}
