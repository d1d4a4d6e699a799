//! Bounded domain-knowledge score enhancement
//!
//! Adds a keyword-weighted boost on top of the raw cosine similarity. The
//! accumulated enhancement is capped before it touches the base score, so
//! keyword stuffing can never dominate genuine semantic similarity.

use crate::processing::keywords::CompiledKeywordTable;
use crate::processing::tokens::TokenizedText;

/// Boost per weight unit for a table keyword present in both texts.
pub const KEYWORD_BOOST: f32 = 0.01;
/// Bonus when the posting is a support role and the resume shows support work.
pub const SUPPORT_ROLE_BONUS: f32 = 0.02;
/// Bonus per seniority band signaled by both posting and resume.
pub const SENIORITY_BONUS: f32 = 0.01;
/// Ceiling on the total enhancement, applied before the base score.
pub const ENHANCEMENT_CAP: f32 = 0.15;

/// Support-role phrases looked for in the job blob (normalized forms; a
/// literal "IT support" normalizes to the expanded phrase).
pub const SUPPORT_ROLE_PHRASES: &[&str] = &[
    "help desk",
    "service desk",
    "desktop support",
    "technical support",
    "information technology support",
];

/// Generic support terms looked for in the resume.
pub const SUPPORT_RESUME_TERMS: &[&str] = &["support", "helpdesk", "troubleshooting", "customer"];

/// Seniority bands; both sides must signal the same band.
pub const ENTRY_TERMS: &[&str] = &["entry level", "entry-level", "junior", "associate"];
pub const SENIOR_TERMS: &[&str] = &["senior", "lead", "principal"];

pub struct DomainScoreEnhancer;

impl DomainScoreEnhancer {
    /// Enhanced score: `base + min(enhancement, 0.15)`, capped at 1.0.
    /// Monotonic in the base score and never below it.
    pub fn enhance(
        table: &CompiledKeywordTable,
        base: f32,
        job: &TokenizedText,
        resume: &TokenizedText,
    ) -> f32 {
        let mut enhancement = 0.0f32;

        for entry in table.iter() {
            if job.contains_all_words(&entry.normalized)
                && resume.contains_all_words(&entry.normalized)
            {
                enhancement += KEYWORD_BOOST * entry.weight as f32;
            }
        }

        if job.contains_any(SUPPORT_ROLE_PHRASES) && resume.contains_any(SUPPORT_RESUME_TERMS) {
            enhancement += SUPPORT_ROLE_BONUS;
        }
        if job.contains_any(ENTRY_TERMS) && resume.contains_any(ENTRY_TERMS) {
            enhancement += SENIORITY_BONUS;
        }
        if job.contains_any(SENIOR_TERMS) && resume.contains_any(SENIOR_TERMS) {
            enhancement += SENIORITY_BONUS;
        }

        (base + enhancement.min(ENHANCEMENT_CAP)).min(1.0)
    }
}
