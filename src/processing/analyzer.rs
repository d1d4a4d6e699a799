//! Analysis engine coordinating matching and ATS scoring
//!
//! Owns the compiled configuration and the stateless component structs.
//! Every public operation is a pure function of its inputs plus the static
//! tables; nothing is cached between calls.

use crate::config::EngineConfig;
use crate::error::{JobFitError, Result};
use crate::input::{JobPosting, ResumeProfile};
use crate::processing::ats::{ATSKeywordScorer, ATSScoreResult};
use crate::processing::bias::{BiasDetector, BiasReport};
use crate::processing::enhancer::DomainScoreEnhancer;
use crate::processing::features::JobFeatureExtractor;
use crate::processing::keywords::{CompiledKeywordTable, KeywordTier};
use crate::processing::missing::{MissingKeywordEntry, MissingKeywordIdentifier};
use crate::processing::normalizer::TextNormalizer;
use crate::processing::ranker::{MatchRanker, MatchResult};
use crate::processing::similarity::SimilarityEngine;
use crate::processing::tokens::TokenizedText;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Missing keywords reported per analysis.
const MAX_MISSING_KEYWORDS: usize = 10;
/// Missing critical keywords named in the recommendation line.
const MAX_NAMED_CRITICALS: usize = 3;

/// Terminal artifact of the per-job ATS analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub ats: ATSScoreResult,
    pub missing_keywords: Vec<MissingKeywordEntry>,
    pub bias: BiasReport,
    pub recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

pub struct AnalysisEngine {
    normalizer: TextNormalizer,
    extractor: JobFeatureExtractor,
    similarity: SimilarityEngine,
    table: CompiledKeywordTable,
    bias: BiasDetector,
}

impl AnalysisEngine {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let normalizer = TextNormalizer::new();
        let table = CompiledKeywordTable::compile(&config.keywords, &normalizer)?;
        let bias = BiasDetector::from_config(&config.bias)?;
        debug!("compiled keyword table with {} entries", table.len());

        Ok(Self {
            normalizer,
            extractor: JobFeatureExtractor::new(),
            similarity: SimilarityEngine::new(),
            table,
            bias,
        })
    }

    /// Rank postings by fit to the resume, best first, truncated to `top_n`.
    pub fn rank_jobs(
        &self,
        resume: &ResumeProfile,
        jobs: &[JobPosting],
        top_n: usize,
    ) -> Result<Vec<MatchResult>> {
        if resume.is_empty() {
            return Err(JobFitError::Validation(
                "empty resume text (full_text)".to_string(),
            ));
        }
        if jobs.is_empty() {
            return Ok(Vec::new());
        }

        let resume_text = self.normalizer.normalize(&resume.full_text);
        let blobs: Vec<String> = jobs.iter().map(|job| self.extractor.extract(job)).collect();

        let base_scores = self.similarity.score_jobs(&resume_text, &blobs)?;
        debug!("computed {} base similarity scores", base_scores.len());

        let resume_tokens = TokenizedText::new(&resume_text);
        let scored: Vec<(JobPosting, String, f32)> = jobs
            .iter()
            .cloned()
            .zip(blobs)
            .zip(base_scores)
            .map(|((job, blob), base)| {
                let job_tokens = TokenizedText::new(&blob);
                let enhanced =
                    DomainScoreEnhancer::enhance(&self.table, base, &job_tokens, &resume_tokens);
                (job, blob, enhanced)
            })
            .collect();

        let results = MatchRanker::rank(&self.table, &resume_tokens, scored, top_n);
        info!("ranked {} of {} postings", results.len(), jobs.len());
        Ok(results)
    }

    /// Full compatibility report for one job/resume pair.
    pub fn analyze_job(&self, resume: &ResumeProfile, job: &JobPosting) -> Result<AnalysisReport> {
        if resume.is_empty() {
            return Err(JobFitError::Validation(
                "empty resume text (full_text)".to_string(),
            ));
        }

        let resume_tokens = TokenizedText::new(&self.normalizer.normalize(&resume.full_text));
        let job_tokens = TokenizedText::new(&self.extractor.extract(job));

        let ats = ATSKeywordScorer::score(&self.table, &job_tokens, &resume_tokens);

        let mut missing_keywords =
            MissingKeywordIdentifier::identify(&self.table, &job_tokens, &resume_tokens);
        missing_keywords.truncate(MAX_MISSING_KEYWORDS);

        // Bias scanning wants the posting's original casing and a single
        // copy of the title.
        let bias_text = format!("{} {}", job.title, job.description);
        let bias = self.bias.analyze(&bias_text);

        let recommendations = Self::recommendations(&ats, &missing_keywords, &bias);

        info!(
            "analyzed '{}': ats {:.1}%, bias level {:?}",
            job.title, ats.score_percentage, bias.bias_level
        );

        Ok(AnalysisReport {
            job_title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            ats,
            missing_keywords,
            bias,
            recommendations,
            generated_at: Utc::now(),
        })
    }

    fn recommendations(
        ats: &ATSScoreResult,
        missing: &[MissingKeywordEntry],
        bias: &BiasReport,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        let ats_line = if ats.score_percentage < 30.0 {
            format!(
                "Low keyword alignment ({:.1}%). Mirror the posting's core terminology in your resume.",
                ats.score_percentage
            )
        } else if ats.score_percentage < 60.0 {
            format!(
                "Moderate keyword alignment ({:.1}%). Close the critical gaps listed below.",
                ats.score_percentage
            )
        } else {
            format!(
                "Good keyword alignment ({:.1}%). Fine-tune wording to match the posting.",
                ats.score_percentage
            )
        };
        recommendations.push(ats_line);

        let named_criticals: Vec<&str> = missing
            .iter()
            .filter(|entry| entry.tier == KeywordTier::Critical)
            .take(MAX_NAMED_CRITICALS)
            .map(|entry| entry.keyword.as_str())
            .collect();
        if !named_criticals.is_empty() {
            recommendations.push(format!(
                "Add these critical keywords: {}",
                named_criticals.join(", ")
            ));
        }

        if !bias.bias_flags.is_empty() {
            recommendations.push(format!(
                "The posting contains {} potentially biased phrase(s); weigh the language before applying.",
                bias.bias_flags.len()
            ));
        }
        if !bias.inclusive_indicators.is_empty() {
            recommendations.push(format!(
                "The posting uses {} inclusive language marker(s).",
                bias.inclusive_indicators.len()
            ));
        }

        recommendations
    }
}
