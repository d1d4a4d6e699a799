//! ATS-style keyword scoring of one job/resume pair

use crate::processing::keywords::{CompiledKeywordTable, KeywordTier};
use crate::processing::tokens::TokenizedText;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredKeyword {
    pub keyword: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ATSScoreResult {
    pub score_percentage: f64,
    pub earned_points: f64,
    pub possible_points: f64,
    pub critical_matches: Vec<ScoredKeyword>,
    pub critical_misses: Vec<ScoredKeyword>,
    pub general_matches: Vec<ScoredKeyword>,
}

pub struct ATSKeywordScorer;

impl ATSKeywordScorer {
    /// Score a resume against the keywords a posting actually asks for.
    ///
    /// Only keywords present in the job text contribute to
    /// `possible_points`, for both tiers; a posting that names none of the
    /// table's keywords is a valid degenerate case scoring 0%.
    pub fn score(
        table: &CompiledKeywordTable,
        job: &TokenizedText,
        resume: &TokenizedText,
    ) -> ATSScoreResult {
        let mut earned_points = 0.0;
        let mut possible_points = 0.0;
        let mut critical_matches = Vec::new();
        let mut critical_misses = Vec::new();
        let mut general_matches = Vec::new();

        for entry in table.iter() {
            if !job.contains_phrase(&entry.normalized) {
                continue;
            }
            possible_points += entry.weight;

            let in_resume = resume.contains_phrase(&entry.normalized);
            if in_resume {
                earned_points += entry.weight;
            }

            let scored = ScoredKeyword {
                keyword: entry.keyword.clone(),
                weight: entry.weight,
            };
            match (entry.tier, in_resume) {
                (KeywordTier::Critical, true) => critical_matches.push(scored),
                (KeywordTier::Critical, false) => critical_misses.push(scored),
                (KeywordTier::General, true) => general_matches.push(scored),
                (KeywordTier::General, false) => {}
            }
        }

        let score_percentage = if possible_points > 0.0 {
            (earned_points / possible_points * 1000.0).round() / 10.0
        } else {
            0.0
        };

        ATSScoreResult {
            score_percentage,
            earned_points,
            possible_points,
            critical_matches,
            critical_misses,
            general_matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeywordWeightTable;
    use crate::processing::normalizer::TextNormalizer;

    fn score(job_text: &str, resume_text: &str) -> ATSScoreResult {
        let normalizer = TextNormalizer::new();
        let table =
            CompiledKeywordTable::compile(&KeywordWeightTable::default(), &normalizer).unwrap();
        let job = TokenizedText::new(&normalizer.normalize(job_text));
        let resume = TokenizedText::new(&normalizer.normalize(resume_text));
        ATSKeywordScorer::score(&table, &job, &resume)
    }

    #[test]
    fn test_it_support_scenario() {
        let result = score(
            "Seeking IT Support: windows, active directory, office 365 required",
            "windows 10 active directory help desk troubleshooting",
        );

        let matched: Vec<&str> = result
            .critical_matches
            .iter()
            .map(|k| k.keyword.as_str())
            .collect();
        assert!(matched.contains(&"windows"));
        assert!(matched.contains(&"active directory"));
        assert_eq!(
            result
                .critical_matches
                .iter()
                .find(|k| k.keyword == "windows")
                .unwrap()
                .weight,
            10.0
        );
        assert_eq!(
            result
                .critical_matches
                .iter()
                .find(|k| k.keyword == "active directory")
                .unwrap()
                .weight,
            15.0
        );

        let missed: Vec<&str> = result
            .critical_misses
            .iter()
            .map(|k| k.keyword.as_str())
            .collect();
        assert!(missed.contains(&"office 365"));

        assert!(result.score_percentage > 0.0);
        assert!(result.score_percentage < 100.0);
    }

    #[test]
    fn test_zero_possible_points() {
        let result = score(
            "Looking for a pastry chef with croissant lamination skill",
            "windows administrator",
        );
        assert_eq!(result.possible_points, 0.0);
        assert_eq!(result.score_percentage, 0.0);
        assert!(result.critical_matches.is_empty());
        assert!(result.critical_misses.is_empty());
    }

    #[test]
    fn test_only_job_present_keywords_count() {
        // Resume mentions powershell but the posting does not ask for it:
        // no points either way.
        let result = score(
            "Need windows experience",
            "windows and powershell automation",
        );
        assert_eq!(result.possible_points, 10.0);
        assert_eq!(result.earned_points, 10.0);
        assert_eq!(result.score_percentage, 100.0);
    }

    #[test]
    fn test_general_tier_accrues_points() {
        let result = score(
            "Help desk role: customer service and documentation required plus windows",
            "windows support with customer service focus",
        );
        // windows (10) + help desk? job says "help desk" -> critical present
        // but missed by resume... resume has "support" only.
        assert!(result
            .general_matches
            .iter()
            .any(|k| k.keyword == "customer service"));
        assert!(result.possible_points > result.earned_points);
    }

    #[test]
    fn test_percentage_rounded_to_one_decimal() {
        let result = score(
            "windows, active directory, office 365",
            "windows only here",
        );
        // 10 / 37 = 27.027..% -> 27.0
        assert_eq!(result.earned_points, 10.0);
        assert_eq!(result.possible_points, 37.0);
        assert_eq!(result.score_percentage, 27.0);
    }
}
