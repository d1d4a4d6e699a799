//! TF-IDF vector space and cosine similarity
//!
//! One vector space is fit jointly over the resume and all job blobs of a
//! single matching call, then each document is transformed against it. IDF
//! only makes sense over the shared corpus, so the space is refit per call
//! and never cached.

use crate::error::{JobFitError, Result};
use crate::processing::tokens::tokenize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Vocabulary cap to bound memory on large job sets.
const MAX_VOCABULARY: usize = 5000;
/// Terms present in more than this share of the corpus carry no signal.
const MAX_DOC_FREQUENCY: f64 = 0.8;
/// Unigrams through trigrams.
const NGRAM_MAX: usize = 3;

/// Generic English stop words plus job-posting filler terms.
const STOP_WORDS: &[&str] = &[
    // English
    "a", "about", "above", "after", "again", "all", "also", "an", "and", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below",
    "between", "both", "but", "by", "can", "could", "did", "do", "does",
    "doing", "down", "during", "each", "few", "for", "from", "further", "had",
    "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how",
    "i", "if", "in", "into", "is", "it", "its", "just", "more", "most", "my",
    "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or",
    "other", "our", "ours", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "you",
    "your", "yours",
    // Job posting filler
    "experience", "years", "required", "preferred", "candidate", "position",
    "role", "team", "company", "opportunity", "benefits", "salary",
    "competitive", "responsibilities", "qualifications", "skills", "ability",
    "work", "job", "employment",
];

/// Computes cosine similarity between a resume and a set of job blobs.
pub struct SimilarityEngine {
    stop_words: HashSet<&'static str>,
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityEngine {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Score each job blob against the resume text. Returns one score in
    /// [0, 1] per blob, in input order.
    ///
    /// An empty job set short-circuits to an empty result (fitting requires
    /// at least one document); an empty resume is a validation error.
    pub fn score_jobs(&self, resume_text: &str, job_blobs: &[String]) -> Result<Vec<f32>> {
        if job_blobs.is_empty() {
            return Ok(Vec::new());
        }
        if resume_text.trim().is_empty() {
            return Err(JobFitError::Validation("empty resume".to_string()));
        }

        let documents: Vec<Vec<String>> = std::iter::once(resume_text)
            .chain(job_blobs.iter().map(String::as_str))
            .map(|text| self.terms(text))
            .collect();

        let space = VectorSpace::fit(&documents);
        let vectors: Vec<BTreeMap<usize, f32>> = documents
            .iter()
            .map(|doc| space.transform(doc))
            .collect();

        let resume_vector = &vectors[0];
        Ok(vectors[1..]
            .iter()
            .map(|job_vector| cosine(resume_vector, job_vector))
            .collect())
    }

    /// Stop-word-filtered tokens expanded into 1..=3 word terms.
    fn terms(&self, text: &str) -> Vec<String> {
        let tokens: Vec<String> = tokenize(text)
            .into_iter()
            .filter(|token| !self.stop_words.contains(token.as_str()))
            .collect();

        let mut terms = Vec::new();
        for n in 1..=NGRAM_MAX {
            if tokens.len() < n {
                break;
            }
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }
}

/// A fitted term-weighting space: vocabulary indices plus smoothed IDF.
struct VectorSpace {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl VectorSpace {
    fn fit(documents: &[Vec<String>]) -> Self {
        let n_docs = documents.len();

        let mut doc_frequency: HashMap<&str, usize> = HashMap::new();
        let mut total_count: HashMap<&str, u64> = HashMap::new();
        for doc in documents {
            let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                *doc_frequency.entry(term).or_insert(0) += 1;
            }
            for term in doc {
                *total_count.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        // Drop over-common terms, then cap the vocabulary keeping the most
        // frequent terms. Ties break alphabetically so fits are
        // deterministic.
        let df_limit = MAX_DOC_FREQUENCY * n_docs as f64;
        let mut candidates: Vec<(&str, u64)> = doc_frequency
            .iter()
            .filter(|(_, &df)| (df as f64) <= df_limit)
            .map(|(&term, _)| (term, total_count[term]))
            .collect();
        candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        candidates.truncate(MAX_VOCABULARY);

        let mut selected: Vec<&str> = candidates.into_iter().map(|(term, _)| term).collect();
        selected.sort_unstable();

        let vocabulary: HashMap<String, usize> = selected
            .iter()
            .enumerate()
            .map(|(index, &term)| (term.to_string(), index))
            .collect();

        let mut idf = vec![0.0; vocabulary.len()];
        for (term, &index) in &vocabulary {
            let df = doc_frequency[term.as_str()];
            idf[index] =
                (((1 + n_docs) as f32 / (1 + df) as f32).ln()) + 1.0;
        }

        Self { vocabulary, idf }
    }

    /// Sparse L2-normalized TF-IDF vector for one document. BTreeMap keeps
    /// summation order fixed, so scores are bit-for-bit reproducible.
    fn transform(&self, doc: &[String]) -> BTreeMap<usize, f32> {
        let mut counts: BTreeMap<usize, f32> = BTreeMap::new();
        for term in doc {
            if let Some(&index) = self.vocabulary.get(term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        for (index, value) in counts.iter_mut() {
            *value *= self.idf[*index];
        }

        let norm = counts.values().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in counts.values_mut() {
                *value /= norm;
            }
        }
        counts
    }
}

/// Dot product of two L2-normalized sparse vectors, clamped to [0, 1].
fn cosine(a: &BTreeMap<usize, f32>, b: &BTreeMap<usize, f32>) -> f32 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f32 = small
        .iter()
        .filter_map(|(index, value)| large.get(index).map(|other| value * other))
        .sum();
    dot.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blobs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_job_set_short_circuits() {
        let engine = SimilarityEngine::new();
        let scores = engine.score_jobs("windows administrator", &[]).unwrap();
        assert!(scores.is_empty());
    }

    #[test]
    fn test_empty_resume_is_validation_error() {
        let engine = SimilarityEngine::new();
        let result = engine.score_jobs("   ", &blobs(&["help desk job"]));
        assert!(matches!(result, Err(JobFitError::Validation(_))));
    }

    #[test]
    fn test_scores_bounded_and_ordered_by_relevance() {
        let engine = SimilarityEngine::new();
        let resume = "windows 10 active directory help desk troubleshooting support analyst";
        let jobs = blobs(&[
            "help desk analyst windows active directory troubleshooting support tickets",
            "bakery assistant bread pastry ovens morning shifts",
            "kernel engineer rust compilers llvm optimization",
        ]);
        let scores = engine.score_jobs(resume, &jobs).unwrap();

        assert_eq!(scores.len(), 3);
        for score in &scores {
            assert!((0.0..=1.0).contains(score));
        }
        assert!(scores[0] > scores[1]);
        assert!(scores[0] > scores[2]);
    }

    #[test]
    fn test_stop_words_and_filler_carry_no_weight() {
        let engine = SimilarityEngine::new();
        let resume = "windows administrator";
        let jobs = blobs(&[
            "the required preferred candidate position role team company opportunity",
            "windows administrator for desktop fleet",
            "unrelated warehouse packing forklift",
        ]);
        let scores = engine.score_jobs(resume, &jobs).unwrap();
        assert_eq!(scores[0], 0.0);
        assert!(scores[1] > 0.0);
    }

    #[test]
    fn test_special_tokens_survive() {
        let engine = SimilarityEngine::new();
        let resume = "node.js c# developer";
        let jobs = blobs(&[
            "node.js c# backend services",
            "plumber residential pipefitting",
            "florist arrangements weddings",
        ]);
        let scores = engine.score_jobs(resume, &jobs).unwrap();
        assert!(scores[0] > scores[1]);
    }

    #[test]
    fn test_deterministic() {
        let engine = SimilarityEngine::new();
        let resume = "windows server powershell automation";
        let jobs = blobs(&[
            "windows server administrator powershell scripting",
            "linux kernel developer c systems",
            "graphic designer branding illustrator",
        ]);
        let first = engine.score_jobs(resume, &jobs).unwrap();
        let second = engine.score_jobs(resume, &jobs).unwrap();
        assert_eq!(first, second);
    }
}
