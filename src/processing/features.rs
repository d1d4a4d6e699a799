//! Job posting feature extraction for the vector space

use crate::input::JobPosting;
use crate::processing::normalizer::TextNormalizer;

/// Builds the weighted text blob representing one posting.
///
/// The title is included twice to bias the vector space toward title terms.
/// Empty fields are skipped; the result is normalized.
pub struct JobFeatureExtractor {
    normalizer: TextNormalizer,
}

impl Default for JobFeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl JobFeatureExtractor {
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
        }
    }

    pub fn extract(&self, job: &JobPosting) -> String {
        let mut parts: Vec<&str> = Vec::new();

        if !job.title.is_empty() {
            parts.push(&job.title);
            parts.push(&job.title);
        }
        if !job.description.is_empty() {
            parts.push(&job.description);
        }
        if !job.company.is_empty() {
            parts.push(&job.company);
        }
        if !job.location.is_empty() {
            parts.push(&job.location);
        }
        let skills = job.skills.join(" ");
        if !skills.is_empty() {
            parts.push(&skills);
        }

        let salary = match (job.salary_min, job.salary_max) {
            (Some(min), Some(max)) => Some(format!("salary {} {}", min, max)),
            (Some(min), None) => Some(format!("salary {}", min)),
            (None, Some(max)) => Some(format!("salary {}", max)),
            (None, None) => None,
        };
        if let Some(salary) = &salary {
            parts.push(salary);
        }

        self.normalizer.normalize(&parts.join(" "))
    }
}
