//! Job posting input contract
//!
//! Postings come from arbitrary search providers. Unknown fields are
//! ignored, missing optional fields default, and the engine never mutates a
//! posting.

use crate::error::{JobFitError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Load an ordered list of postings from a JSON array.
pub fn load_jobs_json(path: &Path) -> Result<Vec<JobPosting>> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        JobFitError::InvalidInput(format!("job list {}: {}", path.display(), e))
    })
}

/// Load a single posting from a JSON object.
pub fn load_job_json(path: &Path) -> Result<JobPosting> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        JobFitError::InvalidInput(format!("job posting {}: {}", path.display(), e))
    })
}
