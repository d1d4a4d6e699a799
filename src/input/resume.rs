//! Resume profile input contract
//!
//! The resume ingestion collaborator hands us cleaned text plus a section
//! map. Document parsing happens upstream; this module only models the
//! handoff shape and loads it from JSON (or raw text with empty sections).

use crate::error::{JobFitError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub full_text: String,
    #[serde(default)]
    pub sections: ResumeSections,
}

/// Recognized resume sections. Missing sections are empty strings, never
/// absent keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeSections {
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub technical_skills: String,
}

impl ResumeProfile {
    pub fn from_text(full_text: impl Into<String>) -> Self {
        Self {
            full_text: full_text.into(),
            sections: ResumeSections::default(),
        }
    }

    /// True when no usable resume text was extracted upstream.
    pub fn is_empty(&self) -> bool {
        self.full_text.trim().is_empty()
    }

    /// Load a profile from a JSON file matching the collaborator contract.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            JobFitError::InvalidInput(format!(
                "resume profile {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load a plain-text resume; the whole file becomes `full_text`.
    pub fn from_text_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_text(content))
    }

    /// Dispatch on extension: `.json` is a structured profile, anything else
    /// is treated as plain text.
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_file(path),
            _ => Self::from_text_file(path),
        }
    }
}
