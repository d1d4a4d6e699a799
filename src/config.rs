//! Configuration for the matching and scoring engine
//!
//! The keyword weight table and the bias phrase/pattern lists are the only
//! externally tunable inputs. Defaults reproduce the documented scoring
//! behavior; a TOML file with the same shape can override them.

use crate::error::{JobFitError, Result};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub keywords: KeywordWeightTable,
    #[serde(default)]
    pub bias: BiasConfig,
}

/// Two-tier weighted keyword taxonomy.
///
/// Critical keywords are must-have technical terms; general keywords are
/// broadly positive resume language. Weights are points, not probabilities.
/// BTreeMap keeps iteration deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordWeightTable {
    pub critical: BTreeMap<String, f64>,
    pub general: BTreeMap<String, f64>,
}

/// Bias pattern groups and phrase lists for job posting language analysis.
///
/// Pattern entries are case-insensitive regexes; phrase lists are matched
/// literally on whole-word boundaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasConfig {
    pub age: Vec<String>,
    pub gender: Vec<String>,
    pub cultural: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub appearance: Vec<String>,
    pub inclusive_phrases: Vec<String>,
    pub red_flag_phrases: Vec<String>,
}

impl Default for KeywordWeightTable {
    fn default() -> Self {
        let critical = [
            ("active directory", 15.0),
            ("office 365", 12.0),
            ("microsoft 365", 12.0),
            ("windows server", 12.0),
            ("help desk", 12.0),
            ("windows", 10.0),
            ("troubleshooting", 10.0),
            ("service desk", 10.0),
            ("technical support", 10.0),
            ("itil", 10.0),
            ("servicenow", 10.0),
            ("powershell", 10.0),
            ("azure", 10.0),
            ("intune", 10.0),
            ("networking", 8.0),
            ("vpn", 8.0),
            ("dns", 8.0),
            ("dhcp", 8.0),
            ("tcp/ip", 8.0),
            ("remote desktop", 8.0),
            ("group policy", 8.0),
            ("sccm", 8.0),
            ("exchange", 8.0),
            ("linux", 8.0),
            ("macos", 8.0),
        ];
        let general = [
            ("customer service", 5.0),
            ("problem solving", 5.0),
            ("communication", 4.0),
            ("documentation", 4.0),
            ("escalation", 4.0),
            ("ticketing", 4.0),
            ("remote support", 4.0),
            ("incident management", 4.0),
            ("hardware", 4.0),
            ("software installation", 3.0),
            ("teamwork", 3.0),
            ("training", 3.0),
            ("time management", 3.0),
            ("collaboration", 3.0),
            ("onboarding", 3.0),
            ("asset management", 3.0),
        ];
        Self {
            critical: critical
                .iter()
                .map(|(k, w)| (k.to_string(), *w))
                .collect(),
            general: general.iter().map(|(k, w)| (k.to_string(), *w)).collect(),
        }
    }
}

impl Default for BiasConfig {
    fn default() -> Self {
        Self {
            age: vec![
                r"\byoung\b".to_string(),
                r"\benergetic\b".to_string(),
                r"digital native".to_string(),
                r"recent graduates?\b".to_string(),
                r"\bages? \d+".to_string(),
                r"under \d+ years old".to_string(),
            ],
            gender: vec![
                r"\brockstar\b".to_string(),
                r"\bninja\b".to_string(),
                r"\bguru\b".to_string(),
                r"\baggressive\b".to_string(),
                r"\bdominant\b".to_string(),
                r"\bmanpower\b".to_string(),
                r"\bsalesman\b".to_string(),
                r"\bchairman\b".to_string(),
            ],
            cultural: vec![
                r"native english speaker".to_string(),
                r"native speaker".to_string(),
                r"cultural fit".to_string(),
                r"no accent".to_string(),
                r"american[- ]born".to_string(),
            ],
            education: vec![
                r"ivy league".to_string(),
                r"top[- ]tier (?:university|school)".to_string(),
                r"prestigious (?:university|school|college)".to_string(),
                r"elite (?:university|college)".to_string(),
            ],
            experience: vec![
                r"\boverqualified\b".to_string(),
                r"maximum (?:of )?\d+ years".to_string(),
                r"no more than \d+ years".to_string(),
            ],
            appearance: vec![
                r"\battractive\b".to_string(),
                r"well[- ]groomed".to_string(),
                r"professional appearance".to_string(),
                r"clean[- ]cut".to_string(),
                r"\bpresentable\b".to_string(),
            ],
            inclusive_phrases: vec![
                "equal opportunity".to_string(),
                "inclusive".to_string(),
                "diversity".to_string(),
                "diverse".to_string(),
                "all backgrounds".to_string(),
                "regardless of".to_string(),
                "reasonable accommodations".to_string(),
                "underrepresented".to_string(),
                "veterans".to_string(),
                "parental leave".to_string(),
            ],
            red_flag_phrases: vec![
                "work hard play hard".to_string(),
                "fast-paced environment".to_string(),
                "wear many hats".to_string(),
                "like a family".to_string(),
                "we are a family".to_string(),
                "self-starter".to_string(),
                "hustle".to_string(),
                "unlimited pto".to_string(),
            ],
        }
    }
}

impl KeywordWeightTable {
    /// All keywords across both tiers with their weights.
    pub fn combined(&self) -> impl Iterator<Item = (&str, f64)> {
        self.critical
            .iter()
            .chain(self.general.iter())
            .map(|(k, w)| (k.as_str(), *w))
    }

    pub fn validate(&self) -> Result<()> {
        if self.critical.is_empty() {
            return Err(JobFitError::Configuration(
                "keyword table: critical tier is empty".to_string(),
            ));
        }
        if self.general.is_empty() {
            return Err(JobFitError::Configuration(
                "keyword table: general tier is empty".to_string(),
            ));
        }
        for (keyword, weight) in self.combined() {
            if weight < 0.0 {
                return Err(JobFitError::Configuration(format!(
                    "keyword table: negative weight {} for '{}'",
                    weight, keyword
                )));
            }
            if keyword.trim().is_empty() {
                return Err(JobFitError::Configuration(
                    "keyword table: empty keyword".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl BiasConfig {
    /// Category name → pattern list, in the fixed category order.
    pub fn pattern_groups(&self) -> [(&'static str, &[String]); 6] {
        [
            ("age", self.age.as_slice()),
            ("gender", self.gender.as_slice()),
            ("cultural", self.cultural.as_slice()),
            ("education", self.education.as_slice()),
            ("experience", self.experience.as_slice()),
            ("appearance", self.appearance.as_slice()),
        ]
    }

    pub fn validate(&self) -> Result<()> {
        for (category, patterns) in self.pattern_groups() {
            for pattern in patterns {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| {
                        JobFitError::Configuration(format!(
                            "bias pattern '{}' in category '{}' is invalid: {}",
                            pattern, category, e
                        ))
                    })?;
            }
        }
        Ok(())
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content).map_err(|e| {
                    JobFitError::Configuration(format!(
                        "failed to parse {}: {}",
                        path.display(),
                        e
                    ))
                })?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| {
            JobFitError::Configuration(format!("failed to serialize config: {}", e))
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.keywords.validate()?;
        self.bias.validate()?;
        Ok(())
    }
}
