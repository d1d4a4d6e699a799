//! Compiled keyword taxonomy
//!
//! The configured weight table is compiled once per engine: keywords are
//! normalized with the same TextNormalizer applied to resume and job text
//! (so `vpn` matches its expanded form) and sorted weight-descending with an
//! alphabetical tie-break for deterministic scans.

use crate::config::KeywordWeightTable;
use crate::error::Result;
use crate::processing::normalizer::TextNormalizer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordTier {
    Critical,
    General,
}

#[derive(Debug, Clone)]
pub struct CompiledKeyword {
    /// Keyword as configured, used in all reports.
    pub keyword: String,
    /// Normalized form actually matched against normalized text.
    pub normalized: String,
    pub weight: f64,
    pub tier: KeywordTier,
}

#[derive(Debug, Clone)]
pub struct CompiledKeywordTable {
    entries: Vec<CompiledKeyword>,
}

impl CompiledKeywordTable {
    pub fn compile(table: &KeywordWeightTable, normalizer: &TextNormalizer) -> Result<Self> {
        table.validate()?;

        let mut entries: Vec<CompiledKeyword> = table
            .critical
            .iter()
            .map(|(k, w)| (k, *w, KeywordTier::Critical))
            .chain(
                table
                    .general
                    .iter()
                    .map(|(k, w)| (k, *w, KeywordTier::General)),
            )
            .map(|(keyword, weight, tier)| CompiledKeyword {
                keyword: keyword.clone(),
                normalized: normalizer.normalize(keyword),
                weight,
                tier,
            })
            .collect();

        entries.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.keyword.cmp(&b.keyword))
        });

        Ok(Self { entries })
    }

    /// All keywords, weight-descending.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledKeyword> {
        self.entries.iter()
    }

    /// Keywords of one tier, weight-descending.
    pub fn tier(&self, tier: KeywordTier) -> impl Iterator<Item = &CompiledKeyword> {
        self.entries.iter().filter(move |entry| entry.tier == tier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
