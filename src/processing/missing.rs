//! Missing keyword identification with remediation hints

use crate::processing::keywords::{CompiledKeywordTable, KeywordTier};
use crate::processing::tokens::TokenizedText;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingKeywordEntry {
    pub keyword: String,
    pub importance: f64,
    pub tier: KeywordTier,
    pub recommendation: String,
}

/// Curated advice for well-known keywords; everything else gets the tier
/// template.
const SPECIFIC_ADVICE: &[(&str, &str)] = &[
    (
        "windows",
        "Highlight Windows desktop administration experience, naming the versions you supported.",
    ),
    (
        "active directory",
        "Mention user account management, group policy, or domain administration work.",
    ),
    (
        "office 365",
        "List Office 365 administration tasks such as mailbox, license, or Teams management.",
    ),
    (
        "itil",
        "Add ITIL training or certification, or describe process-driven incident management.",
    ),
    (
        "powershell",
        "Include PowerShell scripts you wrote for automation, even small ones.",
    ),
    (
        "servicenow",
        "Name the ticketing platforms you worked in; ServiceNow experience transfers well.",
    ),
    (
        "vpn",
        "Describe remote-access support you provided, including VPN client troubleshooting.",
    ),
    (
        "networking",
        "Show basic networking skills: DNS, DHCP, and connectivity troubleshooting.",
    ),
    (
        "help desk",
        "Use the phrase 'help desk' when describing your support roles.",
    ),
    (
        "troubleshooting",
        "Use 'troubleshooting' explicitly when describing diagnostic work.",
    ),
];

pub struct MissingKeywordIdentifier;

impl MissingKeywordIdentifier {
    /// Keywords the posting asks for that the resume does not mention,
    /// sorted importance-descending.
    pub fn identify(
        table: &CompiledKeywordTable,
        job: &TokenizedText,
        resume: &TokenizedText,
    ) -> Vec<MissingKeywordEntry> {
        // Table iteration is already weight-descending with an alphabetical
        // tie-break, so the output order is the sort order.
        table
            .iter()
            .filter(|entry| {
                job.contains_phrase(&entry.normalized)
                    && !resume.contains_phrase(&entry.normalized)
            })
            .map(|entry| MissingKeywordEntry {
                keyword: entry.keyword.clone(),
                importance: entry.weight,
                tier: entry.tier,
                recommendation: Self::recommendation(&entry.keyword, entry.tier),
            })
            .collect()
    }

    fn recommendation(keyword: &str, tier: KeywordTier) -> String {
        if let Some((_, advice)) = SPECIFIC_ADVICE.iter().find(|(k, _)| *k == keyword) {
            return (*advice).to_string();
        }
        match tier {
            KeywordTier::Critical => format!(
                "Consider gaining hands-on experience with {} and adding it to your skills section.",
                keyword
            ),
            KeywordTier::General => format!(
                "If you have experience with {}, include it prominently in your resume.",
                keyword
            ),
        }
    }
}
