//! Text normalization shared by the matching and ATS subsystems

use regex::Regex;

/// Canonicalizes raw resume/job text into a lowercase ASCII form.
///
/// Operations run in a fixed order: lowercase, punctuation canonicalization,
/// non-printable stripping, domain abbreviation expansion, whitespace
/// collapsing. The composition is idempotent: normalizing already-normalized
/// text is a no-op.
pub struct TextNormalizer {
    abbreviations: Vec<(Regex, &'static str)>,
    whitespace: Regex,
}

/// Standalone abbreviations expanded on word boundaries. Expansions contain
/// none of the abbreviation tokens, which keeps a second pass a no-op.
const ABBREVIATIONS: [(&str, &str); 8] = [
    (r"\bos\b", "operating system"),
    (r"\bad\b", "active directory"),
    (r"\bvpn\b", "virtual private network"),
    (r"\bpc\b", "computer"),
    (r"\bit\b", "information technology"),
    (r"\brdp\b", "remote desktop protocol"),
    (r"\bmfa\b", "multi factor authentication"),
    (r"\bsso\b", "single sign on"),
];

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        let abbreviations = ABBREVIATIONS
            .iter()
            .map(|(pattern, expansion)| {
                (
                    Regex::new(pattern).expect("Invalid abbreviation regex"),
                    *expansion,
                )
            })
            .collect();
        let whitespace = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            abbreviations,
            whitespace,
        }
    }

    /// Normalize raw text. Pure function of the input.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let canonical = Self::canonicalize_punctuation(&lowered);
        let printable = Self::strip_non_printable(&canonical);
        let expanded = self.expand_abbreviations(&printable);
        self.whitespace.replace_all(&expanded, " ").trim().to_string()
    }

    /// Replace curly quotes, dashes, bullets and ellipses with ASCII forms.
    fn canonicalize_punctuation(text: &str) -> String {
        text.chars()
            .map(|c| match c {
                '\u{2018}' | '\u{2019}' => '\'',
                '\u{201C}' | '\u{201D}' => '"',
                '\u{2013}' | '\u{2014}' => '-',
                '\u{2022}' | '\u{25AA}' | '\u{25CF}' | '\u{25E6}' | '\u{00B7}' => '-',
                '\u{2026}' => '.',
                _ => c,
            })
            .collect()
    }

    /// Drop everything outside the ASCII printable range, keeping whitespace
    /// so word boundaries survive until the final collapse.
    fn strip_non_printable(text: &str) -> String {
        text.chars()
            .filter(|c| c.is_ascii_whitespace() || ('!'..='~').contains(c))
            .collect()
    }

    fn expand_abbreviations(&self, text: &str) -> String {
        let mut expanded = text.to_string();
        for (pattern, expansion) in &self.abbreviations {
            expanded = pattern.replace_all(&expanded, *expansion).to_string();
        }
        expanded
    }
}
