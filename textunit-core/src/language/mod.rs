//! Language rule tables and script detection

pub mod tables;

use tables::{AbbrevTable, ClauseTable, CloserTable, TermTable};

/// Dominant script of a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// Chinese
    Chinese,
    /// Japanese
    Japanese,
    /// English
    English,
    /// No single dominant script
    Mixed,
    /// Empty or undecidable input
    Unknown,
}

impl Language {
    /// Get language code
    pub fn code(&self) -> &str {
        match self {
            Language::Chinese => "zh",
            Language::Japanese => "ja",
            Language::English => "en",
            Language::Mixed => "mixed",
            Language::Unknown => "unknown",
        }
    }

    /// Detect the dominant script by codepoint-class ratios
    ///
    /// Han characters count toward Chinese, kana toward Japanese, Latin
    /// letters toward English. A coarse heuristic: kana presence above 20%
    /// marks Japanese even though Japanese text is mostly Han.
    pub fn detect(text: &str) -> Self {
        let total = text.trim().chars().count();
        if total == 0 {
            return Language::Unknown;
        }

        let mut han = 0usize;
        let mut kana = 0usize;
        let mut latin = 0usize;
        for ch in text.chars() {
            match ch {
                '\u{4e00}'..='\u{9fff}' => han += 1,
                '\u{3040}'..='\u{309f}' | '\u{30a0}'..='\u{30ff}' => kana += 1,
                'a'..='z' | 'A'..='Z' => latin += 1,
                _ => {}
            }
        }

        let han_ratio = han as f64 / total as f64;
        let kana_ratio = kana as f64 / total as f64;
        let latin_ratio = latin as f64 / total as f64;

        if han_ratio > 0.3 {
            Language::Chinese
        } else if kana_ratio > 0.2 {
            Language::Japanese
        } else if latin_ratio > 0.5 {
            Language::English
        } else {
            Language::Mixed
        }
    }
}

/// Shared, read-only rule tables for one segmentation pass
///
/// Building the tables is cheap but not free; callers processing many
/// documents should build one `SegmentationRules` and reuse it. The struct
/// is `Send + Sync` and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct SegmentationRules {
    /// Sentence terminator set
    pub terminators: TermTable,
    /// Absorbable closing quotes/brackets
    pub closers: CloserTable,
    /// Abbreviation tokens guarding ASCII periods
    pub abbreviations: AbbrevTable,
    /// Clause separators and conjunctions for the split pass
    pub clauses: ClauseTable,
}

impl SegmentationRules {
    /// Create the built-in rule set
    pub fn new() -> Self {
        Self::default()
    }
}
