//! Public API for translatable text unit extraction
//!
//! Wraps the `textunit-core` segmentation engine behind a stable surface:
//! a [`TextExtractor`] that runs either line-mode or sentence-mode
//! extraction and packages every unit with the metadata an external
//! storage layer needs to reconstruct the original layout.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use textunit_core::{LineExtractor, SentenceRefiner};

// Re-export key types
pub use config::{ExtractorConfig, ExtractorConfigBuilder};
pub use dto::{ExtractionStats, ExtractionUnit, ProcessingMode, UnitMetadata};
pub use error::{ApiError, Result};
pub use textunit_core::{Language, SplitConfig, TextSpan};

/// Main entry point for text unit extraction
///
/// Holds an immutable configuration plus the shared rule tables; it keeps
/// no per-call state, so one extractor can serve many documents and many
/// threads. Extraction is a pure function of `(content, config, mode)`.
pub struct TextExtractor {
    refiner: SentenceRefiner,
    line_extractor: LineExtractor,
    config: ExtractorConfig,
}

impl TextExtractor {
    /// Create an extractor with the default (line-mode) configuration
    pub fn new() -> Self {
        Self::with_validated(ExtractorConfig::default())
    }

    /// Create an extractor with the given mode and default limits
    pub fn with_mode(mode: ProcessingMode) -> Self {
        Self::with_validated(ExtractorConfig {
            mode,
            ..ExtractorConfig::default()
        })
    }

    /// Create an extractor with a custom configuration
    ///
    /// Re-validates the length limits so a hand-built config cannot smuggle
    /// in zero or inverted lengths.
    pub fn with_config(config: ExtractorConfig) -> Result<Self> {
        SplitConfig::new(config.split.max_length, config.split.min_length)?;
        Ok(Self::with_validated(config))
    }

    fn with_validated(config: ExtractorConfig) -> Self {
        Self {
            refiner: SentenceRefiner::new(),
            line_extractor: LineExtractor::new(),
            config,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract translatable units from content
    ///
    /// Dispatches on the configured mode. Empty or whitespace-only content
    /// yields an empty vec in both modes. Output order is document order
    /// and is the only ordering guarantee.
    pub fn extract(&self, content: &str) -> Vec<ExtractionUnit> {
        match self.config.mode {
            ProcessingMode::Line => self.extract_by_lines(content),
            ProcessingMode::Sentence => self.extract_by_sentences(content),
        }
    }

    fn extract_by_lines(&self, content: &str) -> Vec<ExtractionUnit> {
        self.line_extractor
            .extract_lines(content)
            .into_iter()
            .map(|line| {
                ExtractionUnit::new(
                    line.text,
                    UnitMetadata::Line {
                        trailing_blank_lines: line.trailing_blank_lines,
                    },
                )
            })
            .collect()
    }

    fn extract_by_sentences(&self, content: &str) -> Vec<ExtractionUnit> {
        let spans = self.refiner.smart_split(content, &self.config.split);
        if spans.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = content.chars().collect();
        spans
            .into_iter()
            .map(|span| {
                let trailing_newlines = count_trailing_newlines(&chars, span.end_pos);
                let metadata = UnitMetadata::Sentence {
                    trailing_newlines,
                    original_line_number: span.line_number,
                    sentence_index: span.sequence_index,
                    start_pos: span.start_pos,
                    end_pos: span.end_pos,
                };
                ExtractionUnit::new(span.text, metadata)
            })
            .collect()
    }

    /// Summarize an extraction result
    pub fn stats(&self, units: &[ExtractionUnit]) -> ExtractionStats {
        let line_units = units
            .iter()
            .filter(|u| u.metadata.mode() == ProcessingMode::Line)
            .count();
        let sentence_units = units.len() - line_units;

        let (max_length, min_length) = match self.config.mode {
            ProcessingMode::Sentence => (
                Some(self.config.split.max_length),
                Some(self.config.split.min_length),
            ),
            ProcessingMode::Line => (None, None),
        };

        ExtractionStats {
            total_units: units.len(),
            line_units,
            sentence_units,
            mode: self.config.mode,
            max_length,
            min_length,
        }
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Count newline characters in the whitespace run after `end_pos`
///
/// Raw `\n` count, not blank lines: the scan walks forward from
/// `end_pos + 1` while it sees only spaces, tabs, carriage returns, and
/// newlines, and returns how many newlines it crossed. Line mode counts
/// whole blank lines instead; the two must not be conflated.
fn count_trailing_newlines(chars: &[char], end_pos: usize) -> usize {
    if end_pos + 1 >= chars.len() {
        return 0;
    }

    let mut newlines = 0;
    for &ch in &chars[end_pos + 1..] {
        match ch {
            '\n' => newlines += 1,
            ' ' | '\t' | '\r' => {}
            _ => break,
        }
    }
    newlines
}

// Convenience functions

/// Extract units with the default line-mode configuration
pub fn extract_text(text: &str) -> Vec<ExtractionUnit> {
    TextExtractor::new().extract(text)
}

/// Extract units with a specific mode and default limits
pub fn extract_text_with_mode(text: &str, mode: ProcessingMode) -> Vec<ExtractionUnit> {
    TextExtractor::with_mode(mode).extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_newline_count_is_raw() {
        let chars: Vec<char> = "End. \n \n  next".chars().collect();
        // end_pos of "End." span text is 3
        assert_eq!(count_trailing_newlines(&chars, 3), 2);
    }

    #[test]
    fn trailing_newline_count_stops_at_content() {
        let chars: Vec<char> = "End.\nmore\n\n".chars().collect();
        assert_eq!(count_trailing_newlines(&chars, 3), 1);
    }

    #[test]
    fn trailing_newline_count_at_end_is_zero() {
        let chars: Vec<char> = "End.".chars().collect();
        assert_eq!(count_trailing_newlines(&chars, 3), 0);
    }
}
