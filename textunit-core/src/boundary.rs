//! Sentence boundary classification

use crate::language::SegmentationRules;

/// Codepoints of context examined to the left of an ASCII period
const ABBREV_WINDOW: usize = 10;

/// Decides whether a character position truly terminates a sentence
///
/// Borrows the shared rule tables; one classifier serves one pass over one
/// document's codepoints.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryClassifier<'r> {
    rules: &'r SegmentationRules,
}

impl<'r> BoundaryClassifier<'r> {
    /// Create a classifier over the given rule tables
    pub fn new(rules: &'r SegmentationRules) -> Self {
        Self { rules }
    }

    /// Check whether the character at `pos` ends a sentence
    ///
    /// True only for characters in the terminator set. An ASCII period is
    /// additionally rejected when the short window ending at `pos` contains
    /// a known abbreviation, or when it sits between two ASCII digits
    /// (decimal point). Ambiguous abbreviations outside the fixed table are
    /// treated as boundaries.
    pub fn is_boundary(&self, chars: &[char], pos: usize) -> bool {
        let Some(&ch) = chars.get(pos) else {
            return false;
        };

        if !self.rules.terminators.is_terminator(ch) {
            return false;
        }

        if ch == '.' {
            let window_start = pos.saturating_sub(ABBREV_WINDOW);
            let window = &chars[window_start..=pos];
            if self.rules.abbreviations.contains_abbreviation(window) {
                return false;
            }

            // decimal point: digit on both sides
            if pos > 0
                && pos + 1 < chars.len()
                && chars[pos - 1].is_ascii_digit()
                && chars[pos + 1].is_ascii_digit()
            {
                return false;
            }
        }

        true
    }
}
