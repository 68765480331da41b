//! Core value types

/// One sentence candidate with position and line metadata
///
/// Offsets are codepoint offsets into the source text; `end_pos` is
/// inclusive. Spans are immutable once constructed; refinement passes
/// build new spans rather than mutating existing ones.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextSpan {
    /// Trimmed span text
    pub text: String,
    /// Codepoint offset of the span's first source character
    pub start_pos: usize,
    /// Codepoint offset of the span's last source character (inclusive)
    pub end_pos: usize,
    /// 1-based line number: newlines at or before `start_pos`, plus one
    pub line_number: usize,
    /// 0-based emission order within one segmentation pass
    pub sequence_index: usize,
}

impl TextSpan {
    /// Create a new span
    pub fn new(
        text: impl Into<String>,
        start_pos: usize,
        end_pos: usize,
        line_number: usize,
        sequence_index: usize,
    ) -> Self {
        Self {
            text: text.into(),
            start_pos,
            end_pos,
            line_number,
            sequence_index,
        }
    }

    /// Span length in codepoints
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the span text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One line of content with its trailing blank-line count
///
/// Produced by line-mode extraction. `trailing_blank_lines` counts the
/// consecutive blank lines immediately following this one, which is what
/// layout reconstruction needs to re-insert paragraph gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawLine {
    /// Line text with any leading byte-order mark removed
    pub text: String,
    /// Number of consecutive blank lines immediately after this line
    pub trailing_blank_lines: usize,
}
