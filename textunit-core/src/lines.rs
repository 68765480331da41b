//! Line-mode extraction

use crate::types::RawLine;

/// Splits content into lines, keeping blank-run counts for reconstruction
///
/// Blank lines are folded into the preceding line's `trailing_blank_lines`
/// count instead of being emitted, with one exception: a blank first line
/// is kept so leading document structure survives.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineExtractor;

impl LineExtractor {
    /// Create a line extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract one `RawLine` per non-blank line (plus the first line)
    ///
    /// Splits with `str::lines` semantics, strips a leading byte-order mark
    /// from each kept line, and counts the consecutive blank lines that
    /// follow it. Whitespace-only content yields an empty vec.
    pub fn extract_lines(&self, content: &str) -> Vec<RawLine> {
        if content.trim().is_empty() {
            return Vec::new();
        }

        let lines: Vec<&str> = content.lines().collect();
        let mut out = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            if line.trim().is_empty() && i != 0 {
                continue;
            }

            out.push(RawLine {
                text: line.trim_start_matches('\u{feff}').to_string(),
                trailing_blank_lines: count_following_blanks(&lines, i),
            });
        }

        out
    }
}

/// Count consecutive blank lines starting at `index + 1`
fn count_following_blanks(lines: &[&str], index: usize) -> usize {
    lines[index + 1..]
        .iter()
        .take_while(|line| line.trim().is_empty())
        .count()
}
