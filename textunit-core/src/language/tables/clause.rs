//! Clause boundary tables for long-sentence splitting
//!
//! Two candidate classes: single separator characters (comma family) and
//! multi-codepoint conjunction tokens. A candidate position is the offset
//! immediately after the separator or token, so a cut there keeps the
//! separator with the preceding chunk.

/// Clause-separating characters, ASCII and full-width
const SEPARATORS: &[char] = &[',', '，', ';', '；', '、'];

/// Conjunction tokens that open a new clause
///
/// The English entries carry their surrounding spaces so "sand" or "andes"
/// never match.
const CONJUNCTIONS: &[&str] = &[
    "而且", "但是", "然而", "因此", "所以", " and ", " but ", " or ", " so ",
];

/// Clause boundary lookup table
#[derive(Debug, Clone)]
pub struct ClauseTable {
    separators: Vec<char>,
    /// Conjunction tokens expanded to codepoints
    conjunctions: Vec<Vec<char>>,
}

impl ClauseTable {
    /// Create the table with the built-in separator and conjunction sets
    pub fn new() -> Self {
        Self {
            separators: SEPARATORS.to_vec(),
            conjunctions: CONJUNCTIONS.iter().map(|t| t.chars().collect()).collect(),
        }
    }

    /// Collect candidate cut offsets in ascending order
    ///
    /// Each offset is the codepoint position just past a separator character
    /// or conjunction token. Offsets are deduplicated.
    pub fn split_candidates(&self, chars: &[char]) -> Vec<usize> {
        let mut candidates = Vec::new();

        for (i, ch) in chars.iter().enumerate() {
            if self.separators.contains(ch) {
                candidates.push(i + 1);
            }
        }

        for token in &self.conjunctions {
            if token.len() > chars.len() {
                continue;
            }
            for start in 0..=(chars.len() - token.len()) {
                if chars[start..start + token.len()] == token[..] {
                    candidates.push(start + token.len());
                }
            }
        }

        candidates.sort_unstable();
        candidates.dedup();
        candidates
    }
}

impl Default for ClauseTable {
    fn default() -> Self {
        Self::new()
    }
}
