//! Sentence terminator lookup with O(1) access
//!
//! Covers both ASCII and CJK full-width terminator forms.

use std::collections::HashSet;

/// Sentence-ending punctuation characters
const TERMINATORS: &[char] = &['.', '!', '?', ';', '。', '！', '？', '；', '…'];

/// Fast terminator lookup table
#[derive(Debug, Clone)]
pub struct TermTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for the full-width forms
    non_ascii: HashSet<char>,
}

impl TermTable {
    /// Create the table with the built-in terminator set
    pub fn new() -> Self {
        Self::with_terminators(TERMINATORS)
    }

    /// Create from an explicit list of terminator characters
    pub fn with_terminators(terminators: &[char]) -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for &ch in terminators {
            if ch.is_ascii() {
                ascii_table[ch as usize] = true;
            } else {
                non_ascii.insert(ch);
            }
        }

        Self {
            ascii_table,
            non_ascii,
        }
    }

    /// Check if character is a sentence terminator - hot path
    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }
}

impl Default for TermTable {
    fn default() -> Self {
        Self::new()
    }
}
