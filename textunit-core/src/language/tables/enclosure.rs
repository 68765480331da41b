//! Closing quote/bracket lookup for boundary absorption
//!
//! Only closer glyphs matter here: after a terminator, the segmenter pulls
//! trailing closers into the span so quotes stay attached to the sentence
//! they end.

use std::collections::HashSet;

/// Closer glyphs absorbed after a sentence terminator
const CLOSERS: &[char] = &[
    '"', '\'', ')', ']', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', '」', '』', '）', '】',
];

/// Closing quote/bracket lookup table
#[derive(Debug, Clone)]
pub struct CloserTable {
    /// ASCII lookup table for chars 0-127
    ascii_table: [bool; 128],
    /// HashSet for CJK and typographic closers
    non_ascii: HashSet<char>,
}

impl CloserTable {
    /// Create the table with the built-in closer set
    pub fn new() -> Self {
        let mut ascii_table = [false; 128];
        let mut non_ascii = HashSet::new();

        for &ch in CLOSERS {
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

    /// Check if character is an absorbable closer - hot path
    #[inline]
    pub fn is_closer(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii_table[ch as usize]
        } else {
            self.non_ascii.contains(&ch)
        }
    }
}

impl Default for CloserTable {
    fn default() -> Self {
        Self::new()
    }
}
