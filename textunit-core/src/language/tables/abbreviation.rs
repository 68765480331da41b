//! Abbreviation matching over a short context window
//!
//! A period that closes a known abbreviation must not end a sentence. The
//! classifier hands this table the (at most 11-codepoint) window ending at
//! the period; the table scans it for any known token immediately followed
//! by `.`. The window is so small that a linear scan beats building a trie.

/// Known abbreviation tokens, matched case-sensitively
///
/// English/Chinese-biased by design; extending to another language means a
/// new table, not new control flow.
const ABBREVIATIONS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Sr", "Jr", "vs", "etc", "Inc", "Ltd", "Corp", "Co", "St",
    "Ave", "Blvd", "Rd", "Ph.D", "M.D", "B.A", "M.A", "U.S", "U.K", "U.N", "A.M", "P.M", "i.e",
    "e.g",
];

/// Abbreviation lookup table
#[derive(Debug, Clone)]
pub struct AbbrevTable {
    /// Tokens expanded to codepoints for window comparison
    tokens: Vec<Vec<char>>,
}

impl AbbrevTable {
    /// Create the table with the built-in abbreviation set
    pub fn new() -> Self {
        Self::with_tokens(ABBREVIATIONS)
    }

    /// Create from an explicit token list
    pub fn with_tokens(tokens: &[&str]) -> Self {
        Self {
            tokens: tokens.iter().map(|t| t.chars().collect()).collect(),
        }
    }

    /// Check whether the window contains a known abbreviation followed by `.`
    ///
    /// The left edge of a match must sit on a word boundary: either the
    /// start of the window or a non-word character. Matching is
    /// case-sensitive.
    pub fn contains_abbreviation(&self, window: &[char]) -> bool {
        for start in 0..window.len() {
            if start > 0 && is_word_char(window[start - 1]) {
                continue;
            }
            for token in &self.tokens {
                let end = start + token.len();
                if end >= window.len() {
                    continue;
                }
                if window[start..end] == token[..] && window[end] == '.' {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for AbbrevTable {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn matches_simple_abbreviation() {
        let table = AbbrevTable::new();
        assert!(table.contains_abbreviation(&window("met Dr.")));
        assert!(table.contains_abbreviation(&window("etc.")));
        assert!(table.contains_abbreviation(&window("e.g.")));
    }

    #[test]
    fn matches_dotted_abbreviation() {
        let table = AbbrevTable::new();
        assert!(table.contains_abbreviation(&window("a Ph.D.")));
        assert!(table.contains_abbreviation(&window("the U.S.")));
    }

    #[test]
    fn requires_word_boundary() {
        let table = AbbrevTable::new();
        // "headdr." does not contain the token "Dr" on a word boundary
        assert!(!table.contains_abbreviation(&window("headdr.")));
        // lowercase "dr" is not in the case-sensitive table
        assert!(!table.contains_abbreviation(&window("met dr.")));
    }

    #[test]
    fn requires_following_period() {
        let table = AbbrevTable::new();
        assert!(!table.contains_abbreviation(&window("met Dr")));
        assert!(!table.contains_abbreviation(&window("went home.")));
    }
}
