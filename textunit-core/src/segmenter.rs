//! Single-pass sentence segmentation

use crate::boundary::BoundaryClassifier;
use crate::language::SegmentationRules;
use crate::types::TextSpan;

/// Scans text once and produces ordered sentence spans
///
/// The scan keeps an explicit cursor that it advances past everything a
/// span absorbed (trailing closers, spaces, tabs). Each input character is
/// consumed by exactly one span and boundary checks never re-examine
/// absorbed characters.
#[derive(Debug, Clone, Default)]
pub struct SentenceSegmenter {
    rules: SegmentationRules,
}

impl SentenceSegmenter {
    /// Create a segmenter with the built-in rule tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segmenter over custom rule tables
    pub fn with_rules(rules: SegmentationRules) -> Self {
        Self { rules }
    }

    /// Access the rule tables
    pub fn rules(&self) -> &SegmentationRules {
        &self.rules
    }

    /// Split text into ordered sentence spans
    ///
    /// Offsets in the returned spans are codepoint offsets; `end_pos` is
    /// inclusive and covers any absorbed trailing closers and inline
    /// whitespace. Whitespace-only input yields an empty vec.
    pub fn segment(&self, text: &str) -> Vec<TextSpan> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = text.chars().collect();
        let classifier = BoundaryClassifier::new(&self.rules);

        let mut spans = Vec::new();
        let mut cursor = 0usize;
        let mut newlines = 0usize;
        let mut span_start = 0usize;
        let mut span_line = 1usize;
        let mut at_span_start = true;
        let mut sequence_index = 0usize;

        while cursor < chars.len() {
            if chars[cursor] == '\n' {
                newlines += 1;
            }
            if at_span_start {
                // newlines at or before start_pos, plus one
                span_line = newlines + 1;
                at_span_start = false;
            }

            if !classifier.is_boundary(&chars, cursor) {
                cursor += 1;
                continue;
            }

            // absorb trailing closers, then inline whitespace (never '\n')
            let mut end = cursor + 1;
            while end < chars.len() && self.rules.closers.is_closer(chars[end]) {
                end += 1;
            }
            while end < chars.len() && matches!(chars[end], ' ' | '\t') {
                end += 1;
            }

            let raw: String = chars[span_start..end].iter().collect();
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                spans.push(TextSpan::new(
                    trimmed,
                    span_start,
                    end - 1,
                    span_line,
                    sequence_index,
                ));
                sequence_index += 1;
            }

            span_start = end;
            at_span_start = true;
            cursor = end;
        }

        if span_start < chars.len() {
            let raw: String = chars[span_start..].iter().collect();
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                spans.push(TextSpan::new(
                    trimmed,
                    span_start,
                    chars.len() - 1,
                    span_line,
                    sequence_index,
                ));
            }
        }

        spans
    }

    /// Segment each line independently
    ///
    /// Returns one `(line_number, spans)` pair per line, 1-based, blank
    /// lines mapping to an empty vec. Span offsets and indices are local to
    /// their line; `line_number` is re-tagged with the line's position in
    /// the document.
    pub fn segment_by_lines(&self, text: &str) -> Vec<(usize, Vec<TextSpan>)> {
        text.split('\n')
            .enumerate()
            .map(|(i, line)| {
                let line_number = i + 1;
                if line.trim().is_empty() {
                    return (line_number, Vec::new());
                }
                let spans = self
                    .segment(line)
                    .into_iter()
                    .map(|span| TextSpan {
                        line_number,
                        ..span
                    })
                    .collect();
                (line_number, spans)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_two_sentences() {
        let segmenter = SentenceSegmenter::new();
        let spans = segmenter.segment("He left. She stayed.");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "He left.");
        assert_eq!(spans[1].text, "She stayed.");
        assert_eq!(spans[0].sequence_index, 0);
        assert_eq!(spans[1].sequence_index, 1);
    }

    #[test]
    fn abbreviation_stays_whole() {
        let segmenter = SentenceSegmenter::new();
        let spans = segmenter.segment("Dr. Smith went home.");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Dr. Smith went home.");
    }

    #[test]
    fn decimal_stays_whole() {
        let segmenter = SentenceSegmenter::new();
        let spans = segmenter.segment("The value is 3.14 meters.");
        assert_eq!(spans.len(), 1);
    }

    #[test]
    fn absorbs_trailing_quote() {
        let segmenter = SentenceSegmenter::new();
        let spans = segmenter.segment("He said \"Stop.\" She ran.");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "He said \"Stop.\"");
        assert_eq!(spans[1].text, "She ran.");
        // absorbed quote and space belong to the first span
        assert_eq!(spans[1].start_pos, spans[0].end_pos + 1);
    }

    #[test]
    fn offsets_do_not_overlap() {
        let segmenter = SentenceSegmenter::new();
        let spans = segmenter.segment("One. Two! Three? Four; Five…");
        for pair in spans.windows(2) {
            assert!(pair[0].end_pos < pair[1].start_pos);
        }
    }

    #[test]
    fn cjk_sentences() {
        let segmenter = SentenceSegmenter::new();
        let spans = segmenter.segment("今天天气很好。我们去公园吧！");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "今天天气很好。");
        assert_eq!(spans[1].text, "我们去公园吧！");
    }

    #[test]
    fn line_numbers_track_newlines() {
        let segmenter = SentenceSegmenter::new();
        let spans = segmenter.segment("First line.\nSecond line.");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].line_number, 1);
        // the second span starts at the '\n', which counts toward its line
        assert_eq!(spans[1].line_number, 2);
    }

    #[test]
    fn whitespace_only_is_empty() {
        let segmenter = SentenceSegmenter::new();
        assert!(segmenter.segment("").is_empty());
        assert!(segmenter.segment("  \n\t ").is_empty());
    }

    #[test]
    fn trailing_remainder_is_emitted() {
        let segmenter = SentenceSegmenter::new();
        let spans = segmenter.segment("Done. And a tail without punctuation");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].text, "And a tail without punctuation");
        assert_eq!(spans[1].end_pos, "Done. And a tail without punctuation".chars().count() - 1);
    }

    #[test]
    fn segment_by_lines_retags_line_numbers() {
        let segmenter = SentenceSegmenter::new();
        let by_line = segmenter.segment_by_lines("One. Two.\n\nThree.");
        assert_eq!(by_line.len(), 3);
        assert_eq!(by_line[0].1.len(), 2);
        assert!(by_line[1].1.is_empty());
        assert_eq!(by_line[2].1.len(), 1);
        assert_eq!(by_line[2].1[0].line_number, 3);
    }
}
