//! Length refinement: merge short spans, split long ones

use crate::config::SplitConfig;
use crate::segmenter::SentenceSegmenter;
use crate::types::TextSpan;

/// Post-processes segmented spans against configured length limits
///
/// Two independent transforms applied in order: a merge pass that folds
/// sub-minimum spans into their successor, then a split pass that cuts
/// over-maximum spans at clause boundaries. The split pass is best-effort:
/// a span with no qualifying cut point passes through over-length.
#[derive(Debug, Clone, Default)]
pub struct SentenceRefiner {
    segmenter: SentenceSegmenter,
}

impl SentenceRefiner {
    /// Create a refiner with the built-in rule tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a refiner sharing an existing segmenter
    pub fn with_segmenter(segmenter: SentenceSegmenter) -> Self {
        Self { segmenter }
    }

    /// Segment text and apply both refinement passes
    pub fn smart_split(&self, text: &str, config: &SplitConfig) -> Vec<TextSpan> {
        let spans = self.segmenter.segment(text);
        let merged = self.merge_short(spans, config.min_length);
        merged
            .into_iter()
            .flat_map(|span| self.split_long(span, config))
            .collect()
    }

    /// Fold spans shorter than `min_length` into their successor
    ///
    /// A chain of short spans collapses left-to-right into one span joined
    /// by single spaces; the merged span keeps the first span's
    /// `start_pos`, `line_number`, and `sequence_index` and adopts the last
    /// span's `end_pos`. The document's final span is never dropped, even
    /// when short.
    pub fn merge_short(&self, spans: Vec<TextSpan>, min_length: usize) -> Vec<TextSpan> {
        let mut iter = spans.into_iter();
        let Some(mut current) = iter.next() else {
            return Vec::new();
        };

        let mut merged = Vec::new();
        for next in iter {
            if current.len() < min_length {
                current = TextSpan::new(
                    format!("{} {}", current.text, next.text),
                    current.start_pos,
                    next.end_pos,
                    current.line_number,
                    current.sequence_index,
                );
            } else {
                merged.push(current);
                current = next;
            }
        }
        merged.push(current);
        merged
    }

    /// Cut an over-length span at clause boundaries
    ///
    /// Candidate cut points come from the clause tables, walked in order; a
    /// cut is taken only once the pending chunk reaches 70% of
    /// `max_length`, and whatever trails the last cut becomes a final
    /// fragment. With no qualifying cut the span is returned unchanged.
    /// Sub-spans inherit the parent's line number, offset the parent's
    /// `start_pos` by the local cut position, and are numbered upward from
    /// the parent's `sequence_index`.
    pub fn split_long(&self, span: TextSpan, config: &SplitConfig) -> Vec<TextSpan> {
        if span.len() <= config.max_length {
            return vec![span];
        }

        let chars: Vec<char> = span.text.chars().collect();
        let candidates = self.segmenter.rules().clauses.split_candidates(&chars);
        let threshold = config.split_threshold();

        let mut result = Vec::new();
        let mut start = 0usize;
        let mut index = span.sequence_index;

        for cut in candidates {
            if ((cut - start) as f64) < threshold {
                continue;
            }
            let chunk: String = chars[start..cut].iter().collect();
            let trimmed = chunk.trim();
            if !trimmed.is_empty() {
                result.push(TextSpan::new(
                    trimmed,
                    span.start_pos + start,
                    span.start_pos + cut - 1,
                    span.line_number,
                    index,
                ));
                index += 1;
            }
            start = cut;
        }

        if start < chars.len() {
            let rest: String = chars[start..].iter().collect();
            let trimmed = rest.trim();
            if !trimmed.is_empty() {
                result.push(TextSpan::new(
                    trimmed,
                    span.start_pos + start,
                    span.end_pos,
                    span.line_number,
                    index,
                ));
            }
        }

        if result.is_empty() {
            vec![span]
        } else {
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, start: usize, index: usize) -> TextSpan {
        let len = text.chars().count();
        TextSpan::new(text, start, start + len.saturating_sub(1), 1, index)
    }

    #[test]
    fn merges_short_span_into_successor() {
        let refiner = SentenceRefiner::new();
        let spans = vec![span("Ok.", 0, 0), span("Fine, we will proceed.", 4, 1)];
        let merged = refiner.merge_short(spans, 10);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "Ok. Fine, we will proceed.");
        assert_eq!(merged[0].start_pos, 0);
        assert_eq!(merged[0].sequence_index, 0);
        assert_eq!(merged[0].end_pos, 25);
    }

    #[test]
    fn merge_collapses_a_chain() {
        let refiner = SentenceRefiner::new();
        let spans = vec![
            span("A.", 0, 0),
            span("B.", 3, 1),
            span("C.", 6, 2),
            span("This one is long enough.", 9, 3),
        ];
        let merged = refiner.merge_short(spans, 10);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "A. B. C. This one is long enough.");
        assert_eq!(merged[0].sequence_index, 0);
    }

    #[test]
    fn final_short_span_is_kept() {
        let refiner = SentenceRefiner::new();
        let spans = vec![span("A long enough sentence here.", 0, 0), span("End.", 29, 1)];
        let merged = refiner.merge_short(spans, 10);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].text, "End.");
    }

    #[test]
    fn split_cuts_at_commas() {
        let refiner = SentenceRefiner::new();
        let config = SplitConfig::new(20, 1).unwrap();
        // 40 codepoints with commas at qualifying distances
        let text = "aaaaaaaaaaaaaa, bbbbbbbbbbbbbb, cccccccc";
        let parent = TextSpan::new(text, 100, 100 + text.chars().count() - 1, 2, 5);
        let parts = refiner.split_long(parent, &config);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].text, "aaaaaaaaaaaaaa,");
        assert_eq!(parts[1].text, "bbbbbbbbbbbbbb,");
        assert_eq!(parts[2].text, "cccccccc");
        // offset arithmetic and numbering inherit from the parent
        assert_eq!(parts[0].start_pos, 100);
        assert_eq!(parts[0].end_pos, 114);
        assert_eq!(parts[1].start_pos, 115);
        assert_eq!(parts[2].end_pos, 139);
        assert_eq!(parts[0].sequence_index, 5);
        assert_eq!(parts[1].sequence_index, 6);
        assert_eq!(parts[2].sequence_index, 7);
        assert_eq!(parts[1].line_number, 2);
    }

    #[test]
    fn unsplittable_span_passes_through() {
        let refiner = SentenceRefiner::new();
        let config = SplitConfig::new(200, 10).unwrap();
        let text = "x".repeat(300);
        let parent = TextSpan::new(text.clone(), 0, 299, 1, 0);
        let parts = refiner.split_long(parent, &config);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].text, text);
    }

    #[test]
    fn under_length_span_is_untouched() {
        let refiner = SentenceRefiner::new();
        let config = SplitConfig::default();
        let parent = span("Short and sweet.", 0, 0);
        let parts = refiner.split_long(parent.clone(), &config);
        assert_eq!(parts, vec![parent]);
    }

    #[test]
    fn smart_split_merges_then_splits() {
        let refiner = SentenceRefiner::new();
        let config = SplitConfig::new(200, 10).unwrap();
        let spans = refiner.smart_split("Ok. Fine, we will proceed as planned.", &config);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Ok. Fine, we will proceed as planned.");
    }
}
