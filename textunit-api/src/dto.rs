//! Data transfer objects handed to the external storage layer

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Extraction mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingMode {
    /// One unit per non-blank line
    #[default]
    Line,
    /// One unit per refined sentence
    Sentence,
}

impl ProcessingMode {
    /// External string name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingMode::Line => "line",
            ProcessingMode::Sentence => "sentence",
        }
    }
}

/// Reconstruction metadata for one extraction unit
///
/// The two variants keep the two `line_break` semantics distinct: line mode
/// counts whole blank lines, sentence mode counts raw newline characters in
/// the trailing whitespace run. Both serialize to the shared external
/// `line_break` key; the variant tag travels as `processing_mode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitMetadata {
    /// Line-mode metadata
    Line {
        /// Consecutive blank lines immediately after this line
        trailing_blank_lines: usize,
    },
    /// Sentence-mode metadata
    Sentence {
        /// Raw newline count in the whitespace run after `end_pos`
        trailing_newlines: usize,
        /// 1-based source line of the sentence start
        original_line_number: usize,
        /// Sentence order within the refined sequence
        sentence_index: usize,
        /// Codepoint offset of the sentence start
        start_pos: usize,
        /// Inclusive codepoint offset of the sentence end
        end_pos: usize,
    },
}

impl UnitMetadata {
    /// The mode this metadata belongs to
    pub fn mode(&self) -> ProcessingMode {
        match self {
            UnitMetadata::Line { .. } => ProcessingMode::Line,
            UnitMetadata::Sentence { .. } => ProcessingMode::Sentence,
        }
    }

    /// The external `line_break` value, whichever semantics it carries
    pub fn line_break(&self) -> usize {
        match self {
            UnitMetadata::Line {
                trailing_blank_lines,
            } => *trailing_blank_lines,
            UnitMetadata::Sentence {
                trailing_newlines, ..
            } => *trailing_newlines,
        }
    }

    /// Flatten into the string-keyed mapping the storage layer expects
    ///
    /// Keys are exactly the external key set; values are integers and
    /// strings only.
    pub fn to_extra(&self) -> Map<String, Value> {
        let mut extra = Map::new();
        extra.insert("line_break".into(), Value::from(self.line_break()));
        extra.insert(
            "processing_mode".into(),
            Value::from(self.mode().as_str()),
        );
        if let UnitMetadata::Sentence {
            original_line_number,
            sentence_index,
            start_pos,
            end_pos,
            ..
        } = self
        {
            extra.insert(
                "original_line_number".into(),
                Value::from(*original_line_number),
            );
            extra.insert("sentence_index".into(), Value::from(*sentence_index));
            extra.insert("start_pos".into(), Value::from(*start_pos));
            extra.insert("end_pos".into(), Value::from(*end_pos));
        }
        extra
    }
}

impl Serialize for UnitMetadata {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let extra = self.to_extra();
        let mut map = serializer.serialize_map(Some(extra.len()))?;
        for (key, value) in &extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One translatable chunk with its reconstruction metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionUnit {
    /// Unit text
    pub text: String,
    /// Mode-tagged reconstruction metadata
    pub metadata: UnitMetadata,
}

impl ExtractionUnit {
    /// Create a new unit
    pub fn new(text: impl Into<String>, metadata: UnitMetadata) -> Self {
        Self {
            text: text.into(),
            metadata,
        }
    }
}

/// Summary statistics over one extraction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Total units emitted
    pub total_units: usize,
    /// Units carrying line-mode metadata
    pub line_units: usize,
    /// Units carrying sentence-mode metadata
    pub sentence_units: usize,
    /// Mode the extractor ran in
    pub mode: ProcessingMode,
    /// Configured maximum sentence length (sentence mode only)
    pub max_length: Option<usize>,
    /// Configured minimum sentence length (sentence mode only)
    pub min_length: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_metadata_extra_keys() {
        let meta = UnitMetadata::Line {
            trailing_blank_lines: 2,
        };
        let extra = meta.to_extra();
        assert_eq!(extra.len(), 2);
        assert_eq!(extra["line_break"], 2);
        assert_eq!(extra["processing_mode"], "line");
    }

    #[test]
    fn sentence_metadata_extra_keys() {
        let meta = UnitMetadata::Sentence {
            trailing_newlines: 1,
            original_line_number: 3,
            sentence_index: 7,
            start_pos: 40,
            end_pos: 55,
        };
        let extra = meta.to_extra();
        assert_eq!(extra.len(), 6);
        assert_eq!(extra["line_break"], 1);
        assert_eq!(extra["processing_mode"], "sentence");
        assert_eq!(extra["original_line_number"], 3);
        assert_eq!(extra["sentence_index"], 7);
        assert_eq!(extra["start_pos"], 40);
        assert_eq!(extra["end_pos"], 55);
    }

    #[test]
    fn metadata_serializes_flat() {
        let unit = ExtractionUnit::new(
            "Hello.",
            UnitMetadata::Line {
                trailing_blank_lines: 0,
            },
        );
        let json = serde_json::to_value(&unit).unwrap();
        assert_eq!(json["text"], "Hello.");
        assert_eq!(json["metadata"]["line_break"], 0);
        assert_eq!(json["metadata"]["processing_mode"], "line");
    }
}
