//! Rule-based text segmentation engine
//!
//! Splits raw document content into translatable units (sentences or
//! lines) while keeping the positional metadata (offsets, line numbers,
//! trailing blank-line counts) a downstream layer needs to reconstruct the
//! original layout after translation.
//!
//! The pipeline is deterministic and purely rule-based: a terminator table
//! with abbreviation and decimal-point guards decides sentence boundaries,
//! a single-pass segmenter produces ordered spans, and a refiner enforces
//! soft length limits by merging short spans and splitting long ones at
//! clause boundaries. Everything is a pure function of the input text and
//! an immutable [`SplitConfig`]; the engine holds no cross-call state and
//! is safe to use from multiple threads.

#![warn(missing_docs)]

pub mod boundary;
pub mod config;
pub mod error;
pub mod language;
pub mod lines;
pub mod refiner;
pub mod segmenter;
pub mod types;

pub use boundary::BoundaryClassifier;
pub use config::SplitConfig;
pub use error::{CoreError, Result};
pub use language::{Language, SegmentationRules};
pub use lines::LineExtractor;
pub use refiner::SentenceRefiner;
pub use segmenter::SentenceSegmenter;
pub use types::{RawLine, TextSpan};
