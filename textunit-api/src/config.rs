//! High-level extraction configuration

use crate::dto::ProcessingMode;
use crate::error::Result;
use textunit_core::SplitConfig;

/// Configuration for a [`TextExtractor`](crate::TextExtractor)
///
/// Bundles the extraction mode with the core length limits. Defaults to
/// line mode, which mirrors plain-text translation workflows where layout
/// fidelity matters most.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Line or sentence extraction
    pub mode: ProcessingMode,
    /// Length limits for sentence-mode refinement
    pub split: SplitConfig,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            mode: ProcessingMode::Line,
            split: SplitConfig::default(),
        }
    }
}

impl ExtractorConfig {
    /// Create a sentence-mode configuration with default limits
    pub fn sentence() -> Self {
        Self {
            mode: ProcessingMode::Sentence,
            ..Self::default()
        }
    }

    /// Create a line-mode configuration
    pub fn line() -> Self {
        Self::default()
    }

    /// Create a builder
    pub fn builder() -> ExtractorConfigBuilder {
        ExtractorConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ExtractorConfigBuilder {
    mode: ProcessingMode,
    max_length: Option<usize>,
    min_length: Option<usize>,
}

impl ExtractorConfigBuilder {
    /// Set the extraction mode
    pub fn mode(mut self, mode: ProcessingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the maximum sentence length
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Set the minimum sentence length
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    /// Build the configuration, validating the length limits
    pub fn build(self) -> Result<ExtractorConfig> {
        let defaults = SplitConfig::default();
        let split = SplitConfig::new(
            self.max_length.unwrap_or(defaults.max_length),
            self.min_length.unwrap_or(defaults.min_length),
        )?;
        Ok(ExtractorConfig {
            mode: self.mode,
            split,
        })
    }
}
