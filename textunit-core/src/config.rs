//! Configuration types for the segmentation engine

use crate::error::{CoreError, Result};

/// Length limits for the refinement passes
///
/// `max_length` is a best-effort ceiling: an over-length sentence with no
/// qualifying clause boundary is passed through unsplit. `min_length` drives
/// the merge pass. Both are measured in codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplitConfig {
    /// Maximum unit length before the split pass applies
    pub max_length: usize,
    /// Minimum unit length below which the merge pass applies
    pub min_length: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_length: 200,
            min_length: 10,
        }
    }
}

impl SplitConfig {
    /// Create a validated configuration
    ///
    /// Rejects zero lengths and `min_length > max_length` at construction;
    /// there is no silent fallback for a malformed configuration.
    pub fn new(max_length: usize, min_length: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(CoreError::ZeroLength {
                field: "max_length",
            });
        }
        if min_length == 0 {
            return Err(CoreError::ZeroLength {
                field: "min_length",
            });
        }
        if min_length > max_length {
            return Err(CoreError::InvertedLengths {
                min_length,
                max_length,
            });
        }
        Ok(Self {
            max_length,
            min_length,
        })
    }

    /// Minimum chunk length (in codepoints) before a cut is accepted
    pub(crate) fn split_threshold(&self) -> f64 {
        self.max_length as f64 * 0.7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let config = SplitConfig::default();
        assert_eq!(config.max_length, 200);
        assert_eq!(config.min_length, 10);
    }

    #[test]
    fn rejects_zero_lengths() {
        assert!(matches!(
            SplitConfig::new(0, 10),
            Err(CoreError::ZeroLength {
                field: "max_length"
            })
        ));
        assert!(matches!(
            SplitConfig::new(200, 0),
            Err(CoreError::ZeroLength {
                field: "min_length"
            })
        ));
    }

    #[test]
    fn rejects_inverted_lengths() {
        assert!(matches!(
            SplitConfig::new(10, 20),
            Err(CoreError::InvertedLengths {
                min_length: 20,
                max_length: 10
            })
        ));
    }

    #[test]
    fn threshold_is_seventy_percent() {
        let config = SplitConfig::new(200, 10).unwrap();
        assert_eq!(config.split_threshold(), 140.0);
    }
}
