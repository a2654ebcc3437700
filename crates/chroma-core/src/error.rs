//! Error types for chromascope.
//!
//! The conversion and projection code is total, so errors only occur at
//! the validation boundary: input that is not a number cannot be
//! clamped into range and is rejected before it reaches the core.

use thiserror::Error;

use crate::EditSource;

/// Chromascope error.
///
/// Covers the failure modes of the edit path. Conversions themselves
/// never fail; out-of-range finite input is clamped, not rejected.
#[derive(Debug, Error)]
pub enum ChromaError {
    /// Edit input contained NaN or an infinity.
    #[error("non-finite {source_kind} input: {values:?}")]
    NonFinite {
        /// Which representation the bad edit targeted.
        source_kind: EditSource,
        /// The offending triple, as received.
        values: [f32; 3],
    },

    /// A sampler was configured with a degenerate parameter set.
    #[error("invalid sampler parameter: {0}")]
    InvalidSampler(String),
}

/// Result type for chromascope operations.
pub type ChromaResult<T> = Result<T, ChromaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_message_names_source() {
        let err = ChromaError::NonFinite {
            source_kind: EditSource::Rgb,
            values: [f32::NAN, 0.0, 0.0],
        };
        let msg = err.to_string();
        assert!(msg.contains("rgb"), "message was: {msg}");
    }
}
