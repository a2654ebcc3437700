//! Edit origin marker.
//!
//! Every edit to the canonical color arrives from one of the two linked
//! representations. [`EditSource`] records which one, so the sync layer
//! knows which tuple is authoritative for the call and which one to
//! derive.

use serde::{Deserialize, Serialize};

/// Which representation an edit originated from.
///
/// The edited representation is authoritative for that call; only the
/// other one is recomputed. This is what prevents an RGB slider drag
/// from being re-derived through HSV and drifting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditSource {
    /// The edit carries an `[r, g, b]` triple in [0, 1].
    Rgb,
    /// The edit carries an `[h, s, v]` triple (degrees, percent, percent).
    Hsv,
}

impl std::fmt::Display for EditSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rgb => write!(f, "rgb"),
            Self::Hsv => write!(f, "hsv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_source_display() {
        assert_eq!(EditSource::Rgb.to_string(), "rgb");
        assert_eq!(EditSource::Hsv.to_string(), "hsv");
    }
}
