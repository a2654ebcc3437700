//! Sample point and marker types.
//!
//! Both are plain position+color pairs; the distinction is lifecycle.
//! A [`SamplePoint`] belongs to a static reference cloud produced once
//! at startup. A [`Marker`] is the one mutable indicator per solid,
//! recomputed on every edit by the projection functions and written
//! into the rendering collaborator.

use chroma_core::Rgb;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One point of a static reference cloud.
///
/// Immutable once produced; the samplers generate the full cloud in a
/// single pass and never touch it again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Position in the solid's local space.
    pub position: Vec3,
    /// The color the point displays.
    pub color: Rgb,
}

impl SamplePoint {
    /// Creates a sample point.
    #[inline]
    pub const fn new(position: Vec3, color: Rgb) -> Self {
        Self { position, color }
    }
}

/// The selected-color indicator inside one solid.
///
/// One marker exists per visualized solid (cube, cone). Its position
/// and color are both derived from the canonical color, so the marker
/// visually disappears into the cloud exactly where the selected color
/// lives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Position in the solid's local space.
    pub position: Vec3,
    /// Current selected color.
    pub color: Rgb,
}

impl Marker {
    /// Creates a marker.
    #[inline]
    pub const fn new(position: Vec3, color: Rgb) -> Self {
        Self { position, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_point_roundtrips_through_json() {
        let p = SamplePoint::new(Vec3::new(0.1, 0.2, 0.3), Rgb::new(0.1, 0.2, 0.3));
        let json = serde_json::to_string(&p).unwrap();
        let back: SamplePoint = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
