//! Hue/saturation/value color type.
//!
//! [`Hsv`] uses the ranges the visualizer exposes to users: hue as
//! degrees in [0, 360), saturation and value as percent in [0, 100].
//! Seen geometrically the type is a cylindrical coordinate: hue is the
//! angle, saturation the radial fraction, value the height fraction.
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::Hsv;
//!
//! let c = Hsv::new(400.0, 120.0, -5.0).normalize();
//! assert_eq!(c, Hsv::new(40.0, 100.0, 0.0));
//! ```

use serde::{Deserialize, Serialize};

/// A color as hue (degrees), saturation and value (percent).
///
/// # Invariants
///
/// - `h` in [0, 360) — hue wraps, it never clamps
/// - `s`, `v` in [0, 100]
///
/// Construction does not enforce the ranges; [`Hsv::normalize`] brings
/// arbitrary finite input into them.
///
/// # Achromatic convention
///
/// For grays (`s == 0`) the hue is geometrically meaningless. The
/// conversion code reports `h = 0` for them; this type does not treat
/// the case specially.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Hsv {
    /// Hue in degrees, [0, 360)
    pub h: f32,
    /// Saturation in percent, [0, 100]
    pub s: f32,
    /// Value (brightness) in percent, [0, 100]
    pub v: f32,
}

impl Hsv {
    /// Black (0, 0, 0). The startup color of the visualizer.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new color from hue, saturation and value.
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Creates from an `[h, s, v]` array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an `[h, s, v]` array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.h, self.s, self.v]
    }

    /// Wraps hue into [0, 360) and clamps saturation/value to [0, 100].
    ///
    /// Hue wraps rather than clamps so slider overshoot stays
    /// continuous: 360 maps to 0, -10 maps to 350.
    #[inline]
    pub fn normalize(self) -> Self {
        Self::new(
            self.h.rem_euclid(360.0),
            self.s.clamp(0.0, 100.0),
            self.v.clamp(0.0, 100.0),
        )
    }

    /// Returns true if all components are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.h.is_finite() && self.s.is_finite() && self.v.is_finite()
    }
}

impl From<[f32; 3]> for Hsv {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Hsv> for [f32; 3] {
    #[inline]
    fn from(c: Hsv) -> [f32; 3] {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_new() {
        let c = Hsv::new(120.0, 50.0, 75.0);
        assert_eq!(c.h, 120.0);
        assert_eq!(c.s, 50.0);
        assert_eq!(c.v, 75.0);
    }

    #[test]
    fn test_hsv_normalize_wraps_hue() {
        assert_eq!(Hsv::new(360.0, 0.0, 0.0).normalize().h, 0.0);
        assert_eq!(Hsv::new(400.0, 0.0, 0.0).normalize().h, 40.0);
        assert_eq!(Hsv::new(-10.0, 0.0, 0.0).normalize().h, 350.0);
    }

    #[test]
    fn test_hsv_normalize_clamps_sv() {
        let c = Hsv::new(0.0, 120.0, -5.0).normalize();
        assert_eq!(c.s, 100.0);
        assert_eq!(c.v, 0.0);
    }

    #[test]
    fn test_hsv_finite() {
        assert!(Hsv::new(0.0, 50.0, 100.0).is_finite());
        assert!(!Hsv::new(f32::NAN, 0.0, 0.0).is_finite());
    }
}
