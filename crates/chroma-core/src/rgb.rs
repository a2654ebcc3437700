//! Normalized RGB color type.
//!
//! [`Rgb`] holds red, green and blue channels as `f32` in [0, 1].
//! Inside the unit cube visualization the channel triple doubles as a
//! 3D position, so the type deliberately stays a plain value triple
//! with no color space tagging.
//!
//! # Usage
//!
//! ```rust
//! use chroma_core::Rgb;
//!
//! let c = Rgb::new(1.2, 0.5, -0.1).clamp();
//! assert_eq!(c, Rgb::new(1.0, 0.5, 0.0));
//! ```

use serde::{Deserialize, Serialize};

/// A color as red/green/blue channels, each in [0, 1].
///
/// # Invariants
///
/// Construction does not clamp; callers that accept untrusted values
/// run [`Rgb::clamp`] (or validate finiteness) before handing the color
/// to the conversion or projection code.
///
/// # Example
///
/// ```rust
/// use chroma_core::Rgb;
///
/// let red = Rgb::new(1.0, 0.0, 0.0);
/// assert_eq!(red.to_array(), [1.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(C)]
pub struct Rgb {
    /// Red channel in [0, 1]
    pub r: f32,
    /// Green channel in [0, 1]
    pub g: f32,
    /// Blue channel in [0, 1]
    pub b: f32,
}

impl Rgb {
    /// Black (0, 0, 0). The startup color of the visualizer.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White (1, 1, 1).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new color from channel values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a gray with all channels set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Creates from an `[r, g, b]` array.
    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an `[r, g, b]` array.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Clamps each channel to [0, 1].
    #[inline]
    pub fn clamp(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Largest channel value.
    #[inline]
    pub fn max_channel(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    /// Smallest channel value.
    #[inline]
    pub fn min_channel(self) -> f32 {
        self.r.min(self.g).min(self.b)
    }

    /// Returns true if all channels are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }
}

impl From<[f32; 3]> for Rgb {
    #[inline]
    fn from(a: [f32; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Rgb> for [f32; 3] {
    #[inline]
    fn from(c: Rgb) -> [f32; 3] {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_new() {
        let c = Rgb::new(0.1, 0.2, 0.3);
        assert_eq!(c.r, 0.1);
        assert_eq!(c.g, 0.2);
        assert_eq!(c.b, 0.3);
    }

    #[test]
    fn test_rgb_clamp() {
        let c = Rgb::new(-0.5, 0.5, 1.5).clamp();
        assert_eq!(c, Rgb::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_rgb_channels() {
        let c = Rgb::new(0.2, 0.8, 0.5);
        assert_eq!(c.max_channel(), 0.8);
        assert_eq!(c.min_channel(), 0.2);
    }

    #[test]
    fn test_rgb_finite() {
        assert!(Rgb::new(0.0, 0.5, 1.0).is_finite());
        assert!(!Rgb::new(f32::NAN, 0.5, 1.0).is_finite());
        assert!(!Rgb::new(0.0, f32::INFINITY, 1.0).is_finite());
    }

    #[test]
    fn test_rgb_array_roundtrip() {
        let a = [0.25, 0.5, 0.75];
        assert_eq!(Rgb::from(a).to_array(), a);
    }
}
