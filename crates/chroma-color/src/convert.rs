//! The RGB <-> HSV conversion pair.
//!
//! Both directions implement the standard hexcone model: hue selects
//! one of six 60-degree sectors, saturation and value interpolate the
//! channel levels within it.
//!
//! # Range
//!
//! - RGB channels: [0, 1]
//! - Hue: [0, 360) degrees; saturation, value: [0, 100] percent
//!
//! # Totality
//!
//! Both functions are pure and total on their domain. The degenerate
//! cases are pinned by convention rather than treated as errors:
//! black reports saturation 0, and any achromatic input (max channel ==
//! min channel) reports hue 0.
//!
//! Callers clamp before converting; see `chroma-sync` for the
//! validation boundary.

use chroma_core::{Hsv, Rgb};

/// HSV to RGB.
///
/// Converts hue [0, 360), saturation [0, 100], value [0, 100] to
/// channels in [0, 1].
///
/// # Formula
///
/// With s and v normalized to [0, 1]:
///
/// ```text
/// i = floor(h / 60) mod 6      (sector)
/// f = h / 60 - floor(h / 60)   (position within sector)
/// p = v * (1 - s)
/// q = v * (1 - f * s)
/// t = v * (1 - (1 - f) * s)
/// ```
///
/// and the sector table picks the channel order:
/// 0 -> (v,t,p), 1 -> (q,v,p), 2 -> (p,v,t),
/// 3 -> (p,q,v), 4 -> (t,p,v), 5 -> (v,p,q).
///
/// # Example
///
/// ```rust
/// use chroma_color::hsv_to_rgb;
/// use chroma_core::{Hsv, Rgb};
///
/// assert_eq!(hsv_to_rgb(Hsv::new(120.0, 100.0, 100.0)), Rgb::new(0.0, 1.0, 0.0));
/// assert_eq!(hsv_to_rgb(Hsv::new(0.0, 0.0, 100.0)), Rgb::WHITE);
/// ```
#[inline]
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let s = hsv.s / 100.0;
    let v = hsv.v / 100.0;

    let sector = (hsv.h / 60.0).floor();
    let f = hsv.h / 60.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb::new(r, g, b)
}

/// RGB to HSV.
///
/// Converts channels in [0, 1] to hue [0, 360), saturation [0, 100],
/// value [0, 100].
///
/// # Conventions
///
/// - `v` is the largest channel.
/// - `s` is `(max - min) / max`, or 0 when the color is black (no
///   division by zero at the cone apex).
/// - `h` is 0 for any achromatic input; hue is undefined there, and 0
///   is the fixed choice so repeated conversions stay stable.
///
/// # Example
///
/// ```rust
/// use chroma_color::rgb_to_hsv;
/// use chroma_core::Rgb;
///
/// let hsv = rgb_to_hsv(Rgb::new(0.0, 0.0, 1.0));
/// assert_eq!(hsv.to_array(), [240.0, 100.0, 100.0]);
/// ```
#[inline]
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let max = rgb.max_channel();
    let min = rgb.min_channel();
    let d = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { d / max };

    let h = if max == min {
        0.0
    } else {
        let h6 = if max == rgb.r {
            (rgb.g - rgb.b) / d + if rgb.g < rgb.b { 6.0 } else { 0.0 }
        } else if max == rgb.g {
            (rgb.b - rgb.r) / d + 2.0
        } else {
            (rgb.r - rgb.g) / d + 4.0
        };
        (h6 * 60.0).rem_euclid(360.0)
    };

    Hsv::new(h, s * 100.0, v * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_primary_fixed_points() {
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 0.0, 0.0)), Rgb::BLACK);
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 0.0, 100.0)), Rgb::WHITE);
        assert_eq!(hsv_to_rgb(Hsv::new(0.0, 100.0, 100.0)), Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(hsv_to_rgb(Hsv::new(120.0, 100.0, 100.0)), Rgb::new(0.0, 1.0, 0.0));
        assert_eq!(hsv_to_rgb(Hsv::new(240.0, 100.0, 100.0)), Rgb::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_secondary_fixed_points() {
        assert_eq!(hsv_to_rgb(Hsv::new(60.0, 100.0, 100.0)), Rgb::new(1.0, 1.0, 0.0));
        assert_eq!(hsv_to_rgb(Hsv::new(180.0, 100.0, 100.0)), Rgb::new(0.0, 1.0, 1.0));
        assert_eq!(hsv_to_rgb(Hsv::new(300.0, 100.0, 100.0)), Rgb::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_roundtrip_grid() {
        // 11^3 grid over the unit cube, the same density the cube
        // sampler uses.
        for ri in 0..=10 {
            for gi in 0..=10 {
                for bi in 0..=10 {
                    let rgb = Rgb::new(ri as f32 / 10.0, gi as f32 / 10.0, bi as f32 / 10.0);
                    let back = hsv_to_rgb(rgb_to_hsv(rgb));
                    assert_relative_eq!(rgb.r, back.r, epsilon = 1e-5);
                    assert_relative_eq!(rgb.g, back.g, epsilon = 1e-5);
                    assert_relative_eq!(rgb.b, back.b, epsilon = 1e-5);
                }
            }
        }
    }

    #[test]
    fn test_achromatic_hue_convention() {
        for i in 0..=10 {
            let gray = Rgb::splat(i as f32 / 10.0);
            let hsv = rgb_to_hsv(gray);
            assert_eq!(hsv.h, 0.0, "gray {gray:?} must report hue 0");
            assert_eq!(hsv.s, 0.0, "gray {gray:?} must report saturation 0");
        }
    }

    #[test]
    fn test_black_has_zero_saturation() {
        // max == 0 path: must not divide by zero.
        let hsv = rgb_to_hsv(Rgb::BLACK);
        assert_eq!(hsv.to_array(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_output_ranges() {
        for hi in 0..36 {
            for si in 0..=4 {
                for vi in 0..=4 {
                    let hsv = Hsv::new(hi as f32 * 10.0, si as f32 * 25.0, vi as f32 * 25.0);
                    let rgb = hsv_to_rgb(hsv);
                    for c in rgb.to_array() {
                        assert!((0.0..=1.0).contains(&c), "{hsv:?} -> {rgb:?}");
                    }
                    let back = rgb_to_hsv(rgb);
                    assert!((0.0..360.0).contains(&back.h), "{rgb:?} -> {back:?}");
                    assert!((0.0..=100.0).contains(&back.s), "{rgb:?} -> {back:?}");
                    assert!((0.0..=100.0).contains(&back.v), "{rgb:?} -> {back:?}");
                }
            }
        }
    }

    #[test]
    fn test_hue_wraps_at_sector_boundary() {
        // 359.999 sits in the last sector, not past it.
        let rgb = hsv_to_rgb(Hsv::new(359.999, 100.0, 100.0));
        assert_relative_eq!(rgb.r, 1.0, epsilon = 1e-4);
        assert!(rgb.g < 1e-4);
    }
}
