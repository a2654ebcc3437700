//! Marker projection.
//!
//! Pure functions mapping the canonical color onto the four views: the
//! RGB cube, the HSV cone, the 2D hue/saturation disc of the canvas
//! picker, and its 1D hue bar. Called after every edit; nothing here
//! holds state, results go straight to the rendering collaborators.

use chroma_color::hsv_to_rgb;
use chroma_core::{Hsv, Rgb};
use glam::{Vec2, Vec3};

use crate::{ConeDims, Marker};

/// Layout of the 2D hue/saturation disc on the canvas.
///
/// Hue is the angle, saturation the distance from the center; the rim
/// is saturation 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscLayout {
    /// Disc center in canvas coordinates.
    pub center: Vec2,
    /// Disc radius in canvas pixels.
    pub radius: f32,
}

impl Default for DiscLayout {
    fn default() -> Self {
        Self { center: Vec2::ZERO, radius: 100.0 }
    }
}

/// Marker inside the RGB cube.
///
/// Identity mapping: in the unit cube the RGB triple *is* the
/// position, so marker and color coincide by construction.
#[inline]
pub fn cube_marker(rgb: Rgb) -> Marker {
    Marker::new(Vec3::new(rgb.r, rgb.g, rgb.b), rgb)
}

/// Marker inside the HSV cone.
///
/// The radial placement nests two scalings:
///
/// ```text
/// theta      = h / 360 * 2*pi
/// max_radius = R * s / 100       (radius available at full value)
/// radius     = max_radius * v / 100
/// ```
///
/// Radius shrinks with *both* saturation and value. This nesting, not
/// a saturation-only scaling, is what makes the solid a cone: dark
/// colors of any saturation collapse toward the apex.
///
/// Height is linear in value: `y = v / 100 * height`.
///
/// # Example
///
/// ```rust
/// use chroma_geom::project::cone_marker;
/// use chroma_core::Hsv;
///
/// // Full-value red sits on the top rim.
/// let m = cone_marker(Hsv::new(0.0, 100.0, 100.0), Default::default());
/// assert_eq!(m.position.to_array(), [0.5, 1.0, 0.0]);
///
/// // Black sits at the apex no matter the hue.
/// let m = cone_marker(Hsv::new(217.0, 100.0, 0.0), Default::default());
/// assert_eq!(m.position.to_array(), [0.0, 0.0, 0.0]);
/// ```
#[inline]
pub fn cone_marker(hsv: Hsv, dims: ConeDims) -> Marker {
    let theta = hsv.h / 360.0 * std::f32::consts::TAU;
    let max_radius = dims.radius * hsv.s / 100.0;
    let radius = max_radius * hsv.v / 100.0;

    let position = Vec3::new(
        radius * theta.cos(),
        hsv.v / 100.0 * dims.height,
        radius * theta.sin(),
    );
    Marker::new(position, hsv_to_rgb(hsv))
}

/// Marker position on the 2D hue/saturation disc.
///
/// Angle from hue, distance from saturation; value does not move the
/// disc marker (the disc shows the full-value slice).
#[inline]
pub fn disc_position(hsv: Hsv, layout: DiscLayout) -> Vec2 {
    let angle = hsv.h.to_radians();
    let distance = hsv.s / 100.0 * layout.radius;
    layout.center + distance * Vec2::new(angle.cos(), angle.sin())
}

/// Marker position on the 1D hue bar.
///
/// Plain linear mapping of [0, 360) onto [0, bar_width).
#[inline]
pub fn hue_bar_position(hue: f32, bar_width: f32) -> f32 {
    hue / 360.0 * bar_width
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_marker_identity() {
        let m = cube_marker(Rgb::new(0.2, 0.4, 0.8));
        assert_eq!(m.position.to_array(), [0.2, 0.4, 0.8]);
        assert_eq!(m.color, Rgb::new(0.2, 0.4, 0.8));
    }

    #[test]
    fn test_cone_marker_value_moves_height_linearly() {
        let dims = ConeDims::default();
        for vi in 0..=10 {
            let v = vi as f32 * 10.0;
            let m = cone_marker(Hsv::new(90.0, 60.0, v), dims);
            assert_relative_eq!(m.position.y, v / 100.0 * dims.height, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_cone_marker_radius_scales_with_value() {
        // Radial distance must grow linearly with value, not stay
        // constant at the saturation radius.
        let dims = ConeDims::default();
        let radial = |v: f32| {
            let m = cone_marker(Hsv::new(45.0, 80.0, v), dims);
            (m.position.x * m.position.x + m.position.z * m.position.z).sqrt()
        };
        let full = radial(100.0);
        assert_relative_eq!(full, dims.radius * 0.8, epsilon = 1e-5);
        assert_relative_eq!(radial(50.0), full * 0.5, epsilon = 1e-5);
        assert_relative_eq!(radial(0.0), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cone_marker_hue_sets_angle() {
        let dims = ConeDims::default();
        let m = cone_marker(Hsv::new(90.0, 100.0, 100.0), dims);
        // 90 degrees points along +Z.
        assert_relative_eq!(m.position.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(m.position.z, dims.radius, epsilon = 1e-6);
    }

    #[test]
    fn test_disc_center_and_rim() {
        let layout = DiscLayout { center: Vec2::new(150.0, 150.0), radius: 120.0 };

        // Saturation 0 is the center regardless of hue.
        let p = disc_position(Hsv::new(200.0, 0.0, 100.0), layout);
        assert_relative_eq!(p.x, 150.0, epsilon = 1e-4);
        assert_relative_eq!(p.y, 150.0, epsilon = 1e-4);

        // Saturation 100 at hue 0 is the rim along +X.
        let p = disc_position(Hsv::new(0.0, 100.0, 100.0), layout);
        assert_relative_eq!(p.x, 270.0, epsilon = 1e-4);
        assert_relative_eq!(p.y, 150.0, epsilon = 1e-4);
    }

    #[test]
    fn test_disc_ignores_value() {
        let layout = DiscLayout::default();
        let bright = disc_position(Hsv::new(120.0, 50.0, 100.0), layout);
        let dark = disc_position(Hsv::new(120.0, 50.0, 10.0), layout);
        assert_eq!(bright, dark);
    }

    #[test]
    fn test_hue_bar_position() {
        assert_eq!(hue_bar_position(0.0, 300.0), 0.0);
        assert_relative_eq!(hue_bar_position(180.0, 300.0), 150.0);
        assert_relative_eq!(hue_bar_position(359.0, 300.0), 299.166_66, epsilon = 1e-3);
    }
}
