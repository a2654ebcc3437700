//! Reference cloud for the HSV cone.
//!
//! The HSV solid is rendered as an inverted cone: the apex sits at the
//! origin (value 0, black) and the solid widens linearly to its full
//! radius at the top rim (value 1). Hue is the angle around the axis,
//! saturation grows radially outward.
//!
//! The cloud has three parts, generated in order:
//!
//! 1. a single black apex point at the origin,
//! 2. `rings x segments` boundary points on the cone surface,
//! 3. an interior square-grid fill per ring, so the cone does not look
//!    hollow when viewed from above.
//!
//! Every point is colored by converting its own cylindrical coordinate
//! through [`chroma_color::hsv_to_rgb`].

use chroma_core::{ChromaError, ChromaResult, Hsv, Rgb};
use chroma_color::hsv_to_rgb;
use glam::Vec3;

use crate::SamplePoint;

/// Extent of the cone solid: full radius at the top rim, and height.
///
/// The defaults (radius 0.5, height 1.0) place the cone in the same
/// footprint the cube occupies, which keeps the two solids readable
/// side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeDims {
    /// Radius at the top rim (value = 100%).
    pub radius: f32,
    /// Height of the cone along +Y.
    pub height: f32,
}

impl Default for ConeDims {
    fn default() -> Self {
        Self { radius: 0.5, height: 1.0 }
    }
}

/// Ring/segment sampler over the inverted HSV cone.
///
/// # Determinism
///
/// Pure: the same parameters always produce the same points in the
/// same order (apex, boundary rings bottom-up, then interior fill
/// bottom-up).
///
/// # Example
///
/// ```rust
/// use chroma_geom::ConeSampler;
///
/// let dense = ConeSampler::default().points();
/// let sparse = ConeSampler::default().with_interior(false).points();
/// assert!(dense.len() > sparse.len());
///
/// // Sparse variant: apex + 10 rings of 32 segments.
/// assert_eq!(sparse.len(), 1 + 10 * 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeSampler {
    dims: ConeDims,
    rings: u32,
    segments: u32,
    grid_size: u32,
    interior: bool,
}

impl Default for ConeSampler {
    fn default() -> Self {
        Self {
            dims: ConeDims::default(),
            rings: 10,
            segments: 32,
            grid_size: 8,
            interior: true,
        }
    }
}

impl ConeSampler {
    /// Creates a sampler with explicit ring/segment counts.
    ///
    /// # Errors
    ///
    /// Zero rings or segments, a zero interior grid, or non-positive
    /// dimensions are rejected as [`ChromaError::InvalidSampler`].
    pub fn new(dims: ConeDims, rings: u32, segments: u32, grid_size: u32) -> ChromaResult<Self> {
        if rings == 0 || segments == 0 || grid_size == 0 {
            return Err(ChromaError::InvalidSampler(format!(
                "cone sampler needs rings, segments and grid_size > 0, \
                 got rings={rings} segments={segments} grid_size={grid_size}"
            )));
        }
        if dims.radius <= 0.0 || dims.height <= 0.0 {
            return Err(ChromaError::InvalidSampler(format!(
                "cone dims must be positive, got radius={} height={}",
                dims.radius, dims.height
            )));
        }
        Ok(Self { dims, rings, segments, grid_size, interior: true })
    }

    /// Enables or disables the interior fill.
    ///
    /// With the fill off only the apex and the boundary rings remain,
    /// which reads as a hollow shell. The dense default is what the
    /// visualizer ships with.
    #[must_use]
    pub fn with_interior(mut self, interior: bool) -> Self {
        self.interior = interior;
        self
    }

    /// The cone extent this sampler fills.
    #[inline]
    pub fn dims(&self) -> ConeDims {
        self.dims
    }

    /// Generates the cone reference cloud.
    pub fn points(&self) -> Vec<SamplePoint> {
        let mut points = Vec::new();

        // Apex: value 0, so the color is black regardless of hue.
        points.push(SamplePoint::new(Vec3::ZERO, Rgb::BLACK));

        self.push_boundary(&mut points);
        if self.interior {
            self.push_interior(&mut points);
        }

        tracing::debug!(
            count = points.len(),
            rings = self.rings,
            segments = self.segments,
            interior = self.interior,
            "generated cone cloud"
        );
        points
    }

    /// Boundary rings on the cone surface, bottom-up.
    fn push_boundary(&self, points: &mut Vec<SamplePoint>) {
        for ring in 1..=self.rings {
            let v = ring as f32 / self.rings as f32;
            let ring_radius = self.dims.radius * v;
            let y = v * self.dims.height;

            for segment in 0..self.segments {
                let theta = segment as f32 / self.segments as f32 * std::f32::consts::TAU;
                let x = ring_radius * theta.cos();
                let z = ring_radius * theta.sin();

                let hue = segment as f32 / self.segments as f32 * 360.0;
                let saturation = (x * x + z * z).sqrt() / self.dims.radius * 100.0;
                let color = hsv_to_rgb(Hsv::new(hue, saturation, v * 100.0));

                points.push(SamplePoint::new(Vec3::new(x, y, z), color));
            }
        }
    }

    /// Square-grid fill of each ring's disc, bottom-up.
    ///
    /// Membership is decided on the integer lattice (`xi² + zi² ≤ g²`),
    /// which is the same disc predicate as comparing float distances
    /// but immune to rounding at the rim.
    fn push_interior(&self, points: &mut Vec<SamplePoint>) {
        let g = self.grid_size as i64;

        for ring in 1..=self.rings {
            let v = ring as f32 / self.rings as f32;
            let ring_radius = self.dims.radius * v;
            let y = v * self.dims.height;

            for xi in -g..=g {
                for zi in -g..=g {
                    if xi * xi + zi * zi > g * g {
                        continue;
                    }
                    let x = xi as f32 / g as f32 * ring_radius;
                    let z = zi as f32 / g as f32 * ring_radius;

                    let theta = z.atan2(x);
                    let hue = theta.to_degrees().rem_euclid(360.0);
                    let dist = (x * x + z * z).sqrt();
                    let saturation = dist / self.dims.radius * 100.0;
                    let color = hsv_to_rgb(Hsv::new(hue, saturation, v * 100.0));

                    points.push(SamplePoint::new(Vec3::new(x, y, z), color));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Lattice points inside a disc of integer radius `g`, the
    /// per-ring interior count.
    fn disc_lattice_count(g: i64) -> usize {
        let mut n = 0;
        for xi in -g..=g {
            for zi in -g..=g {
                if xi * xi + zi * zi <= g * g {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn test_cone_sparse_point_count() {
        let points = ConeSampler::default().with_interior(false).points();
        assert_eq!(points.len(), 1 + 10 * 32);
    }

    #[test]
    fn test_cone_dense_point_count() {
        let points = ConeSampler::default().points();
        assert_eq!(points.len(), 1 + 10 * 32 + 10 * disc_lattice_count(8));
    }

    #[test]
    fn test_cone_rejects_degenerate_parameters() {
        assert!(ConeSampler::new(ConeDims::default(), 0, 32, 8).is_err());
        assert!(ConeSampler::new(ConeDims::default(), 10, 0, 8).is_err());
        assert!(ConeSampler::new(ConeDims::default(), 10, 32, 0).is_err());
        assert!(ConeSampler::new(ConeDims { radius: 0.0, height: 1.0 }, 10, 32, 8).is_err());
        assert!(ConeSampler::new(ConeDims { radius: 0.5, height: -1.0 }, 10, 32, 8).is_err());
    }

    #[test]
    fn test_cone_apex_is_black_at_origin() {
        let points = ConeSampler::default().points();
        assert_eq!(points[0].position, Vec3::ZERO);
        assert_eq!(points[0].color, Rgb::BLACK);
    }

    #[test]
    fn test_cone_determinism() {
        let sampler = ConeSampler::default();
        assert_eq!(sampler.points(), sampler.points());
    }

    #[test]
    fn test_cone_points_inside_solid() {
        let sampler = ConeSampler::default();
        let dims = sampler.dims();
        for p in sampler.points() {
            assert!((0.0..=dims.height).contains(&p.position.y));
            let radial = (p.position.x * p.position.x + p.position.z * p.position.z).sqrt();
            // Radius available at this height shrinks toward the apex.
            let available = dims.radius * p.position.y / dims.height;
            assert!(radial <= available + 1e-5, "point {p:?} outside cone");
        }
    }

    #[test]
    fn test_cone_rim_starts_at_red() {
        // First boundary point of the top ring sits at theta 0 = hue 0.
        let points = ConeSampler::default().with_interior(false).points();
        let top_ring_first = points[1 + 9 * 32];
        assert_relative_eq!(top_ring_first.position.y, 1.0);
        // Hue 0, saturation 100, value 100 is pure red.
        assert_relative_eq!(top_ring_first.color.r, 1.0);
        assert_relative_eq!(top_ring_first.color.g, 0.0);
        assert_relative_eq!(top_ring_first.color.b, 0.0);
    }

    #[test]
    fn test_cone_boundary_saturation_tracks_height() {
        // The cloud colors saturation as distance over *full* radius,
        // so a boundary point at value v carries saturation 100 * v.
        let sampler = ConeSampler::default().with_interior(false).points();
        let mid_ring_first = sampler[1 + 4 * 32]; // ring 5 of 10
        let expected = hsv_to_rgb(Hsv::new(0.0, 50.0, 50.0));
        assert_relative_eq!(mid_ring_first.color.r, expected.r, epsilon = 1e-5);
        assert_relative_eq!(mid_ring_first.color.g, expected.g, epsilon = 1e-5);
        assert_relative_eq!(mid_ring_first.color.b, expected.b, epsilon = 1e-5);
    }
}
