//! Reference cloud for the RGB unit cube.
//!
//! In RGB space the position *is* the color: the cube spans [0, 1]³
//! and the point at (r, g, b) displays the color (r, g, b). The sampler
//! therefore needs no conversion at all, just a uniform grid.
//!
//! The cube's translucent boundary box is a rendering-library construct
//! and not produced here; collaborators build it from the same [0, 1]³
//! extent.

use chroma_core::{ChromaError, ChromaResult, Rgb};
use glam::Vec3;

use crate::SamplePoint;

/// Uniform grid sampler over the unit RGB cube.
///
/// Produces `steps³` points, endpoints inclusive on every axis. The
/// default of 11 steps matches the original visualizer's 0.1 spacing.
///
/// # Determinism
///
/// Pure: the same parameters always produce the same points in the
/// same order (r-major, then g, then b).
///
/// # Example
///
/// ```rust
/// use chroma_geom::CubeSampler;
///
/// let points = CubeSampler::default().points();
/// assert_eq!(points.len(), 1331);
///
/// // Identity mapping: position and color agree everywhere.
/// for p in &points {
///     assert_eq!(p.position.to_array(), p.color.to_array());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeSampler {
    steps: u32,
}

impl Default for CubeSampler {
    fn default() -> Self {
        Self { steps: 11 }
    }
}

impl CubeSampler {
    /// Creates a sampler with `steps` grid nodes per axis.
    ///
    /// # Errors
    ///
    /// Fewer than two steps cannot include both endpoints and is
    /// rejected as [`ChromaError::InvalidSampler`].
    pub fn new(steps: u32) -> ChromaResult<Self> {
        if steps < 2 {
            return Err(ChromaError::InvalidSampler(format!(
                "cube sampler needs at least 2 steps per axis, got {steps}"
            )));
        }
        Ok(Self { steps })
    }

    /// Grid nodes per axis.
    #[inline]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Total number of points the sampler produces.
    #[inline]
    pub fn len(&self) -> usize {
        (self.steps as usize).pow(3)
    }

    /// Whether the sampler produces no points. Never true for a
    /// constructed sampler; present for iterator-style symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Generates the cube reference cloud.
    pub fn points(&self) -> Vec<SamplePoint> {
        let last = (self.steps - 1) as f32;
        let mut points = Vec::with_capacity(self.len());

        for ri in 0..self.steps {
            for gi in 0..self.steps {
                for bi in 0..self.steps {
                    let color = Rgb::new(ri as f32 / last, gi as f32 / last, bi as f32 / last);
                    let position = Vec3::new(color.r, color.g, color.b);
                    points.push(SamplePoint::new(position, color));
                }
            }
        }

        tracing::debug!(count = points.len(), steps = self.steps, "generated cube cloud");
        points
    }
}
