//! The edit synchronization controller.
//!
//! One [`SyncController`] exists per visualizer instance. It is the
//! only owner of the canonical color and the validation boundary for
//! everything the UI sends in: non-finite input is rejected here,
//! finite out-of-range input is clamped (hue wraps) here, and the
//! conversion/projection core below never sees a bad value.

use chroma_color::{hsv_to_rgb, rgb_to_hsv};
use chroma_core::{ChromaError, ChromaResult, EditSource, Hsv, Rgb};
use chroma_geom::{project, ConeDims, DiscLayout};

use crate::EditOutput;

/// Owns the canonical color and drives projection on every edit.
///
/// # Synchronization invariant
///
/// After every successful [`apply_edit`](Self::apply_edit) the two
/// representations agree up to conversion round-trip tolerance. The
/// edited representation is stored exactly as received (after
/// clamping); only the other one is derived. An RGB edit is never
/// re-derived through HSV and written back over itself, so repeated
/// edits cannot drift.
///
/// # Example
///
/// ```rust
/// use chroma_sync::SyncController;
/// use chroma_core::EditSource;
///
/// let mut sync = SyncController::default();
///
/// // Slider overshoot clamps instead of failing.
/// let out = sync.apply_edit(EditSource::Rgb, [1.5, 0.5, -0.25]).unwrap();
/// assert_eq!(out.rgb.to_array(), [1.0, 0.5, 0.0]);
///
/// // NaN is caller error and gets rejected.
/// assert!(sync.apply_edit(EditSource::Rgb, [f32::NAN, 0.0, 0.0]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SyncController {
    rgb: Rgb,
    hsv: Hsv,
    cone: ConeDims,
    disc: DiscLayout,
    hue_bar_width: f32,
}

impl Default for SyncController {
    /// Starts at black, with the default cone/disc geometry and a
    /// 360-wide hue bar (one pixel per degree).
    fn default() -> Self {
        Self::new(ConeDims::default(), DiscLayout::default(), 360.0)
    }
}

impl SyncController {
    /// Creates a controller with explicit view geometry.
    ///
    /// The initial color is black under the fixed convention
    /// `rgb = (0, 0, 0)`, `hsv = (0, 0, 0)`.
    pub fn new(cone: ConeDims, disc: DiscLayout, hue_bar_width: f32) -> Self {
        Self {
            rgb: Rgb::BLACK,
            hsv: Hsv::BLACK,
            cone,
            disc,
            hue_bar_width,
        }
    }

    /// Current canonical color, RGB view.
    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Current canonical color, HSV view.
    #[inline]
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Applies one edit and returns the projected outputs.
    ///
    /// `values` is interpreted per `source`: `[r, g, b]` in [0, 1] or
    /// `[h, s, v]` in degrees/percent. Finite out-of-range values are
    /// clamped (hue wraps around the circle).
    ///
    /// # Errors
    ///
    /// [`ChromaError::NonFinite`] if any component is NaN or infinite.
    /// The canonical color is left untouched in that case.
    pub fn apply_edit(&mut self, source: EditSource, values: [f32; 3]) -> ChromaResult<EditOutput> {
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ChromaError::NonFinite { source_kind: source, values });
        }

        match source {
            EditSource::Rgb => {
                self.rgb = Rgb::from_array(values).clamp();
                self.hsv = rgb_to_hsv(self.rgb);
            }
            EditSource::Hsv => {
                self.hsv = Hsv::from_array(values).normalize();
                self.rgb = hsv_to_rgb(self.hsv);
            }
        }

        tracing::debug!(%source, rgb = ?self.rgb, hsv = ?self.hsv, "applied edit");
        Ok(self.project())
    }

    /// Projects the current canonical color onto all four views.
    fn project(&self) -> EditOutput {
        EditOutput {
            rgb: self.rgb,
            hsv: self.hsv,
            cube_marker: project::cube_marker(self.rgb),
            cone_marker: project::cone_marker(self.hsv, self.cone),
            disc_marker: project::disc_position(self.hsv, self.disc),
            hue_bar_x: project::hue_bar_position(self.hsv.h, self.hue_bar_width),
        }
    }
}
