//! Per-edit output struct.
//!
//! [`EditOutput`] is the in-process "wire format" between the core and
//! its rendering collaborators: everything a frame needs to draw the
//! selected color, in one value. It serializes to JSON so the CLI can
//! replay edit sequences for inspection.

use chroma_core::{Hsv, Rgb};
use chroma_geom::Marker;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Everything one edit produces.
///
/// The 3D collaborator consumes the two markers (position + material
/// color); the 2D canvas collaborator strokes its outlines at
/// `disc_marker` and `hue_bar_x` after redrawing the disc and bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditOutput {
    /// Canonical color, RGB view.
    pub rgb: Rgb,
    /// Canonical color, HSV view.
    pub hsv: Hsv,
    /// Marker inside the RGB cube.
    pub cube_marker: Marker,
    /// Marker inside the HSV cone.
    pub cone_marker: Marker,
    /// Marker position on the 2D hue/saturation disc.
    pub disc_marker: Vec2,
    /// Marker position along the 1D hue bar.
    pub hue_bar_x: f32,
}
