//! # chroma-geom
//!
//! Point-cloud samplers and marker projection for chromascope.
//!
//! Each color space is visualized as a solid filled with a static
//! reference point cloud, plus a single mutable marker showing the
//! currently selected color:
//!
//! - [`CubeSampler`] - uniform grid over the unit RGB cube
//! - [`ConeSampler`] - ring/interior cloud over the inverted HSV cone
//! - [`project`] - pure functions placing the marker in the cube, the
//!   cone, the 2D hue/saturation disc and the 1D hue bar
//!
//! Sample clouds are generated once at startup and handed to the
//! rendering collaborator; only the markers move afterwards.
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_geom::{ConeSampler, CubeSampler, project};
//! use chroma_core::Hsv;
//!
//! let cube = CubeSampler::default().points();
//! assert_eq!(cube.len(), 11 * 11 * 11);
//!
//! let cone = ConeSampler::default().points();
//! assert!(!cone.is_empty());
//!
//! let marker = project::cone_marker(Hsv::new(0.0, 100.0, 100.0), Default::default());
//! assert_eq!(marker.position.y, 1.0);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma_core`] - `Rgb`/`Hsv` types
//! - [`chroma_color`] - colors each sample point via `hsv_to_rgb`
//! - [`glam`] - `Vec3`/`Vec2` positions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cone;
pub mod cube;
pub mod project;
pub mod sample;

pub use cone::{ConeDims, ConeSampler};
pub use cube::CubeSampler;
pub use project::DiscLayout;
pub use sample::{Marker, SamplePoint};
