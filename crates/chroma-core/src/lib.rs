//! # chroma-core
//!
//! Core types for the chromascope color visualizer.
//!
//! This crate provides the foundational types used throughout the
//! chromascope workspace:
//!
//! - [`Rgb`] - A color as red/green/blue channels in [0, 1]
//! - [`Hsv`] - A color as hue (degrees), saturation and value (percent)
//! - [`EditSource`] - Which representation an edit originated from
//! - [`ChromaError`] - Unified error type for the workspace
//!
//! ## Conventions
//!
//! Internally everything is normalized: RGB channels live in [0, 1],
//! hue in [0, 360) degrees, saturation and value in [0, 100] percent.
//! Display-range mapping (0-255 sliders and the like) is a UI concern
//! and never enters these types.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of chromascope and has no internal
//! dependencies. All other chromascope crates depend on `chroma-core`:
//!
//! ```text
//! chroma-core (this crate)
//!    ^
//!    |
//!    +-- chroma-color (RGB <-> HSV conversion)
//!    +-- chroma-geom (samplers, markers, projection)
//!    +-- chroma-sync (canonical color state)
//!    +-- chroma-cli (command line front)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod edit;
pub mod error;
pub mod hsv;
pub mod rgb;

// Re-exports for convenience
pub use edit::EditSource;
pub use error::{ChromaError, ChromaResult};
pub use hsv::Hsv;
pub use rgb::Rgb;
