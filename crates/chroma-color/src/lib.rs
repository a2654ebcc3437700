//! # chroma-color
//!
//! RGB <-> HSV conversion for the chromascope color visualizer.
//!
//! The two functions in [`convert`] are the color model everything else
//! builds on: the samplers color their point clouds through
//! [`hsv_to_rgb`], and the sync layer derives the non-authoritative
//! representation after each edit through whichever direction applies.
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_color::{hsv_to_rgb, rgb_to_hsv};
//! use chroma_core::{Hsv, Rgb};
//!
//! let red = hsv_to_rgb(Hsv::new(0.0, 100.0, 100.0));
//! assert_eq!(red, Rgb::new(1.0, 0.0, 0.0));
//!
//! let back = rgb_to_hsv(red);
//! assert_eq!(back.to_array(), [0.0, 100.0, 100.0]);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma_core`] - The `Rgb` and `Hsv` types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;

pub use convert::{hsv_to_rgb, rgb_to_hsv};
