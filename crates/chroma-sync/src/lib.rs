//! # chroma-sync
//!
//! Canonical color state and edit synchronization.
//!
//! [`SyncController`] owns the one authoritative color of the
//! visualizer and keeps its two representations — RGB and HSV — in
//! lockstep. UI collaborators feed edits in through
//! [`SyncController::apply_edit`]; each call returns an [`EditOutput`]
//! with both representations and the four projected marker placements,
//! ready for the rendering collaborators to draw.
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_sync::SyncController;
//! use chroma_core::EditSource;
//!
//! let mut sync = SyncController::default();
//! let out = sync.apply_edit(EditSource::Hsv, [240.0, 100.0, 100.0]).unwrap();
//!
//! assert_eq!(out.rgb.to_array(), [0.0, 0.0, 1.0]);
//! assert_eq!(out.cube_marker.position.to_array(), [0.0, 0.0, 1.0]);
//! ```
//!
//! # Concurrency
//!
//! Deliberately single-threaded: one synchronous edit runs to
//! completion before the next arrives, and the render loop only reads
//! the last returned output. There is no interior mutability and no
//! locking to reason about.
//!
//! # Dependencies
//!
//! - [`chroma_core`] - color types, edit source, errors
//! - [`chroma_color`] - derives the non-authoritative representation
//! - [`chroma_geom`] - marker projection and the startup sample clouds

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod controller;
pub mod output;

pub use controller::SyncController;
pub use output::EditOutput;
