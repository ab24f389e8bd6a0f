#![doc = document_features::document_features!()]
//! Tile-by-tile layout of rectangular walls, with grout spacing, row offset patterns,
//! cutouts and reuse of previously cut remnants.

/// Arranging multiple walls in a shared drawing space
pub mod composer;

/// Entities describing a tiling job: walls, tiles, cutouts, patterns and scraps
pub mod entities;

/// Validation errors
pub mod error;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing instances into and exporting solutions out of this library
pub mod io;

/// The tile placement engine and its output
pub mod placement;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::InputError;

/// Remnants and clipped widths below this length (in inches) are not worth tracking.
pub const TOLERANCE: f32 = 0.1;

/// A tile whose usable fraction (after subtracting cutout overlap) is at or below this
/// ratio is consumed entirely by the cutout.
pub const SUPPRESSION_RATIO: f32 = 0.05;
