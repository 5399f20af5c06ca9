//! Geometric transform pipeline: affine point mapping, corner bounds, and
//! center-rotation with forward-mapped resampling.
//!
//! # Coordinate System
//!
//! - Shapes are `(height, width)` tuples; the origin is the top-left corner
//! - Rotation angles are in degrees
//! - A matrix maps a `(first, second)` coordinate pair; the resampler feeds
//!   it `(column, row)` pairs, so the first output coordinate is horizontal
//! - Transformed coordinates are truncated toward zero, never rounded

mod affine;
mod bounds;
mod rotation;

pub use affine::AffineMatrix;
pub use bounds::{rotated_bounds, Bounds};
pub use rotation::{out_of_bounds, rotate_image, rotation_matrix};

use thiserror::Error;

/// Error types for transform operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The image has a zero dimension, so there is nothing to rotate.
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage {
        /// Offending image width.
        width: u32,
        /// Offending image height.
        height: u32,
    },

    /// The rotation angle is NaN or infinite.
    #[error("Rotation angle is not finite")]
    NonFiniteAngle,

    /// The transformed corner extrema do not span a positive canvas.
    #[error("Rotated bounds produce an empty canvas ({h_max}x{w_max})")]
    EmptyCanvas {
        /// Maximum of the first transformed coordinate.
        h_max: i32,
        /// Maximum of the second transformed coordinate.
        w_max: i32,
    },
}
