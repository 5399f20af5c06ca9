//! Pivot Core - Grayscale image rotation library
//!
//! This crate rotates a single-channel raster by an arbitrary angle,
//! optionally expanding the output canvas so no source content is clipped.
//!
//! # Pipeline
//!
//! 1. [`rotation_matrix`] builds a 2x3 affine matrix that rotates about the
//!    image center. With `adjust_boundaries = true` the translation terms are
//!    shifted so the rotated extent is centered in an expanded canvas.
//! 2. [`rotated_bounds`] maps the four image corners through a matrix and
//!    returns the extrema of the results, which size the destination raster.
//! 3. [`rotate_image`] forward-maps every source pixel through the matrix
//!    into the destination, dropping pixels that land on or outside the
//!    destination edges.
//!
//! Resampling is forward (scatter) mapping with truncating coordinate
//! conversion: multiple source pixels may collide on one destination cell
//! (last write in row-major source order wins) and some destination cells
//! receive no contribution and stay at the background value 0. That produces
//! visible gaps at non-90-degree angles; it is the intended behavior, not
//! something this crate tries to hide with interpolation.
//!
//! # Example
//!
//! ```
//! use pivot_core::{rotate_image, rotation_matrix, GrayImage};
//!
//! let image = GrayImage::zeroed(64, 64);
//! let matrix = rotation_matrix((image.height, image.width), 45.0, true).unwrap();
//! let rotated = rotate_image(&image, &matrix).unwrap();
//!
//! // A 45-degree rotation needs a larger canvas to hold all four corners.
//! assert!(rotated.width > image.width);
//! assert!(rotated.height > image.height);
//! ```

pub mod raster;
pub mod transform;

pub use raster::GrayImage;
pub use transform::{
    out_of_bounds, rotate_image, rotated_bounds, rotation_matrix, AffineMatrix, Bounds,
    TransformError,
};
