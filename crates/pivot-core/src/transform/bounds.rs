//! Axis-aligned bounds of transformed image corners.

use serde::{Deserialize, Serialize};

use crate::transform::AffineMatrix;

/// Extrema of the four transformed corner coordinates of a rectangle.
///
/// `h_min`/`h_max` bound the first output coordinate of
/// [`AffineMatrix::transform_point`] and `w_min`/`w_max` the second. The
/// field names mirror the `(height, width)` order used for shape tuples;
/// during resampling the matrix's first coordinate is fed column indices,
/// so `h_min`/`h_max` span the horizontal extent of the rotated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum of the first transformed coordinate.
    pub h_min: i32,
    /// Maximum of the first transformed coordinate.
    pub h_max: i32,
    /// Minimum of the second transformed coordinate.
    pub w_min: i32,
    /// Maximum of the second transformed coordinate.
    pub w_max: i32,
}

impl Bounds {
    /// Returns true when a transformed point lies inside the box,
    /// boundaries included.
    pub fn contains(&self, point: (i32, i32)) -> bool {
        let (u, v) = point;
        u >= self.h_min && u <= self.h_max && v >= self.w_min && v <= self.w_max
    }
}

/// Calculate the bounds of an image transformed by `matrix`.
///
/// The four corners of the `(height, width)` rectangle are taken in
/// `(column, row)` order - `(0, 0)`, `(W, 0)`, `(0, H)`, `(W, H)` - mapped
/// through the matrix with truncating conversion, and reduced to their
/// per-coordinate extrema.
///
/// Both the canvas expansion in [`rotation_matrix`] and the destination
/// sizing in [`rotate_image`] go through this function, so the two always
/// agree on where the rotated content lies.
///
/// [`rotation_matrix`]: crate::transform::rotation_matrix
/// [`rotate_image`]: crate::transform::rotate_image
pub fn rotated_bounds(shape: (u32, u32), matrix: &AffineMatrix) -> Bounds {
    let (height, width) = (shape.0 as f64, shape.1 as f64);
    let corners = [
        (0.0, 0.0),
        (width, 0.0),
        (0.0, height),
        (width, height),
    ];

    let points = corners.map(|(u, v)| matrix.transform_point(u, v));

    let mut bounds = Bounds {
        h_min: points[0].0,
        h_max: points[0].0,
        w_min: points[0].1,
        w_max: points[0].1,
    };
    for &(u, v) in &points[1..] {
        bounds.h_min = bounds.h_min.min(u);
        bounds.h_max = bounds.h_max.max(u);
        bounds.w_min = bounds.w_min.min(v);
        bounds.w_max = bounds.w_max.max(v);
    }
    bounds
}


// ============================================================================
// Property-Based Tests
// ============================================================================
