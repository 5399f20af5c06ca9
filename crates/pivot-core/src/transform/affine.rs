//! 2x3 affine matrix and point mapping.

use serde::{Deserialize, Serialize};

/// A 2x3 affine transform over `(u, v)` coordinate pairs.
///
/// The six coefficients encode the map:
///
/// ```text
/// u' = a*u + b*v + c
/// v' = d*u + e*v + f
/// ```
///
/// For the matrices built by [`rotation_matrix`], the linear sub-block
/// `(a, b, d, e)` is a pure rotation (`a = e = cos t`, `b = -sin t`,
/// `d = sin t`) and `c`/`f` carry the derived translation.
///
/// [`rotation_matrix`]: crate::transform::rotation_matrix
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineMatrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl AffineMatrix {
    /// The identity transform: every point maps to itself.
    pub fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
            e: 1.0,
            f: 0.0,
        }
    }

    /// Build a matrix from `[a, b, c, d, e, f]`.
    pub fn from_array(values: [f64; 6]) -> Self {
        Self {
            a: values[0],
            b: values[1],
            c: values[2],
            d: values[3],
            e: values[4],
            f: values[5],
        }
    }

    /// Return the coefficients as `[a, b, c, d, e, f]`.
    pub fn to_array(self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Map a point without converting to pixel coordinates.
    #[inline]
    pub fn map_point(&self, u: f64, v: f64) -> (f64, f64) {
        (
            self.a * u + self.b * v + self.c,
            self.d * u + self.e * v + self.f,
        )
    }

    /// Map a point and truncate the result toward zero.
    ///
    /// Truncation (not rounding) is the fixed coordinate conversion policy
    /// of the whole pipeline; bounds computation and resampling both go
    /// through this function so every caller sees identical pixel
    /// coordinates.
    #[inline]
    pub fn transform_point(&self, u: f64, v: f64) -> (i32, i32) {
        let (up, vp) = self.map_point(u, v);
        (up as i32, vp as i32)
    }
}
