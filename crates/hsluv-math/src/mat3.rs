//! 3x3 matrix type for color transformations.
//!
//! [`Mat3`] holds the fixed sRGB <-> XYZ matrices and applies them to
//! [`Vec3`] triplets.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | m00*x + m01*y + m02*z |
//! | m10 m11 m12 | * | y | = | m10*x + m11*y + m12*z |
//! | m20 m21 m22 |   | z |   | m20*x + m21*y + m22*z |
//! ```

use crate::Vec3;
use std::ops::Mul;

/// A 3x3 matrix for color transformations.
///
/// Stored in row-major order. Rows are what the gamut boundary math
/// iterates over, so [`Mat3::rows`] hands them out directly.
///
/// # Example
///
/// ```rust
/// use hsluv_math::{Mat3, Vec3};
///
/// let identity = Mat3::IDENTITY;
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Mat3 {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[f64; 3]; 3],
}

impl Mat3 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ],
    };

    /// Creates a matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { m: rows }
    }

    /// Returns a row as Vec3.
    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    /// Returns the rows in order.
    #[inline]
    pub const fn rows(&self) -> &[[f64; 3]; 3] {
        &self.m
    }

    /// Transforms a Vec3 by this matrix, one row dot product per component.
    #[inline]
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Mat3 * Vec3
impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform(rhs)
    }
}
