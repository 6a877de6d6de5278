//! # hsluv-primaries
//!
//! The fixed sRGB matrices, reference white and CIE constants that every
//! HSLuv conversion is built on.
//!
//! # Constants
//!
//! HSLuv is defined against sRGB primaries with a D65 white point, and the
//! published reference values are computed from these exact digits, so the
//! matrices are compile-time data. The tests derive the same matrix from
//! the sRGB xy chromaticities to check the digits.
//!
//! # Usage
//!
//! ```rust
//! use hsluv_primaries::{M, M_INV};
//! use hsluv_math::Vec3;
//!
//! // Linear sRGB white to XYZ and back
//! let xyz = M_INV * Vec3::ONE;
//! let rgb = M * xyz;
//! assert!((rgb.x - 1.0).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `hsluv` - RGB <-> XYZ, XYZ <-> Luv and gamut boundary stages

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use hsluv_math::{Mat3, Vec3};

// ============================================================================
// Matrices
// ============================================================================

/// XYZ to linear sRGB.
///
/// Its rows are also the coefficients of the six gamut boundary lines.
pub const M: Mat3 = Mat3::from_rows([
    [3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 1.87596750150772, 0.041555057407175],
    [0.055630079696993, -0.20397695888897, 1.056971514242878],
]);

/// Linear sRGB to XYZ.
pub const M_INV: Mat3 = Mat3::from_rows([
    [0.41239079926595, 0.35758433938387, 0.18048078840183],
    [0.21263900587151, 0.71516867876775, 0.072192315360733],
    [0.019330818715591, 0.11919477979462, 0.95053215224966],
]);

// ============================================================================
// Reference white and CIE constants
// ============================================================================

/// Luminance of the reference white.
pub const REF_Y: f64 = 1.0;

/// u' chromaticity of the reference white.
pub const REF_U: f64 = 0.19783000664283;

/// v' chromaticity of the reference white.
pub const REF_V: f64 = 0.46831999493879;

/// CIE kappa, (29/3)^3.
pub const KAPPA: f64 = 903.2962962;

/// CIE epsilon, (6/29)^3.
pub const EPSILON: f64 = 0.0088564516;

/// XYZ of linear sRGB white, i.e. `M_INV * (1, 1, 1)`.
pub const D65_WHITE: Vec3 = Vec3::new(0.95045592705165, 0.999999999999993, 1.089057750759871);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_matrices_are_inverse() {
        let axes = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        for axis in axes {
            let back = M * (M_INV * Vec3::from_array(axis));
            for (got, expected) in back.to_array().into_iter().zip(axis) {
                assert_abs_diff_eq!(got, expected, epsilon = 1e-12);
            }
        }
    }

    /// sRGB / Rec.709 primaries and D65 white as xy chromaticities.
    const SRGB_XY: [(f64, f64); 4] = [(0.64, 0.33), (0.30, 0.60), (0.15, 0.06), (0.3127, 0.3290)];

    fn xy_to_xyz((x, y): (f64, f64)) -> [f64; 3] {
        [x / y, 1.0, (1.0 - x - y) / y]
    }

    fn det(c: [[f64; 3]; 3]) -> f64 {
        c[0][0] * (c[1][1] * c[2][2] - c[2][1] * c[1][2])
            - c[1][0] * (c[0][1] * c[2][2] - c[2][1] * c[0][2])
            + c[2][0] * (c[0][1] * c[1][2] - c[1][1] * c[0][2])
    }

    /// Linear RGB to XYZ from primaries: columns are the primaries in XYZ,
    /// scaled so RGB (1, 1, 1) lands on the white point.
    fn rgb_to_xyz_matrix(xy: [(f64, f64); 4]) -> [[f64; 3]; 3] {
        let cols = [xy_to_xyz(xy[0]), xy_to_xyz(xy[1]), xy_to_xyz(xy[2])];
        let white = xy_to_xyz(xy[3]);

        // Cramer's rule for the per-primary scale
        let d = det(cols);
        let mut scale = [0.0; 3];
        for (k, s) in scale.iter_mut().enumerate() {
            let mut replaced = cols;
            replaced[k] = white;
            *s = det(replaced) / d;
        }

        let mut m = [[0.0; 3]; 3];
        for (row, out) in m.iter_mut().enumerate() {
            for (col, v) in out.iter_mut().enumerate() {
                *v = cols[col][row] * scale[col];
            }
        }
        m
    }

    #[test]
    fn test_derived_matrix_matches_constant() {
        let derived = rgb_to_xyz_matrix(SRGB_XY);
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(derived[i][j], M_INV.m[i][j], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_white_point() {
        let white = M_INV * Vec3::ONE;
        assert_abs_diff_eq!(white.x, D65_WHITE.x, epsilon = 1e-15);
        assert_abs_diff_eq!(white.y, REF_Y, epsilon = 1e-12);
        assert_abs_diff_eq!(white.z, D65_WHITE.z, epsilon = 1e-15);
    }

    #[test]
    fn test_reference_chromaticity() {
        let w = D65_WHITE;
        let divider = w.x + 15.0 * w.y + 3.0 * w.z;
        assert_abs_diff_eq!(4.0 * w.x / divider, REF_U, epsilon = 1e-12);
        assert_abs_diff_eq!(9.0 * w.y / divider, REF_V, epsilon = 1e-12);
    }

    #[test]
    fn test_cie_constants() {
        assert_abs_diff_eq!(KAPPA, (29.0f64 / 3.0).powi(3), epsilon = 1e-6);
        assert_abs_diff_eq!(EPSILON, (6.0f64 / 29.0).powi(3), epsilon = 1e-9);
    }
}
