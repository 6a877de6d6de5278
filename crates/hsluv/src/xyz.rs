//! sRGB <-> CIE XYZ.
//!
//! Companding through [`hsluv_transfer::srgb`], then one matrix product
//! with the fixed sRGB matrices.
//!
//! # Example
//!
//! ```rust
//! use hsluv::{rgb_to_xyz, xyz_to_rgb};
//!
//! let xyz = rgb_to_xyz([1.0, 1.0, 1.0]);
//! assert!((xyz[1] - 1.0).abs() < 1e-12);
//!
//! let rgb = xyz_to_rgb(xyz);
//! assert!((rgb[2] - 1.0).abs() < 1e-12);
//! ```

use hsluv_math::Vec3;
use hsluv_primaries::{M, M_INV};
use hsluv_transfer::srgb;

/// Converts sRGB in `[0, 1]` to XYZ.
#[inline]
pub fn rgb_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    let linear = Vec3::from_array(srgb::eotf_rgb(rgb));
    (M_INV * linear).to_array()
}

/// Converts XYZ to sRGB, nominally `[0, 1]`.
///
/// Out-of-gamut colors come back outside the unit interval.
#[inline]
pub fn xyz_to_rgb(xyz: [f64; 3]) -> [f64; 3] {
    let linear = M * Vec3::from_array(xyz);
    srgb::oetf_rgb(linear.to_array())
}
