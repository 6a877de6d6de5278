//! CIE XYZ <-> CIE 1976 L*u*v*.
//!
//! Lightness is the CIE companded luminance. Chroma axes `u` and `v` are the
//! offsets of the (u', v') chromaticity from the reference white, scaled by
//! lightness.
//!
//! # Formula
//!
//! ```text
//! L = 116 * (Y / Yn)^(1/3) - 16     if Y / Yn > epsilon
//!   = (Y / Yn) * kappa              otherwise
//!
//! u' = 4X / (X + 15Y + 3Z)          u = 13 * L * (u' - u'n)
//! v' = 9Y / (X + 15Y + 3Z)          v = 13 * L * (v' - v'n)
//! ```
//!
//! Black (`L == 0`) maps to `(0, 0, 0)` in both directions instead of
//! dividing by zero. Any other input goes through the formulas, so
//! non-physical XYZ with `X + 15Y + 3Z == 0` keeps its lightness and gets
//! non-finite chroma.

use hsluv_primaries::{EPSILON, KAPPA, REF_U, REF_V, REF_Y};

/// Converts relative luminance `Y` to CIE lightness `L`.
#[inline]
pub fn y_to_l(y: f64) -> f64 {
    if y <= EPSILON {
        y / REF_Y * KAPPA
    } else {
        116.0 * (y / REF_Y).powf(1.0 / 3.0) - 16.0
    }
}

/// Converts CIE lightness `L` to relative luminance `Y`.
#[inline]
pub fn l_to_y(l: f64) -> f64 {
    if l <= 8.0 {
        REF_Y * l / KAPPA
    } else {
        REF_Y * ((l + 16.0) / 116.0).powi(3)
    }
}

/// Converts XYZ to Luv.
///
/// # Example
///
/// ```rust
/// use hsluv::xyz_to_luv;
///
/// assert_eq!(xyz_to_luv([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
/// ```
pub fn xyz_to_luv(xyz: [f64; 3]) -> [f64; 3] {
    let [x, y, z] = xyz;
    let l = y_to_l(y);
    let divider = x + 15.0 * y + 3.0 * z;

    // Chromaticity is undefined at black
    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let var_u = 4.0 * x / divider;
    let var_v = 9.0 * y / divider;
    let u = 13.0 * l * (var_u - REF_U);
    let v = 13.0 * l * (var_v - REF_V);
    [l, u, v]
}

/// Converts Luv to XYZ.
pub fn luv_to_xyz(luv: [f64; 3]) -> [f64; 3] {
    let [l, u, v] = luv;
    if l == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let var_u = u / (13.0 * l) + REF_U;
    let var_v = v / (13.0 * l) + REF_V;
    let y = l_to_y(l);
    let x = 0.0 - (9.0 * y * var_u) / ((var_u - 4.0) * var_v - var_u * var_v);
    let z = (9.0 * y - 15.0 * var_v * y - var_v * x) / (3.0 * var_v);
    [x, y, z]
}
