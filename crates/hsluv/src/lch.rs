//! CIE Luv <-> LCh(uv), the polar form of Luv.
//!
//! Hue is in degrees, always normalized into `[0, 360)`. Below
//! [`ACHROMATIC_CHROMA`] hue is meaningless and is reported as `0` so gray
//! colors have a stable hue instead of `atan2` rounding noise.

use std::f64::consts::PI;

use crate::consts::ACHROMATIC_CHROMA;
use crate::luv::{luv_to_xyz, xyz_to_luv};
use crate::xyz::{rgb_to_xyz, xyz_to_rgb};

/// Converts Luv to LCh.
///
/// # Example
///
/// ```rust
/// use hsluv::luv_to_lch;
///
/// let [l, c, h] = luv_to_lch([50.0, 0.0, -10.0]);
/// assert_eq!((l, c, h), (50.0, 10.0, 270.0));
/// ```
pub fn luv_to_lch(luv: [f64; 3]) -> [f64; 3] {
    let [l, u, v] = luv;
    let c = (u * u + v * v).sqrt();

    let h = if c < ACHROMATIC_CHROMA {
        0.0
    } else {
        let mut h = v.atan2(u) * 180.0 / PI;
        if h < 0.0 {
            h += 360.0;
        }
        // A tiny negative angle rounds up to exactly 360
        if h >= 360.0 {
            h = 0.0;
        }
        h
    };

    [l, c, h]
}

/// Converts LCh to Luv.
pub fn lch_to_luv(lch: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = lch;
    let h_rad = h / 360.0 * 2.0 * PI;
    [l, h_rad.cos() * c, h_rad.sin() * c]
}

/// Converts sRGB in `[0, 1]` to LCh.
#[inline]
pub fn rgb_to_lch(rgb: [f64; 3]) -> [f64; 3] {
    luv_to_lch(xyz_to_luv(rgb_to_xyz(rgb)))
}

/// Converts LCh to sRGB, nominally `[0, 1]`.
#[inline]
pub fn lch_to_rgb(lch: [f64; 3]) -> [f64; 3] {
    xyz_to_rgb(luv_to_xyz(lch_to_luv(lch)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_axes() {
        assert_eq!(luv_to_lch([50.0, 10.0, 0.0]), [50.0, 10.0, 0.0]);
        assert_eq!(luv_to_lch([50.0, 0.0, 10.0]), [50.0, 10.0, 90.0]);
        assert_eq!(luv_to_lch([50.0, -10.0, 0.0]), [50.0, 10.0, 180.0]);
        assert_eq!(luv_to_lch([50.0, 0.0, -10.0]), [50.0, 10.0, 270.0]);
    }

    #[test]
    fn test_achromatic_hue_is_zero() {
        assert_eq!(luv_to_lch([50.0, 0.0, 0.0]), [50.0, 0.0, 0.0]);
        let [_, c, h] = luv_to_lch([50.0, -5e-9, -5e-9]);
        assert!(c < ACHROMATIC_CHROMA);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_hue_never_reaches_360() {
        let [_, _, h] = luv_to_lch([50.0, 1.0, -1e-20]);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_hue_range() {
        for i in 0..720 {
            let angle = i as f64 / 2.0 * PI / 180.0;
            let [_, _, h] = luv_to_lch([60.0, 30.0 * angle.cos(), 30.0 * angle.sin()]);
            assert!((0.0..360.0).contains(&h), "h={}", h);
        }
    }

    #[test]
    fn test_roundtrip() {
        for &luv in &[[50.0, 10.0, -20.0], [87.7, -83.1, 107.4], [12.0, 0.5, 0.25]] {
            let back = lch_to_luv(luv_to_lch(luv));
            for i in 0..3 {
                assert_abs_diff_eq!(back[i], luv[i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_rgb_composite() {
        let rgb = [0.25, 0.5, 0.75];
        let back = lch_to_rgb(rgb_to_lch(rgb));
        for i in 0..3 {
            assert_abs_diff_eq!(back[i], rgb[i], epsilon = 1e-12);
        }
    }
}
