//! LCh <-> HSLuv and the composed sRGB pipelines.
//!
//! Saturation is chroma as a percentage of [`max_safe_chroma_for_lh`], the
//! distance to the sRGB gamut edge along this hue at this lightness.

use crate::bounds::max_safe_chroma_for_lh;
use crate::consts::{BLACK_LIGHTNESS, WHITE_LIGHTNESS};
use crate::lch::{lch_to_rgb, rgb_to_lch};

/// Converts LCh to HSLuv.
///
/// Lightness past the white or black thresholds snaps to exactly 100 or 0
/// with zero saturation. Hue passes through.
pub fn lch_to_hsluv(lch: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = lch;

    if l > WHITE_LIGHTNESS {
        return [h, 0.0, 100.0];
    }
    if l < BLACK_LIGHTNESS {
        return [h, 0.0, 0.0];
    }

    let max = max_safe_chroma_for_lh(l, h);
    [h, c / max * 100.0, l]
}

/// Converts HSLuv to LCh.
pub fn hsluv_to_lch(hsl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsl;

    if l > WHITE_LIGHTNESS {
        return [100.0, 0.0, h];
    }
    if l < BLACK_LIGHTNESS {
        return [0.0, 0.0, h];
    }

    let max = max_safe_chroma_for_lh(l, h);
    [l, max / 100.0 * s, h]
}

/// Converts sRGB in `[0, 1]` to HSLuv.
///
/// # Example
///
/// ```rust
/// use hsluv::rgb_to_hsluv;
///
/// let [h, s, l] = rgb_to_hsluv([20.0 / 255.0, 50.0 / 255.0, 20.0 / 255.0]);
/// assert!((h - 127.71501294923954).abs() < 1e-9);
/// assert!((s - 67.94319276530133).abs() < 1e-9);
/// assert!((l - 17.829530512200364).abs() < 1e-9);
/// ```
#[inline]
pub fn rgb_to_hsluv(rgb: [f64; 3]) -> [f64; 3] {
    lch_to_hsluv(rgb_to_lch(rgb))
}

/// Converts HSLuv to sRGB, nominally `[0, 1]`.
#[inline]
pub fn hsluv_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    lch_to_rgb(hsluv_to_lch(hsl))
}
