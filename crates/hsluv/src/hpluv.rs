//! LCh <-> HPLuv and the composed sRGB pipelines.
//!
//! Same as HSLuv except saturation is relative to
//! [`max_safe_chroma_for_l`], which is the same for every hue. That bound
//! is smaller, so HPLuv only covers pastel colors: saturated sRGB colors
//! come out above 100.

use crate::bounds::max_safe_chroma_for_l;
use crate::consts::{BLACK_LIGHTNESS, WHITE_LIGHTNESS};
use crate::lch::{lch_to_rgb, rgb_to_lch};

/// Converts LCh to HPLuv.
pub fn lch_to_hpluv(lch: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = lch;

    if l > WHITE_LIGHTNESS {
        return [h, 0.0, 100.0];
    }
    if l < BLACK_LIGHTNESS {
        return [h, 0.0, 0.0];
    }

    let max = max_safe_chroma_for_l(l);
    [h, c / max * 100.0, l]
}

/// Converts HPLuv to LCh.
pub fn hpluv_to_lch(hpl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hpl;

    if l > WHITE_LIGHTNESS {
        return [100.0, 0.0, h];
    }
    if l < BLACK_LIGHTNESS {
        return [0.0, 0.0, h];
    }

    let max = max_safe_chroma_for_l(l);
    [l, max / 100.0 * s, h]
}

/// Converts sRGB in `[0, 1]` to HPLuv.
#[inline]
pub fn rgb_to_hpluv(rgb: [f64; 3]) -> [f64; 3] {
    lch_to_hpluv(rgb_to_lch(rgb))
}

/// Converts HPLuv to sRGB, nominally `[0, 1]`.
#[inline]
pub fn hpluv_to_rgb(hpl: [f64; 3]) -> [f64; 3] {
    lch_to_rgb(hpluv_to_lch(hpl))
}
