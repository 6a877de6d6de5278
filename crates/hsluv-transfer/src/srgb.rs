//! sRGB transfer function.
//!
//! A linear segment near black joined to a 2.4 power curve.
//!
//! # Range
//!
//! - Nominal input/output: [0, 1]. Values outside pass through the same
//!   formulas.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Encoded values above this use the power segment when decoding.
pub const DECODE_THRESHOLD: f64 = 0.04045;

/// Linear values at or below this use the linear segment when encoding.
pub const ENCODE_THRESHOLD: f64 = 0.0031308;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V > 0.04045:
///     L = ((V + 0.055) / 1.055)^2.4
/// else:
///     L = V / 12.92
/// ```
///
/// # Example
///
/// ```rust
/// use hsluv_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v > DECODE_THRESHOLD {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= ENCODE_THRESHOLD {
        12.92 * l
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(eotf)
}

/// Applies sRGB OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(oetf)
}
