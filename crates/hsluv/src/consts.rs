//! Thresholds that decide the degenerate cases of the pipeline.
//!
//! These are tuned to reproduce the published HSLuv reference values and
//! must not be replaced by machine-epsilon based values.

/// Lightness above which a color is treated as pure white.
pub const WHITE_LIGHTNESS: f64 = 99.9999999;

/// Lightness below which a color is treated as pure black.
pub const BLACK_LIGHTNESS: f64 = 0.00000001;

/// Chroma below which hue is undefined and reported as 0.
pub const ACHROMATIC_CHROMA: f64 = 0.00000001;
