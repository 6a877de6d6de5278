//! # hsluv
//!
//! Conversions between sRGB and the HSLuv / HPLuv color spaces.
//!
//! HSLuv is a hue/saturation/lightness model built on CIE Luv. Unlike HSL,
//! lightness is perceptual and saturation is a percentage of the largest
//! chroma sRGB can display at that hue and lightness, so every
//! `(h, s, l)` with `s` and `l` in `[0, 100]` is a displayable color.
//! HPLuv trades saturation range for a hue-independent bound: its 100% is
//! the largest chroma displayable at that lightness for *every* hue.
//!
//! # Architecture
//!
//! ```text
//!   sRGB  --eotf-->  linear RGB  --M_INV-->  XYZ  -->  Luv  -->  LCh
//!                                                               |
//!                                          +--------------------+
//!                                          |                    |
//!                                        HSLuv                HPLuv
//!                               (ray to gamut edge)   (inscribed circle)
//! ```
//!
//! Every stage is a pure function on `[f64; 3]`. The `to_*` direction runs
//! the same chain in reverse. The gamut geometry in [`bounds`] is shared by
//! both HSLuv and HPLuv.
//!
//! # Quick Start
//!
//! ```rust
//! use hsluv::{Hsluv, hsluv_to_rgb, rgb_to_hsluv};
//!
//! // Free functions on [0, 1] RGB
//! let hsl = rgb_to_hsluv([200.0 / 255.0, 150.0 / 255.0, 20.0 / 255.0]);
//! assert!((hsl[0] - 57.26077539223336).abs() < 1e-9);
//!
//! let rgb = hsluv_to_rgb(hsl);
//! assert!((rgb[0] - 200.0 / 255.0).abs() < 1e-9);
//!
//! // Value record on [0, 255] channels
//! let color = Hsluv::new(20.0, 50.0, 20.0);
//! assert_eq!(color.to_rgb255(), [75, 38, 31]);
//! ```
//!
//! # Color Spaces
//!
//! | Space | Components | Nominal range |
//! |-------|------------|---------------|
//! | RGB | r, g, b | [0, 1] |
//! | XYZ | x, y, z | Y = 1 at white |
//! | Luv | l, u, v | l in [0, 100] |
//! | LCh | l, c, h | h in [0, 360) |
//! | HSLuv | h, s, l | [0, 360), [0, 100], [0, 100] |
//! | HPLuv | h, s, l | [0, 360), [0, 100], [0, 100] |
//!
//! Nothing is clamped. Values outside the nominal ranges are extrapolated
//! by the same formulas, and callers that need display-safe output clamp
//! it themselves (or use [`Hsluv::to_rgb8`], which rejects it).
//!
//! # Dependencies
//!
//! - [`hsluv-math`] - `Vec3` / `Mat3`
//! - [`hsluv-transfer`] - sRGB companding
//! - [`hsluv-primaries`] - Fixed matrices and CIE constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod color;
mod error;
mod hpluv;
mod hsluv;
pub mod bounds;
pub mod consts;
pub mod lch;
pub mod luv;
pub mod xyz;

pub use bounds::{Line, get_bounds, max_safe_chroma_for_l, max_safe_chroma_for_lh};
pub use color::{Hpluv, Hsluv};
pub use error::{ColorError, ColorResult};
pub use hpluv::{hpluv_to_lch, hpluv_to_rgb, lch_to_hpluv, rgb_to_hpluv};
pub use crate::hsluv::{hsluv_to_lch, hsluv_to_rgb, lch_to_hsluv, rgb_to_hsluv};
pub use lch::{lch_to_luv, lch_to_rgb, luv_to_lch, rgb_to_lch};
pub use luv::{l_to_y, luv_to_xyz, xyz_to_luv, y_to_l};
pub use xyz::{rgb_to_xyz, xyz_to_rgb};

// Re-export sub-crates for convenience
pub use hsluv_math as math;
pub use hsluv_primaries as primaries;
pub use hsluv_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        ColorError, ColorResult, Hpluv, Hsluv, hpluv_to_rgb, hsluv_to_rgb, rgb_to_hpluv,
        rgb_to_hsluv,
    };
}
