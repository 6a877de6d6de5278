//! Named HSLuv / HPLuv color records.
//!
//! [`Hsluv`] and [`Hpluv`] wrap the free functions with the conventions
//! most callers want at the edge of a program: RGB channels in `[0, 255]`,
//! integer output rounded per channel, and an opt-in checked layer that
//! rejects non-finite input and 8-bit output that would not fit.
//!
//! # Example
//!
//! ```rust
//! use hsluv::Hsluv;
//!
//! let color = Hsluv::from_rgb255(200.0, 150.0, 20.0);
//! assert!((color.h - 57.26077539223336).abs() < 1e-9);
//!
//! let rgb = Hsluv::new(20.0, 50.0, 20.0).to_rgb8().unwrap();
//! assert_eq!(rgb, [75, 38, 31]);
//! ```

use tracing::{debug, trace};

use crate::error::{ColorError, ColorResult};
use crate::hpluv::{hpluv_to_lch, lch_to_hpluv};
use crate::hsluv::{hsluv_to_lch, lch_to_hsluv};
use crate::lch::{lch_to_rgb, rgb_to_lch};

const CHANNELS: [&str; 3] = ["r", "g", "b"];

/// Rejects NaN and infinite components.
fn validate(h: f64, s: f64, l: f64) -> ColorResult<()> {
    for (component, value) in [("h", h), ("s", s), ("l", l)] {
        if !value.is_finite() {
            debug!(component, value, "Rejecting non-finite component");
            return Err(ColorError::InvalidValue { component, value });
        }
    }
    Ok(())
}

/// Scales `[0, 1]` channels to `[0, 255]` and rounds half away from zero.
///
/// `as i64` turns NaN into 0 and saturates infinities.
#[inline]
fn round_255(rgb: [f64; 3]) -> [i64; 3] {
    rgb.map(|c| (c * 255.0).round() as i64)
}

/// Rounds to `[0, 255]` and rejects channels that do not fit in a `u8`.
fn checked_u8(rgb: [f64; 3]) -> ColorResult<[u8; 3]> {
    let mut out = [0u8; 3];
    for (i, c) in rgb.into_iter().enumerate() {
        let value = (c * 255.0).round();
        if !(0.0..=255.0).contains(&value) {
            debug!(channel = CHANNELS[i], value, "Channel outside 8-bit range");
            return Err(ColorError::OutOfRange { channel: CHANNELS[i], value });
        }
        out[i] = value as u8;
    }
    Ok(out)
}

// ============================================================================
// HSLuv
// ============================================================================

/// A color in HSLuv.
///
/// No invariant is enforced: any component may hold any value, including
/// out-of-range ones produced by out-of-gamut input. Use [`Hsluv::checked`]
/// to reject non-finite values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsluv {
    /// Hue in degrees, [0, 360)
    pub h: f64,
    /// Saturation as a percentage of the max chroma for this hue, [0, 100]
    pub s: f64,
    /// Lightness, [0, 100]
    pub l: f64,
}

impl Hsluv {
    /// Creates a color from its components as given.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Creates a color, rejecting NaN or infinite components.
    pub fn checked(h: f64, s: f64, l: f64) -> ColorResult<Self> {
        validate(h, s, l)?;
        Ok(Self::new(h, s, l))
    }

    /// Converts from sRGB with channels in `[0, 1]`.
    pub fn from_rgb(rgb: [f64; 3]) -> Self {
        trace!(r = rgb[0], g = rgb[1], b = rgb[2], "Hsluv::from_rgb");
        Self::from_lch(rgb_to_lch(rgb))
    }

    /// Converts from sRGB with channels in `[0, 255]`.
    ///
    /// Accepts fractional channel values.
    pub fn from_rgb255(r: f64, g: f64, b: f64) -> Self {
        Self::from_rgb([r / 255.0, g / 255.0, b / 255.0])
    }

    /// Converts from 8-bit sRGB.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb.map(f64::from);
        Self::from_rgb255(r, g, b)
    }

    /// Converts from LCh.
    #[inline]
    pub fn from_lch(lch: [f64; 3]) -> Self {
        lch_to_hsluv(lch).into()
    }

    /// Converts to LCh.
    #[inline]
    pub fn to_lch(&self) -> [f64; 3] {
        hsluv_to_lch(self.to_array())
    }

    /// Converts to sRGB with channels nominally in `[0, 1]`.
    pub fn to_rgb(&self) -> [f64; 3] {
        trace!(h = self.h, s = self.s, l = self.l, "Hsluv::to_rgb");
        lch_to_rgb(self.to_lch())
    }

    /// Converts to sRGB with channels rounded to integers in `[0, 255]`.
    ///
    /// Out-of-gamut colors are not clamped and may round outside that range.
    /// The cast maps a NaN channel to 0 and saturates infinite ones, so a
    /// non-finite color still yields plausible channels. Build with
    /// [`Hsluv::checked`] or convert with [`Hsluv::to_rgb8`] to catch it.
    pub fn to_rgb255(&self) -> [i64; 3] {
        round_255(self.to_rgb())
    }

    /// Converts to 8-bit sRGB, failing when a channel rounds outside
    /// `0..=255`.
    pub fn to_rgb8(&self) -> ColorResult<[u8; 3]> {
        checked_u8(self.to_rgb())
    }

    /// Converts to HPLuv through LCh.
    pub fn to_hpluv(&self) -> Hpluv {
        Hpluv::from_lch(self.to_lch())
    }

    /// Returns `[h, s, l]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.h, self.s, self.l]
    }
}

impl From<[f64; 3]> for Hsluv {
    #[inline]
    fn from(hsl: [f64; 3]) -> Self {
        Self::new(hsl[0], hsl[1], hsl[2])
    }
}

impl From<Hsluv> for [f64; 3] {
    #[inline]
    fn from(c: Hsluv) -> [f64; 3] {
        c.to_array()
    }
}

impl From<Hpluv> for Hsluv {
    fn from(c: Hpluv) -> Self {
        c.to_hsluv()
    }
}

// ============================================================================
// HPLuv
// ============================================================================

/// A color in HPLuv.
///
/// Saturation is relative to the chroma every hue can reach at this
/// lightness, so saturated sRGB colors have `s > 100`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hpluv {
    /// Hue in degrees, [0, 360)
    pub h: f64,
    /// Saturation as a percentage of the hue-independent max chroma
    pub s: f64,
    /// Lightness, [0, 100]
    pub l: f64,
}

impl Hpluv {
    /// Creates a color from its components as given.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Creates a color, rejecting NaN or infinite components.
    pub fn checked(h: f64, s: f64, l: f64) -> ColorResult<Self> {
        validate(h, s, l)?;
        Ok(Self::new(h, s, l))
    }

    /// Converts from sRGB with channels in `[0, 1]`.
    pub fn from_rgb(rgb: [f64; 3]) -> Self {
        trace!(r = rgb[0], g = rgb[1], b = rgb[2], "Hpluv::from_rgb");
        Self::from_lch(rgb_to_lch(rgb))
    }

    /// Converts from sRGB with channels in `[0, 255]`.
    pub fn from_rgb255(r: f64, g: f64, b: f64) -> Self {
        Self::from_rgb([r / 255.0, g / 255.0, b / 255.0])
    }

    /// Converts from 8-bit sRGB.
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb.map(f64::from);
        Self::from_rgb255(r, g, b)
    }

    /// Converts from LCh.
    #[inline]
    pub fn from_lch(lch: [f64; 3]) -> Self {
        lch_to_hpluv(lch).into()
    }

    /// Converts to LCh.
    #[inline]
    pub fn to_lch(&self) -> [f64; 3] {
        hpluv_to_lch(self.to_array())
    }

    /// Converts to sRGB with channels nominally in `[0, 1]`.
    pub fn to_rgb(&self) -> [f64; 3] {
        trace!(h = self.h, s = self.s, l = self.l, "Hpluv::to_rgb");
        lch_to_rgb(self.to_lch())
    }

    /// Converts to sRGB with channels rounded to integers in `[0, 255]`.
    ///
    /// Same caveats as [`Hsluv::to_rgb255`]: no clamping, and NaN channels
    /// come out as 0. Use [`Hpluv::to_rgb8`] to reject them.
    pub fn to_rgb255(&self) -> [i64; 3] {
        round_255(self.to_rgb())
    }

    /// Converts to 8-bit sRGB, failing when a channel rounds outside
    /// `0..=255`.
    pub fn to_rgb8(&self) -> ColorResult<[u8; 3]> {
        checked_u8(self.to_rgb())
    }

    /// Converts to HSLuv through LCh.
    pub fn to_hsluv(&self) -> Hsluv {
        Hsluv::from_lch(self.to_lch())
    }

    /// Returns `[h, s, l]`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.h, self.s, self.l]
    }
}

impl From<[f64; 3]> for Hpluv {
    #[inline]
    fn from(hpl: [f64; 3]) -> Self {
        Self::new(hpl[0], hpl[1], hpl[2])
    }
}

impl From<Hpluv> for [f64; 3] {
    #[inline]
    fn from(c: Hpluv) -> [f64; 3] {
        c.to_array()
    }
}

impl From<Hsluv> for Hpluv {
    fn from(c: Hsluv) -> Self {
        c.to_hpluv()
    }
}
