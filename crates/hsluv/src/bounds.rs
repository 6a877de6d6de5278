//! Gamut boundary geometry in the Luv chroma plane.
//!
//! At a fixed lightness, the colors sRGB can display form a hexagon in the
//! `(u, v)` plane. Each edge is where one linear RGB channel sits at its
//! minimum (0) or maximum (1), so there are six edges: three rows of
//! [`M`] crossed with two channel extrema.
//!
//! ```text
//!                 v
//!                 |      / B=1
//!          G=1 ___|_____/
//!             /   |     \ R=1
//!   ---------/----+------\-------- u
//!      R=0   \    |      /
//!             \___|_____/ G=0
//!                 |  B=0
//! ```
//!
//! Two radii are derived from the edges:
//!
//! - [`max_safe_chroma_for_l`]: the largest circle around the achromatic
//!   point that fits inside the hexagon. Hue-independent; HPLuv uses it.
//! - [`max_safe_chroma_for_lh`]: the distance from the achromatic point to
//!   the hexagon along one hue ray. HSLuv uses it.
//!
//! # Line equation
//!
//! For row `(m1, m2, m3)` of [`M`] and channel extremum `t`:
//!
//! ```text
//! sub    = (L + 16)^3 / 1560896      if that exceeds epsilon
//!        = L / kappa                  otherwise
//! top1   = (284517 * m1 - 94839 * m3) * sub
//! top2   = (838422 * m3 + 769860 * m2 + 731718 * m1) * L * sub - 769860 * t * L
//! bottom = (632260 * m3 - 126452 * m2) * sub + 126452 * t
//!
//! slope = top1 / bottom, intercept = top2 / bottom
//! ```

use std::f64::consts::PI;

use hsluv_primaries::{EPSILON, KAPPA, M};

/// One gamut edge `v = slope * u + intercept` in the Luv chroma plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// Slope of the edge.
    pub slope: f64,
    /// Value of `v` where the edge crosses `u = 0`.
    pub intercept: f64,
}

impl Line {
    /// Creates a line from slope and intercept.
    #[inline]
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Perpendicular distance from the origin to the line.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hsluv::Line;
    ///
    /// // v = u + 2 is sqrt(2) away from the origin
    /// let d = Line::new(1.0, 2.0).distance_from_origin();
    /// assert!((d - 2f64.sqrt()).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn distance_from_origin(&self) -> f64 {
        self.intercept.abs() / (self.slope * self.slope + 1.0).sqrt()
    }

    /// Signed distance from the origin along the ray at angle `theta`
    /// (radians) to where it meets the line.
    ///
    /// Negative when the line is behind the ray; infinite when parallel.
    #[inline]
    pub fn ray_length(&self, theta: f64) -> f64 {
        self.intercept / (theta.sin() - self.slope * theta.cos())
    }
}

/// Computes the six gamut edges at lightness `l`.
///
/// Ordered by row of [`M`] (R, G, B), minimum edge before maximum.
pub fn get_bounds(l: f64) -> [Line; 6] {
    let sub1 = (l + 16.0).powi(3) / 1560896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    let mut bounds = [Line::new(0.0, 0.0); 6];
    for (channel, &[m1, m2, m3]) in M.rows().iter().enumerate() {
        for (k, t) in [0.0, 1.0].into_iter().enumerate() {
            let top1 = (284517.0 * m1 - 94839.0 * m3) * sub2;
            let top2 =
                (838422.0 * m3 + 769860.0 * m2 + 731718.0 * m1) * l * sub2 - 769860.0 * t * l;
            let bottom = (632260.0 * m3 - 126452.0 * m2) * sub2 + 126452.0 * t;

            bounds[channel * 2 + k] = Line::new(top1 / bottom, top2 / bottom);
        }
    }
    bounds
}

/// Largest chroma displayable at lightness `l` for every hue.
///
/// Negative distances are skipped; if no edge qualifies the result is
/// `f64::MAX`.
pub fn max_safe_chroma_for_l(l: f64) -> f64 {
    get_bounds(l)
        .iter()
        .map(Line::distance_from_origin)
        .filter(|&length| length >= 0.0)
        .fold(f64::MAX, f64::min)
}

/// Largest chroma displayable at lightness `l` and hue `h` (degrees).
///
/// Edges the hue ray never reaches (negative length) are skipped; if none
/// qualifies the result is `f64::MAX`.
///
/// # Example
///
/// ```rust
/// use hsluv::{max_safe_chroma_for_l, max_safe_chroma_for_lh};
///
/// // The inscribed circle never reaches past the hexagon
/// for h in [0.0, 90.0, 180.0, 270.0] {
///     assert!(max_safe_chroma_for_l(50.0) <= max_safe_chroma_for_lh(50.0, h) + 1e-9);
/// }
/// ```
pub fn max_safe_chroma_for_lh(l: f64, h: f64) -> f64 {
    let h_rad = h / 360.0 * PI * 2.0;
    get_bounds(l)
        .iter()
        .map(|line| line.ray_length(h_rad))
        .filter(|&length| length >= 0.0)
        .fold(f64::MAX, f64::min)
}
