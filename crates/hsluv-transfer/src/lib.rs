//! # hsluv-transfer
//!
//! The sRGB transfer function, the first and last stage of every HSLuv
//! conversion.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//!
//! Companding is applied per channel and never clamps: out-of-gamut linear
//! values produce negative or greater-than-one encoded values, and the
//! caller decides what to do with them.
//!
//! # Usage
//!
//! ```rust
//! use hsluv_transfer::srgb;
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `hsluv` - RGB <-> XYZ stage

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
