//! # hsluv-math
//!
//! Double-precision math primitives for the HSLuv conversion pipeline.
//!
//! - [`Mat3`] - 3x3 matrices for RGB/XYZ conversion
//! - [`Vec3`] - 3D vectors for RGB and XYZ triplets
//!
//! # Design
//!
//! Every stage of the pipeline works in `f64`: snapshot values are compared
//! to `1e-9`, well below what `f32` can hold. Matrices use **row-major**
//! storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use hsluv_math::{Mat3, Vec3};
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.41239079926595, 0.35758433938387, 0.18048078840183],
//!     [0.21263900587151, 0.71516867876775, 0.072192315360733],
//!     [0.019330818715591, 0.11919477979462, 0.95053215224966],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.5, 0.25);
//! let xyz = rgb_to_xyz * rgb;
//! ```
//!
//! # Used By
//!
//! - `hsluv-primaries` - Compile-time sRGB matrices
//! - `hsluv` - Linear RGB <-> XYZ stage

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
