//! 3D vector type for color triplets.
//!
//! [`Vec3`] carries RGB or XYZ values through the matrix stage.
//!
//! # Usage
//!
//! ```rust
//! use hsluv_math::Vec3;
//!
//! let rgb = Vec3::from_array([1.0, 0.5, 0.25]);
//! assert_eq!(rgb.to_array(), [1.0, 0.5, 0.25]);
//! ```

/// A 3D vector for color triplets (RGB, XYZ).
///
/// For RGB: x=R, y=G, z=B. For XYZ: x=X, y=Y, z=Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// X component (R for RGB, X for XYZ)
    pub x: f64,
    /// Y component (G for RGB, Y for XYZ)
    pub y: f64,
    /// Z component (B for RGB, Z for XYZ)
    pub z: f64,
}

impl Vec3 {
    /// One vector (1, 1, 1), linear RGB white.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl From<[f64; 3]> for Vec3 {
    #[inline]
    fn from(a: [f64; 3]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec3> for [f64; 3] {
    #[inline]
    fn from(v: Vec3) -> [f64; 3] {
        v.to_array()
    }
}
