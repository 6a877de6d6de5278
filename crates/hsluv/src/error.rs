//! Error types for the checked conversion layer.
//!
//! The conversion functions themselves are total and never fail. Errors
//! only come from the opt-in validation on [`Hsluv`](crate::Hsluv) and
//! [`Hpluv`](crate::Hpluv): non-finite inputs and 8-bit outputs that do not
//! fit in a `u8`.

use thiserror::Error;

/// Color validation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Input component is NaN or infinite.
    #[error("invalid {component} value: {value}")]
    InvalidValue {
        /// Component name (`h`, `s` or `l`).
        component: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Rounded RGB channel does not fit in 0..=255.
    #[error("{channel} channel out of 8-bit range: {value}")]
    OutOfRange {
        /// Channel name (`r`, `g` or `b`).
        channel: &'static str,
        /// The rounded channel value.
        value: f64,
    },
}

/// Result type for checked color operations.
pub type ColorResult<T> = Result<T, ColorError>;
