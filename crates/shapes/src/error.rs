//! Construction errors for the validated facade (`make::try_*`).
//!
//! The plain constructors never fail: degenerate parameters flow into
//! degenerate geometry. These kinds only surface when a caller opts into
//! validation.

use thiserror::Error;

/// Reasons a validated constructor rejects its parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("circle radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("side length must be positive, got {0}")]
    NonPositiveSide(f64),

    #[error("polygon needs at least 3 sides, got {0}")]
    TooFewSides(u32),

    /// Rectangle extents must be > 0.
    #[error("{what} must be positive, got {value}")]
    NonPositiveExtent { what: &'static str, value: f64 },

    /// Spacer extents must be >= 0.
    #[error("{what} must not be negative, got {value}")]
    NegativeExtent { what: &'static str, value: f64 },

    #[error("scale factors must be positive, got ({x}, {y})")]
    NonPositiveScale { x: f64, y: f64 },

    #[error("rotation must be a multiple of 90 degrees other than 0, got {0}")]
    UnsupportedRotation(i32),

    #[error("composition has no children")]
    EmptyComposition,
}
