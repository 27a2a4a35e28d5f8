//! Slider error types

use thiserror::Error;

/// Slider configuration and programmatic-update errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SliderError {
    /// A bound is NaN
    #[error("Slider bound is not a number: {name}")]
    NanBound { name: &'static str },

    /// Lower bound is above the upper bound
    #[error("Slider bounds are inverted: min {min} > max {max}")]
    InvertedBounds { min: f64, max: f64 },

    /// Value lies outside the configured range
    #[error("Value {value} is outside [{min}, {max}]")]
    ValueOutOfRange { value: f64, min: f64, max: f64 },

    /// Value per crossed mark must be finite and positive
    #[error("Sensitivity must be finite and > 0, got {0}")]
    InvalidSensitivity(f64),

    /// Pixel distance between marks must be finite and positive
    #[error("Tick spacing must be finite and > 0, got {0}")]
    InvalidTickSpacing(f64),

    /// Fling threshold must be a non-negative number
    #[error("Minimum fling velocity must be >= 0, got {0}")]
    InvalidFlingVelocity(f64),

    /// Major tick period must be at least one
    #[error("Major tick period must be >= 1")]
    InvalidMajorTickPeriod,
}

/// Result type for slider operations
pub type Result<T> = std::result::Result<T, SliderError>;
