//! Slider configuration
//!
//! [`SliderConfig`] is immutable once a [`Slider`](crate::Slider) is built.
//! It can be assembled with the builder methods or deserialized (TOML accepts
//! `inf` / `-inf` for unbounded sides):
//!
//! ```rust
//! use ruler_slider::SliderConfig;
//!
//! let config = SliderConfig::new(-100.0, 100.0, 0.0)
//!     .sensitivity(0.5)
//!     .tick_spacing(12.0)
//!     .haptics(false);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SliderError};

/// Shortest glide, in milliseconds
pub const MIN_INERTIA_DURATION_MS: u64 = 500;

/// Glide milliseconds per px/s of release velocity
pub const INERTIA_MS_PER_VELOCITY: f64 = 0.7;

/// Which finger direction increases the value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPolarity {
    /// The ruler follows the finger: dragging left brings higher marks under
    /// the center line
    #[default]
    DragLeftIncreases,
    /// Dragging right increases the value
    DragRightIncreases,
}

impl DragPolarity {
    /// Convert a horizontal pointer delta into an offset-space delta
    pub fn offset_delta(&self, delta_x: f64) -> f64 {
        match self {
            DragPolarity::DragLeftIncreases => -delta_x,
            DragPolarity::DragRightIncreases => delta_x,
        }
    }
}

/// How a fractional number of crossed marks is turned into whole marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkRounding {
    /// A mark counts only once a full tick spacing has been travelled
    #[default]
    TowardZero,
    /// Half a tick spacing already counts as a crossing
    Nearest,
}

impl MarkRounding {
    pub fn quantize(&self, marks: f64) -> f64 {
        match self {
            MarkRounding::TowardZero => marks.trunc(),
            MarkRounding::Nearest => marks.round(),
        }
    }
}

/// Slider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Lower bound, may be `-inf`
    pub min_value: f64,
    /// Upper bound, may be `inf`
    pub max_value: f64,
    /// Starting value, must lie within the bounds
    pub initial_value: f64,
    /// Value change per crossed tick mark
    pub sensitivity: f64,
    /// Pixel distance between adjacent marks
    pub tick_spacing: f64,
    /// Glide after a fast release
    pub inertia_enabled: bool,
    /// Upper bound on glide length; also the snap-back duration
    pub inertia_max_duration_ms: u64,
    /// Fire a light impact on each committed crossing
    pub haptics_enabled: bool,
    /// Release speed (px/s) above which a glide starts
    pub min_fling_velocity: f64,
    pub polarity: DragPolarity,
    pub mark_rounding: MarkRounding,
    /// Every N-th mark is drawn taller
    pub major_tick_every: u32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min_value: f64::NEG_INFINITY,
            max_value: f64::INFINITY,
            initial_value: 0.0,
            sensitivity: 0.1,
            tick_spacing: 20.0,
            inertia_enabled: true,
            inertia_max_duration_ms: 1500,
            haptics_enabled: true,
            min_fling_velocity: 100.0,
            polarity: DragPolarity::default(),
            mark_rounding: MarkRounding::default(),
            major_tick_every: 5,
        }
    }
}

impl SliderConfig {
    /// Create a config with the given range and starting value
    pub fn new(min_value: f64, max_value: f64, initial_value: f64) -> Self {
        Self {
            min_value,
            max_value,
            initial_value,
            ..Default::default()
        }
    }

    /// Create an unbounded config starting at `initial_value`
    pub fn unbounded(initial_value: f64) -> Self {
        Self {
            initial_value,
            ..Default::default()
        }
    }

    /// Set the value change per crossed mark
    pub fn sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Set the pixel distance between marks
    pub fn tick_spacing(mut self, spacing: f64) -> Self {
        self.tick_spacing = spacing;
        self
    }

    /// Enable or disable the release glide
    pub fn inertia(mut self, enabled: bool) -> Self {
        self.inertia_enabled = enabled;
        self
    }

    /// Set the upper bound on glide length
    pub fn inertia_max_duration_ms(mut self, ms: u64) -> Self {
        self.inertia_max_duration_ms = ms;
        self
    }

    /// Enable or disable haptic pulses
    pub fn haptics(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }

    /// Set the release speed that starts a glide
    pub fn min_fling_velocity(mut self, velocity: f64) -> Self {
        self.min_fling_velocity = velocity;
        self
    }

    /// Set the drag polarity
    pub fn polarity(mut self, polarity: DragPolarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Set the mark rounding mode
    pub fn mark_rounding(mut self, rounding: MarkRounding) -> Self {
        self.mark_rounding = rounding;
        self
    }

    /// Check every field, failing on the first violation
    pub fn validate(&self) -> Result<()> {
        if self.min_value.is_nan() {
            return Err(SliderError::NanBound { name: "min_value" });
        }
        if self.max_value.is_nan() {
            return Err(SliderError::NanBound { name: "max_value" });
        }
        if self.min_value > self.max_value {
            return Err(SliderError::InvertedBounds {
                min: self.min_value,
                max: self.max_value,
            });
        }
        self.check_in_range(self.initial_value)?;
        if !(self.sensitivity.is_finite() && self.sensitivity > 0.0) {
            return Err(SliderError::InvalidSensitivity(self.sensitivity));
        }
        if !(self.tick_spacing.is_finite() && self.tick_spacing > 0.0) {
            return Err(SliderError::InvalidTickSpacing(self.tick_spacing));
        }
        if self.min_fling_velocity.is_nan() || self.min_fling_velocity < 0.0 {
            return Err(SliderError::InvalidFlingVelocity(self.min_fling_velocity));
        }
        if self.major_tick_every == 0 {
            return Err(SliderError::InvalidMajorTickPeriod);
        }
        Ok(())
    }

    /// Fail unless `value` is a finite number within the bounds
    pub fn check_in_range(&self, value: f64) -> Result<()> {
        if value.is_finite() && self.contains(value) {
            Ok(())
        } else {
            Err(SliderError::ValueOutOfRange {
                value,
                min: self.min_value,
                max: self.max_value,
            })
        }
    }

    /// Whether `value` lies within `[min_value, max_value]`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min_value && value <= self.max_value
    }

    /// Glide length for a release velocity in px/s
    pub fn inertia_duration_ms(&self, velocity: f64) -> u64 {
        let scaled = (velocity.abs() * INERTIA_MS_PER_VELOCITY).round();
        let scaled = if scaled.is_finite() {
            scaled as u64
        } else {
            u64::MAX
        };
        scaled
            .max(MIN_INERTIA_DURATION_MS)
            .min(self.inertia_max_duration_ms)
    }
}
