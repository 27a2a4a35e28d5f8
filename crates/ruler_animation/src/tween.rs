//! Timed single-value animations
//!
//! A [`Tween`] moves one scalar from a start to an end value over a fixed
//! duration along an [`Easing`] curve. The host frame loop drives it through
//! [`Tween::advance`]; nothing here owns a clock.

use crate::easing::Easing;

/// A single-value eased animation
#[derive(Clone, Debug)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: u64,
    elapsed_ms: f64,
    easing: Easing,
    playing: bool,
}

impl Tween {
    /// Create a tween that starts playing immediately
    pub fn new(from: f64, to: f64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            elapsed_ms: 0.0,
            easing,
            playing: duration_ms > 0,
        }
    }

    /// Advance by `dt_ms` milliseconds. Returns `true` once the tween is done.
    ///
    /// Negative or NaN deltas are treated as zero.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        if !self.playing {
            return true;
        }

        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms += dt_ms;
        }

        if self.elapsed_ms >= self.duration_ms as f64 {
            self.elapsed_ms = self.duration_ms as f64;
            self.playing = false;
        }

        !self.playing
    }

    /// Linear progress through the duration (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    /// Eased progress (0.0 to 1.0)
    pub fn curve_value(&self) -> f64 {
        self.easing.apply(self.progress())
    }

    /// Current interpolated value
    pub fn value(&self) -> f64 {
        self.from + (self.to - self.from) * self.curve_value()
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }
}
