//! Easing curves for ruler motion

/// Easing curve applied to normalized animation progress
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Quadratic deceleration, `1 - (1 - t)^2`. Used for post-release glides.
    Decelerate,
    /// Cubic ease-out, `1 - (1 - t)^3`. Used for snap-back.
    EaseOut,
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    ///
    /// Input outside the unit interval is clamped, so `apply(1.0)` is always
    /// exactly `1.0` and the curve never overshoots its endpoint.
    pub fn apply(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}
