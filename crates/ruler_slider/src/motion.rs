//! Inertial motion controller
//!
//! Replays a release as a sequence of absolute offset targets. A glide
//! parameterizes total displacement directly: every frame the target is
//! recomputed from the offset captured at release, so a late or dropped frame
//! never accumulates error. The controller never touches slider state; the
//! slider feeds each target through its own offset-update path.

use ruler_animation::{Easing, Tween};

/// What a [`Motion`] is animating toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    /// Post-release deceleration
    Inertia,
    /// Cosmetic return of the ruler to a bound
    SnapBack,
}

/// One frame of motion output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    /// Absolute offset the ruler should move to
    pub target: f64,
    /// Whether this was the final frame
    pub done: bool,
}

/// A running glide or snap-back
#[derive(Debug, Clone)]
pub struct Motion {
    kind: MotionKind,
    tween: Tween,
}

impl Motion {
    /// Glide from `base_offset` by `velocity` px/s over `duration_ms`.
    ///
    /// Total displacement equals the release velocity applied for one
    /// second, shaped by the decelerate curve.
    pub fn inertia(base_offset: f64, velocity: f64, duration_ms: u64) -> Self {
        Self {
            kind: MotionKind::Inertia,
            tween: Tween::new(
                base_offset,
                base_offset + velocity,
                duration_ms,
                Easing::Decelerate,
            ),
        }
    }

    /// Ease the ruler from `from` to `to` over `duration_ms`
    pub fn snap_back(from: f64, to: f64, duration_ms: u64) -> Self {
        Self {
            kind: MotionKind::SnapBack,
            tween: Tween::new(from, to, duration_ms, Easing::EaseOut),
        }
    }

    pub fn kind(&self) -> MotionKind {
        self.kind
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.tween.elapsed_ms()
    }

    /// Step the animation by one host frame
    pub fn advance(&mut self, dt_ms: f64) -> MotionFrame {
        let done = self.tween.advance(dt_ms);
        MotionFrame {
            target: self.tween.value(),
            done,
        }
    }
}
