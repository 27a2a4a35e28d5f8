//! Gesture event model
//!
//! The events a host gesture recognizer and frame loop deliver to a ruler
//! control. Recognition itself happens outside this crate.

use serde::{Deserialize, Serialize};

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    /// Pointer went down and horizontal drag recognition succeeded
    pub const DRAG_START: EventType = 1;
    /// Horizontal drag moved
    pub const DRAG: EventType = 2;
    /// Pointer lifted after a drag
    pub const DRAG_END: EventType = 3;
    /// Host frame tick
    pub const FRAME: EventType = 10;

    // Events raised by the control itself while resolving a release
    /// Release velocity was high enough to start a glide
    pub const FLING: EventType = 20;
    /// Release left the control past one of its bounds
    pub const OVERSCROLL_RELEASE: EventType = 21;
    /// Glide or snap-back animation finished
    pub const SETTLED: EventType = 22;
}

/// A gesture or frame event with associated data.
///
/// Timestamps are milliseconds on a monotonic host clock. They only need to
/// be monotonic within a single drag session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureEvent {
    DragStart {
        #[serde(default)]
        timestamp_ms: Option<f64>,
    },
    DragUpdate {
        /// Horizontal movement since the previous update
        delta_x: f32,
        timestamp_ms: f64,
    },
    DragEnd,
    Frame {
        /// Elapsed time since the previous frame
        dt_ms: f64,
    },
}

impl GestureEvent {
    /// Map the event onto its state-machine event type
    pub fn event_type(&self) -> EventType {
        match self {
            GestureEvent::DragStart { .. } => event_types::DRAG_START,
            GestureEvent::DragUpdate { .. } => event_types::DRAG,
            GestureEvent::DragEnd => event_types::DRAG_END,
            GestureEvent::Frame { .. } => event_types::FRAME,
        }
    }
}
