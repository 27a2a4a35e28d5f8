//! Slider interaction phases

use ruler_core::events::{event_types::*, EventType};
use ruler_core::fsm::StateTransitions;
use serde::Serialize;

/// Interaction phase of a slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderPhase {
    /// At rest
    #[default]
    Idle,
    /// Pointer is down and moving the ruler
    Dragging,
    /// Post-release inertia
    Gliding,
    /// Animating the ruler back to a bound
    SnappingBack,
}

impl SliderPhase {
    /// Whether frame ticks still move the ruler
    pub fn is_animating(&self) -> bool {
        matches!(self, SliderPhase::Gliding | SliderPhase::SnappingBack)
    }
}

impl StateTransitions for SliderPhase {
    fn on_event(&self, event: EventType) -> Option<Self> {
        use SliderPhase::*;
        match (self, event) {
            // A new touch interrupts anything in flight
            (Idle | Gliding | SnappingBack, DRAG_START) => Some(Dragging),
            (Dragging, DRAG_END) => Some(Idle),
            (Dragging, FLING) => Some(Gliding),
            (Dragging | Gliding, OVERSCROLL_RELEASE) => Some(SnappingBack),
            (Gliding | SnappingBack, SETTLED) => Some(Idle),
            _ => None,
        }
    }
}
