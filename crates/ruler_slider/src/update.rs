//! Value-change notifications and render snapshots

use serde::{Deserialize, Serialize};

use crate::phase::SliderPhase;

/// Direction of the most recent value change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideDirection {
    /// Value decreased
    Left,
    /// Value increased
    Right,
    /// Value unchanged, or a drag-end / settle report
    #[default]
    None,
}

impl SlideDirection {
    /// Direction of a change from `previous` to `current`
    pub fn between(previous: f64, current: f64) -> Self {
        if current > previous {
            SlideDirection::Right
        } else if current < previous {
            SlideDirection::Left
        } else {
            SlideDirection::None
        }
    }
}

/// Emitted on every observable value change and once at each drag end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderUpdate {
    pub value: f64,
    pub direction: SlideDirection,
}

impl SliderUpdate {
    pub fn new(value: f64, direction: SlideDirection) -> Self {
        Self { value, direction }
    }

    /// A drag-end or settle report
    pub fn settled(value: f64) -> Self {
        Self::new(value, SlideDirection::None)
    }
}

/// Snapshot the renderer reads each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    /// Continuous ruler position in pixels
    pub offset: f64,
    /// Committed value
    pub value: f64,
    /// Direction of the last committed change
    pub direction: SlideDirection,
    pub phase: SliderPhase,
}
