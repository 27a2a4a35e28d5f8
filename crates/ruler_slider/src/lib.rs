//! Ruler Slider
//!
//! A horizontal ruler that turns drag gestures into quantized numeric values.
//! The ruler scrolls continuously under a fixed center indicator while the
//! value only changes when a whole tick mark crosses it.
//!
//! # Features
//!
//! - **Quantized commits**: one `sensitivity` step per crossed mark
//! - **Bounds**: rubber-band damping past a limit, eased snap-back on release
//! - **Inertia**: a decelerating glide after a fast release
//! - **Haptics**: one light impact per committed crossing
//! - **Render model**: tick marks for any viewport width
//!
//! # Example
//!
//! ```rust
//! use ruler_slider::{SlideDirection, Slider, SliderConfig};
//!
//! let config = SliderConfig::new(-100.0, 100.0, 0.0).inertia(false);
//! let mut slider = Slider::new(config).unwrap();
//!
//! slider.on_drag_start(Some(0.0));
//! slider.on_drag_update(-40.0, 16.0);
//! slider.on_drag_end();
//!
//! assert!((slider.value() - 0.2).abs() < 1e-9);
//! assert_eq!(slider.direction(), SlideDirection::Right);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod haptics;
pub mod motion;
pub mod phase;
pub mod render;
pub mod slider;
pub mod update;

pub use config::{DragPolarity, MarkRounding, SliderConfig};
pub use error::{Result, SliderError};
pub use format::ValueFormatter;
pub use haptics::{CountingHaptics, HapticFeedback, NoHaptics};
pub use motion::{Motion, MotionFrame, MotionKind};
pub use phase::SliderPhase;
pub use render::{RulerLayout, TickMark};
pub use slider::{ChangeCallback, Overscroll, Slider};
pub use update::{RenderState, SlideDirection, SliderUpdate};
