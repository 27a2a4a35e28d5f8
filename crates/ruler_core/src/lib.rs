//! Ruler Core Runtime
//!
//! Foundational primitives shared by ruler controls:
//!
//! - **Gesture Events**: drag start / update / end and frame ticks as plain data
//! - **Phase State Machines**: flat statecharts for interaction phases
//!
//! # Example
//!
//! ```rust
//! use ruler_core::events::{event_types, GestureEvent};
//!
//! let event = GestureEvent::DragUpdate {
//!     delta_x: -3.0,
//!     timestamp_ms: 16.0,
//! };
//! assert_eq!(event.event_type(), event_types::DRAG);
//! ```

pub mod events;
pub mod fsm;

pub use events::{EventType, GestureEvent};
pub use fsm::{StateMachine, StateTransitions};
